//! Cover Art Archive integration
//!
//! Resolves front-cover artwork URLs from coverartarchive.org using
//! MusicBrainz release IDs. No API key required.

mod client;
pub mod dto;

pub use client::CoverArtClient;
