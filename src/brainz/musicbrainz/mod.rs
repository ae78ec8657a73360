//! MusicBrainz API integration
//!
//! Used to resolve a recording MBID from artist/release/track names when a
//! listen arrives without a catalog mapping (playing-now entries usually do).
//! API docs: https://musicbrainz.org/doc/MusicBrainz_API

mod adapter;
mod client;
pub mod dto;

pub use client::MusicBrainzClient;
