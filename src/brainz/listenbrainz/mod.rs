//! ListenBrainz API integration
//!
//! ListenBrainz records listen history and serves recording metadata.
//! API docs: https://listenbrainz.readthedocs.io/en/latest/users/api/

mod adapter;
mod client;
pub mod dto;

pub use client::ListenBrainzClient;
