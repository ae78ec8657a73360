//! ListenBrainz ecosystem integration - listen history, tag metadata,
//! recording search, and cover art.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - Internal types that represent our business logic
//! - **API DTOs** (`listenbrainz/dto.rs`, `musicbrainz/dto.rs`, `coverart/dto.rs`) -
//!   Exact API response shapes
//! - **Adapters** - Convert DTOs to domain models
//! - **Clients** - HTTP clients for external APIs
//! - **Traits** (`traits.rs`) - Seams over the clients so the word-cloud
//!   pipeline can be driven by mocks in tests
//!
//! This decoupling means API changes don't ripple through our codebase and
//! we can test API contracts independently.

pub mod coverart;
pub mod domain;
pub mod listenbrainz;
pub mod musicbrainz;
pub mod traits;

pub use coverart::CoverArtClient;
pub use domain::{
    ListenRecord, RecordingMatch, StatsPeriod, TagBundle, TagKind, TokenValidation, UpstreamError,
};
pub use listenbrainz::ListenBrainzClient;
pub use musicbrainz::MusicBrainzClient;
pub use traits::{ListenHistory, TagMetadata};
