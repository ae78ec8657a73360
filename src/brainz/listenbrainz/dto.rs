//! ListenBrainz API Data Transfer Objects
//!
//! These types match EXACTLY what the ListenBrainz API returns.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the listenbrainz module - convert to domain types.
//!
//! API Reference: https://listenbrainz.readthedocs.io/en/latest/users/api/
//!
//! We use:
//! - `GET /1/user/{name}/listens` (paginated via `count` and `max_ts`)
//! - `GET /1/user/{name}/playing-now`
//! - `GET /1/user/{name}/listen-count`
//! - `POST /1/metadata/recording/` with `inc=tag` (batch tag lookup)
//! - `GET /1/validate-token`

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Envelope for listens and playing-now responses
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListensResponse {
    pub payload: ListensPayload,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListensPayload {
    /// Number of listens in this page
    pub count: u32,
    #[serde(default)]
    pub listens: Vec<Listen>,
}

/// One listen entry
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Listen {
    /// Unix timestamp; absent for playing-now entries
    pub listened_at: Option<i64>,
    pub track_metadata: TrackMetadata,
}

/// Scrobbled track info
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackMetadata {
    pub artist_name: String,
    pub release_name: Option<String>,
    pub track_name: String,
    /// Present only when ListenBrainz matched the listen to MusicBrainz
    pub mbid_mapping: Option<MbidMapping>,
}

/// Catalog match for a listen
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MbidMapping {
    pub recording_mbid: Option<String>,
    /// Release the recording was matched on
    #[serde(default)]
    pub release_mbid: Option<String>,
    /// Release the Cover Art Archive indexes the artwork under
    #[serde(default)]
    pub caa_release_mbid: Option<String>,
}

/// Envelope for the listen-count response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListenCountResponse {
    pub payload: ListenCountPayload,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListenCountPayload {
    /// Total listens the account has submitted
    pub count: u64,
}

/// Per-recording entry of the batch metadata response.
///
/// The endpoint returns a JSON object keyed by recording MBID; use
/// `HashMap<String, RecordingMetadata>` as the top-level shape.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordingMetadata {
    /// Tag lists per category, present when `inc=tag` was requested
    pub tag: Option<TagCategories>,
}

/// Tag lists per category
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TagCategories {
    #[serde(default)]
    pub artist: Vec<TagOccurrence>,
    #[serde(default)]
    pub recording: Vec<TagOccurrence>,
    #[serde(default)]
    pub release_group: Vec<TagOccurrence>,
}

/// One tag attached to an entity
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TagOccurrence {
    /// The tag word, reproduced verbatim
    pub tag: String,
    /// Vote count on the upstream entity (unused by aggregation)
    pub count: Option<u32>,
}

/// Response of GET /1/validate-token
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ValidateTokenResponse {
    pub code: u32,
    pub message: String,
    pub valid: bool,
    pub user_name: Option<String>,
}

/// Error response body from the ListenBrainz API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    pub code: u32,
    pub error: String,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================
