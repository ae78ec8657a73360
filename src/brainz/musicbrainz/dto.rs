//! MusicBrainz search API Data Transfer Objects
//!
//! These types match EXACTLY what the MusicBrainz recording-search endpoint
//! returns. DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the musicbrainz module - convert to domain types.
//!
//! API Reference: https://musicbrainz.org/doc/MusicBrainz_API/Search

use serde::{Deserialize, Serialize};

/// Recording search response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordingSearchResponse {
    pub count: u32,
    #[serde(default)]
    pub recordings: Vec<FoundRecording>,
}

/// One recording hit
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FoundRecording {
    /// MusicBrainz recording ID
    pub id: String,
    /// Track title
    pub title: Option<String>,
    /// Search relevance (0-100)
    pub score: Option<u32>,
    /// Releases this recording appears on
    #[serde(default)]
    pub releases: Vec<FoundRelease>,
}

/// Release info within a search hit
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FoundRelease {
    /// MusicBrainz release ID
    pub id: String,
    pub title: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================
