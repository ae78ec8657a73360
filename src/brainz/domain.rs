//! Internal domain models for listens, tags, and upstream failures.
//!
//! These types are OUR types - they don't change when external APIs change.
//! All external API responses get converted into these types via adapters.

use std::str::FromStr;

/// One playback event from a user's listen history.
///
/// Immutable; scoped to a single pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenRecord {
    /// Artist name as scrobbled
    pub artist: String,
    /// Release (album) name, empty when the source had none
    pub release: String,
    /// Track name as scrobbled
    pub track: String,
    /// Canonical MusicBrainz recording ID, present only when ListenBrainz
    /// matched the listen to a catalog entry
    pub recording_mbid: Option<String>,
    /// Release the mapping resolved to, usable for cover-art lookup
    pub release_mbid: Option<String>,
    /// Unix timestamp of the listen (absent for playing-now entries)
    pub listened_at: Option<i64>,
}

impl ListenRecord {
    /// Whether this listen carries a usable recording identifier.
    pub fn is_identified(&self) -> bool {
        self.recording_mbid.as_deref().is_some_and(|m| !m.is_empty())
    }
}

/// Tag category on a recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Artist,
    Recording,
    ReleaseGroup,
}

/// Tag words attached to one recording, grouped by category.
///
/// Repeated words are preserved - every occurrence counts independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagBundle {
    pub artist: Vec<String>,
    pub recording: Vec<String>,
    pub release_group: Vec<String>,
}

impl TagBundle {
    /// All tag occurrences in category order (artist, recording,
    /// release-group), repeats included.
    pub fn occurrences(&self) -> impl Iterator<Item = (TagKind, &str)> {
        let artist = self.artist.iter().map(|t| (TagKind::Artist, t.as_str()));
        let recording = self
            .recording
            .iter()
            .map(|t| (TagKind::Recording, t.as_str()));
        let release_group = self
            .release_group
            .iter()
            .map(|t| (TagKind::ReleaseGroup, t.as_str()));
        artist.chain(recording).chain(release_group)
    }

    /// Total number of tag occurrences across all categories.
    pub fn len(&self) -> usize {
        self.artist.len() + self.recording.len() + self.release_group.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A recording matched by MusicBrainz search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingMatch {
    /// MusicBrainz recording ID
    pub recording_mbid: String,
    /// Release the match was found on, when the search returned one
    pub release_mbid: Option<String>,
}

/// Result of validating a ListenBrainz user token.
#[derive(Debug, Clone)]
pub struct TokenValidation {
    pub valid: bool,
    /// Account name the token belongs to (present when valid)
    pub user_name: Option<String>,
    /// Human-readable status from the API
    pub message: String,
}

/// Time window for grid-stats chart art.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsPeriod {
    Week,
    Month,
    HalfYearly,
    Year,
    AllTime,
}

impl StatsPeriod {
    /// Path segment the ListenBrainz art endpoint expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatsPeriod::Week => "week",
            StatsPeriod::Month => "month",
            StatsPeriod::HalfYearly => "half_yearly",
            StatsPeriod::Year => "year",
            StatsPeriod::AllTime => "all_time",
        }
    }
}

impl FromStr for StatsPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(StatsPeriod::Week),
            "month" => Ok(StatsPeriod::Month),
            "half_yearly" => Ok(StatsPeriod::HalfYearly),
            "year" => Ok(StatsPeriod::Year),
            "all_time" => Ok(StatsPeriod::AllTime),
            other => Err(format!(
                "unknown period '{other}' (expected week, month, half_yearly, year, or all_time)"
            )),
        }
    }
}

/// Failure from an upstream service (ListenBrainz, MusicBrainz, Cover Art
/// Archive).
///
/// Propagated to the caller unmodified; never retried here. Callers report
/// the failure and abort the run - there is no partial-result fallback.
#[derive(Debug, Clone, thiserror::Error)]
pub enum UpstreamError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("failed to parse response: {0}")]
    Parse(String),

    #[error("rate limited - try again later")]
    RateLimited,

    #[error("no matching entry found")]
    NotFound,
}
