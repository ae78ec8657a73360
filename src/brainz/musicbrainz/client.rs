//! MusicBrainz HTTP client
//!
//! Handles communication with the MusicBrainz web service.
//! See: https://musicbrainz.org/doc/MusicBrainz_API
//!
//! IMPORTANT: MusicBrainz requires a User-Agent header and rate limits to 1 req/sec.

use super::{adapter, dto};
use crate::brainz::domain::{RecordingMatch, UpstreamError};

/// User agent string - MusicBrainz requires this
const USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/brainzcloud/brainzcloud)"
);

/// MusicBrainz API client
pub struct MusicBrainzClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl MusicBrainzClient {
    /// Create a new client
    pub fn new() -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: "https://musicbrainz.org/ws/2".to_string(),
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Search for a recording by artist, release, and track names.
    ///
    /// Returns the most relevant hit, or `None` when nothing matches.
    pub async fn search_recording(
        &self,
        artist: &str,
        release: &str,
        track: &str,
    ) -> Result<Option<RecordingMatch>, UpstreamError> {
        let query = build_query(artist, release, track);
        let url = format!(
            "{}/recording?query={}&fmt=json&limit=1",
            self.base_url,
            urlencoding::encode(&query)
        );

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| UpstreamError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(UpstreamError::RateLimited);
        }

        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let parsed = response
            .json::<dto::RecordingSearchResponse>()
            .await
            .map_err(|e| UpstreamError::Parse(e.to_string()))?;

        Ok(adapter::to_recording_match(parsed))
    }
}

impl Default for MusicBrainzClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a Lucene field query from the listen's names.
///
/// Omits the release clause when the listen had no release name; quotes
/// inside names are escaped so they don't terminate the phrase.
fn build_query(artist: &str, release: &str, track: &str) -> String {
    let mut query = format!(
        "artist:\"{}\" AND recording:\"{}\"",
        escape(artist),
        escape(track)
    );
    if !release.is_empty() {
        query.push_str(&format!(" AND release:\"{}\"", escape(release)));
    }
    query
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
