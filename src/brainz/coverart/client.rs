//! Cover Art Archive HTTP client
//!
//! Resolves front-cover URLs from the Cover Art Archive.
//! No API key required, but please respect their rate limits.
//!
//! API: https://coverartarchive.org

use super::dto;
use crate::brainz::domain::UpstreamError;

/// Cover Art Archive client
pub struct CoverArtClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl CoverArtClient {
    /// Create a new client
    pub fn new() -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: "https://coverartarchive.org".to_string(),
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Resolve the front-cover URL for a MusicBrainz release.
    ///
    /// Prefers the 250px thumbnail, falling back to the full-size image.
    /// Releases without any artwork produce [`UpstreamError::NotFound`].
    pub async fn front_cover_url(&self, release_id: &str) -> Result<String, UpstreamError> {
        let listing = self.list_cover_art(release_id).await?;

        listing
            .images
            .into_iter()
            .find(|image| image.front)
            .map(|image| {
                image
                    .thumbnails
                    .and_then(|t| t.small)
                    .unwrap_or(image.image)
            })
            .ok_or(UpstreamError::NotFound)
    }

    /// List all cover art for a release
    async fn list_cover_art(
        &self,
        release_id: &str,
    ) -> Result<dto::CoverArtResponse, UpstreamError> {
        let url = format!("{}/release/{}", self.base_url, release_id);

        let response = self
            .http_client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| UpstreamError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(UpstreamError::NotFound);
        }

        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        response
            .json::<dto::CoverArtResponse>()
            .await
            .map_err(|e| UpstreamError::Parse(e.to_string()))
    }
}

impl Default for CoverArtClient {
    fn default() -> Self {
        Self::new()
    }
}
