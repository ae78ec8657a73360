//! Trait definitions for external API clients.
//!
//! These traits enable dependency injection and mocking for tests.
//! Production code uses the real [`ListenBrainzClient`](super::ListenBrainzClient);
//! tests substitute mock implementations.

use std::collections::HashMap;

use async_trait::async_trait;

use super::domain::{ListenRecord, TagBundle, UpstreamError};

/// Trait for fetching a user's listen history.
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait ListenHistory: Send + Sync {
    /// Fetch up to `max_count` recent listens for `username`.
    ///
    /// Ordering is whatever the upstream service returns (expected:
    /// reverse-chronological). Any page failure is fatal for the call.
    async fn fetch_listens(
        &self,
        username: &str,
        max_count: u32,
    ) -> Result<Vec<ListenRecord>, UpstreamError>;
}

/// Trait for batch tag-metadata lookup by recording MBID.
#[async_trait]
pub trait TagMetadata: Send + Sync {
    /// Fetch artist, recording, and release-group tags for the given MBIDs
    /// in one batch request. The returned map is keyed by MBID.
    async fn fetch_recording_tags(
        &self,
        mbids: &[String],
    ) -> Result<HashMap<String, TagBundle>, UpstreamError>;
}

// Implement traits for the real client

#[async_trait]
impl ListenHistory for super::listenbrainz::ListenBrainzClient {
    async fn fetch_listens(
        &self,
        username: &str,
        max_count: u32,
    ) -> Result<Vec<ListenRecord>, UpstreamError> {
        self.fetch_listens(username, max_count).await
    }
}

#[async_trait]
impl TagMetadata for super::listenbrainz::ListenBrainzClient {
    async fn fetch_recording_tags(
        &self,
        mbids: &[String],
    ) -> Result<HashMap<String, TagBundle>, UpstreamError> {
        self.fetch_recording_tags(mbids).await
    }
}
