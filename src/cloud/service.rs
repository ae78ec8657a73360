//! Cloud service - orchestrates the word-cloud pipeline.
//!
//! This is the high-level API for producing word-cloud input:
//! 1. Fetch recent listens (paginated upstream)
//! 2. Drop listens without a recording MBID
//! 3. Batch-fetch tags for the surviving MBIDs
//! 4. Tally and rank the tag words

use serde::Serialize;

use crate::brainz::domain::UpstreamError;
use crate::brainz::traits::{ListenHistory, TagMetadata};
use crate::cloud::{filter, rank, tally};
use crate::cloud::tally::WordFrequency;
use crate::config::CloudConfig;

/// Runs the aggregation pipeline against injected service clients.
///
/// Generic over the trait seams so tests can drive it with mocks; production
/// code passes the real ListenBrainz client for both parameters.
pub struct CloudService<H, M> {
    history: H,
    metadata: M,
}

impl<H: ListenHistory, M: TagMetadata> CloudService<H, M> {
    pub fn new(history: H, metadata: M) -> Self {
        Self { history, metadata }
    }

    /// Produce the ranked word list for a user's recent listens.
    ///
    /// Upstream failures abort the run; an account with no identified
    /// listens (or no tags) yields an empty list, which is not an error.
    pub async fn build_word_cloud_input(
        &self,
        username: &str,
        max_listens: u32,
        tag_limit: usize,
    ) -> Result<Vec<WordFrequency>, UpstreamError> {
        let listens = self.history.fetch_listens(username, max_listens).await?;
        let fetched = listens.len();

        let mbids: Vec<String> = filter::identified(listens)
            .into_iter()
            .filter_map(|l| l.recording_mbid)
            .collect();

        tracing::debug!(
            user = username,
            fetched,
            identified = mbids.len(),
            "Filtered listens"
        );

        // No identified tracks: well-defined empty result, and the metadata
        // service must not see a zero-identifier request
        if mbids.is_empty() {
            return Ok(Vec::new());
        }

        let bundles = self.metadata.fetch_recording_tags(&mbids).await?;
        let counted = tally::aggregate_tags(&mbids, &bundles);

        tracing::info!(
            user = username,
            distinct_words = counted.len(),
            limit = tag_limit,
            "Aggregated tags"
        );

        Ok(rank::rank(counted, tag_limit))
    }
}

/// Document handed to an external layout renderer: layout parameters plus
/// the ranked word list.
#[derive(Debug, Clone, Serialize)]
pub struct RenderInput {
    pub width: u32,
    pub height: u32,
    pub background_color: String,
    pub color: String,
    pub min_size: u32,
    pub max_size: u32,
    pub grid_size: u32,
    pub words: Vec<WordFrequency>,
}

impl RenderInput {
    /// Combine configured layout defaults with a ranked word list.
    pub fn from_config(config: &CloudConfig, words: Vec<WordFrequency>) -> Self {
        Self {
            width: config.width,
            height: config.height,
            background_color: config.background_color.clone(),
            color: config.color.clone(),
            min_size: config.min_size,
            max_size: config.max_size,
            grid_size: config.grid_size,
            words,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::brainz::domain::{ListenRecord, TagBundle};
    use crate::brainz::traits::mocks::{MockHistory, MockTags};

    fn listen(mbid: Option<&str>) -> ListenRecord {
        ListenRecord {
            artist: "Artist".to_string(),
            release: "Release".to_string(),
            track: "Track".to_string(),
            recording_mbid: mbid.map(String::from),
            release_mbid: None,
            listened_at: Some(1_700_000_000),
        }
    }

    fn bundle(artist: &[&str], recording: &[&str], release_group: &[&str]) -> TagBundle {
        TagBundle {
            artist: artist.iter().map(|s| s.to_string()).collect(),
            recording: recording.iter().map(|s| s.to_string()).collect(),
            release_group: release_group.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_end_to_end_counts_duplicates() {
        // Listens resolve to ["a", "a", "b"]; a -> {recording: [rock, rock]},
        // b -> {artist: [rock]} - rock counts 5 because "a" appears twice.
        let history = MockHistory::with_listens(vec![
            listen(Some("a")),
            listen(None),
            listen(Some("a")),
            listen(Some("b")),
        ]);
        let mut bundles = HashMap::new();
        bundles.insert("a".to_string(), bundle(&[], &["rock", "rock"], &[]));
        bundles.insert("b".to_string(), bundle(&["rock"], &[], &[]));
        let tags = MockTags::with_bundles(bundles);

        let service = CloudService::new(history, tags);
        let words = service
            .build_word_cloud_input("listener", 100, 5)
            .await
            .unwrap();

        assert_eq!(words.len(), 1);
        assert_eq!(words[0].word, "rock");
        assert_eq!(words[0].count, 5);
    }

    #[tokio::test]
    async fn test_empty_history_skips_metadata_request() {
        let history = MockHistory::with_listens(vec![]);
        let tags = MockTags::with_bundles(HashMap::new());

        let service = CloudService::new(history, tags);
        let words = service
            .build_word_cloud_input("listener", 100, 5)
            .await
            .unwrap();

        assert!(words.is_empty());
        assert_eq!(service.metadata.call_count(), 0);
    }

    #[tokio::test]
    async fn test_unidentified_history_skips_metadata_request() {
        let history = MockHistory::with_listens(vec![listen(None), listen(Some(""))]);
        let tags = MockTags::with_bundles(HashMap::new());

        let service = CloudService::new(history, tags);
        let words = service
            .build_word_cloud_input("listener", 100, 5)
            .await
            .unwrap();

        assert!(words.is_empty());
        assert_eq!(service.metadata.call_count(), 0);
    }

    #[tokio::test]
    async fn test_history_error_propagates() {
        let history = MockHistory::with_error(UpstreamError::Network("timeout".to_string()));
        let tags = MockTags::with_bundles(HashMap::new());

        let service = CloudService::new(history, tags);
        let result = service.build_word_cloud_input("listener", 100, 5).await;

        assert!(matches!(result, Err(UpstreamError::Network(_))));
        assert_eq!(service.metadata.call_count(), 0);
    }

    #[tokio::test]
    async fn test_metadata_error_propagates() {
        let history = MockHistory::with_listens(vec![listen(Some("a"))]);
        let tags = MockTags::with_error(UpstreamError::Status {
            status: 503,
            message: "Service Unavailable".to_string(),
        });

        let service = CloudService::new(history, tags);
        let result = service.build_word_cloud_input("listener", 100, 5).await;

        assert!(matches!(result, Err(UpstreamError::Status { status: 503, .. })));
    }

    #[tokio::test]
    async fn test_tag_limit_zero_yields_empty_list() {
        let history = MockHistory::with_listens(vec![listen(Some("a"))]);
        let mut bundles = HashMap::new();
        bundles.insert("a".to_string(), bundle(&["rock"], &[], &[]));
        let tags = MockTags::with_bundles(bundles);

        let service = CloudService::new(history, tags);
        let words = service
            .build_word_cloud_input("listener", 100, 0)
            .await
            .unwrap();

        assert!(words.is_empty());
        // The request still happened; only ranking truncated to zero
        assert_eq!(service.metadata.call_count(), 1);
    }

    #[test]
    fn test_render_input_carries_config_and_words() {
        let config = CloudConfig::default();
        let words = vec![WordFrequency {
            word: "rock".to_string(),
            count: 3,
        }];

        let input = RenderInput::from_config(&config, words);
        assert_eq!(input.width, 500);
        assert_eq!(input.grid_size, 4);
        assert_eq!(input.words.len(), 1);

        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"word\":\"rock\""));
        assert!(json.contains("\"background_color\":\"rgba(0,0,0,0)\""));
    }
}
