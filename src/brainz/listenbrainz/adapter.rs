//! Adapter layer: Convert ListenBrainz DTOs to domain models
//!
//! This is the ONLY place where ListenBrainz DTO types are converted to
//! domain types. If the API changes its response format, only this file
//! and dto.rs need to change.

use std::collections::HashMap;

use super::dto;
use crate::brainz::domain::{ListenRecord, TagBundle, TokenValidation};

/// Convert a listens (or playing-now) page to domain records, preserving order.
pub fn to_listen_records(response: dto::ListensResponse) -> Vec<ListenRecord> {
    response
        .payload
        .listens
        .into_iter()
        .map(to_listen_record)
        .collect()
}

fn to_listen_record(listen: dto::Listen) -> ListenRecord {
    let meta = listen.track_metadata;
    let (recording_mbid, release_mbid) = match meta.mbid_mapping {
        // The CAA-indexed release is the one artwork lookups should use
        Some(m) => (m.recording_mbid, m.caa_release_mbid.or(m.release_mbid)),
        None => (None, None),
    };
    ListenRecord {
        artist: meta.artist_name,
        release: meta.release_name.unwrap_or_default(),
        track: meta.track_name,
        recording_mbid,
        release_mbid,
        listened_at: listen.listened_at,
    }
}

/// Flatten the batch metadata response into per-MBID tag bundles.
///
/// Tag words are reproduced verbatim - no case-folding, no trimming, no
/// deduplication. Entries without tag data become empty bundles.
pub fn to_tag_bundles(
    response: HashMap<String, dto::RecordingMetadata>,
) -> HashMap<String, TagBundle> {
    response
        .into_iter()
        .map(|(mbid, metadata)| {
            let bundle = match metadata.tag {
                Some(categories) => TagBundle {
                    artist: words(categories.artist),
                    recording: words(categories.recording),
                    release_group: words(categories.release_group),
                },
                None => TagBundle::default(),
            };
            (mbid, bundle)
        })
        .collect()
}

fn words(occurrences: Vec<dto::TagOccurrence>) -> Vec<String> {
    occurrences.into_iter().map(|o| o.tag).collect()
}

/// Extract the total listen count from its envelope.
pub fn to_listen_count(response: dto::ListenCountResponse) -> u64 {
    response.payload.count
}

/// Convert a validate-token response to the domain result.
pub fn to_token_validation(response: dto::ValidateTokenResponse) -> TokenValidation {
    TokenValidation {
        valid: response.valid,
        user_name: response.user_name,
        message: response.message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_listen(
        artist: &str,
        track: &str,
        mbid: Option<&str>,
        listened_at: Option<i64>,
    ) -> dto::Listen {
        dto::Listen {
            listened_at,
            track_metadata: dto::TrackMetadata {
                artist_name: artist.to_string(),
                release_name: None,
                track_name: track.to_string(),
                mbid_mapping: mbid.map(|m| dto::MbidMapping {
                    recording_mbid: Some(m.to_string()),
                    release_mbid: None,
                    caa_release_mbid: None,
                }),
            },
        }
    }

    #[test]
    fn test_to_listen_records_preserves_order() {
        let response = dto::ListensResponse {
            payload: dto::ListensPayload {
                count: 2,
                listens: vec![
                    make_listen("A", "First", Some("mbid-1"), Some(200)),
                    make_listen("B", "Second", None, Some(100)),
                ],
            },
        };

        let records = to_listen_records(response);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].track, "First");
        assert_eq!(records[0].recording_mbid.as_deref(), Some("mbid-1"));
        assert_eq!(records[1].track, "Second");
        assert!(records[1].recording_mbid.is_none());
        // Missing release name becomes an empty string
        assert_eq!(records[0].release, "");
    }

    #[test]
    fn test_to_listen_record_prefers_caa_release() {
        let mut listen = make_listen("A", "Track", Some("rec-1"), Some(100));
        let mapping = listen.track_metadata.mbid_mapping.as_mut().unwrap();
        mapping.release_mbid = Some("rel-plain".to_string());
        mapping.caa_release_mbid = Some("rel-caa".to_string());

        let record = to_listen_record(listen);
        assert_eq!(record.release_mbid.as_deref(), Some("rel-caa"));

        // Without a CAA release, fall back to the plain mapping release
        let mut listen = make_listen("A", "Track", Some("rec-1"), Some(100));
        listen.track_metadata.mbid_mapping.as_mut().unwrap().release_mbid =
            Some("rel-plain".to_string());

        let record = to_listen_record(listen);
        assert_eq!(record.release_mbid.as_deref(), Some("rel-plain"));
    }

    #[test]
    fn test_to_listen_count() {
        let count = to_listen_count(dto::ListenCountResponse {
            payload: dto::ListenCountPayload { count: 48613 },
        });
        assert_eq!(count, 48613);
    }

    #[test]
    fn test_to_tag_bundles_flattens_categories() {
        let mut response = HashMap::new();
        response.insert(
            "mbid-1".to_string(),
            dto::RecordingMetadata {
                tag: Some(dto::TagCategories {
                    artist: vec![dto::TagOccurrence {
                        tag: "Rock".to_string(),
                        count: Some(3),
                    }],
                    recording: vec![
                        dto::TagOccurrence {
                            tag: "rock".to_string(),
                            count: None,
                        },
                        dto::TagOccurrence {
                            tag: "rock".to_string(),
                            count: None,
                        },
                    ],
                    release_group: vec![],
                }),
            },
        );
        response.insert("mbid-2".to_string(), dto::RecordingMetadata { tag: None });

        let bundles = to_tag_bundles(response);

        let tagged = &bundles["mbid-1"];
        // Case preserved, repeats preserved
        assert_eq!(tagged.artist, vec!["Rock"]);
        assert_eq!(tagged.recording, vec!["rock", "rock"]);
        assert!(tagged.release_group.is_empty());

        assert!(bundles["mbid-2"].is_empty());
    }

    #[test]
    fn test_to_token_validation() {
        let validation = to_token_validation(dto::ValidateTokenResponse {
            code: 200,
            message: "Token valid.".to_string(),
            valid: true,
            user_name: Some("listener".to_string()),
        });

        assert!(validation.valid);
        assert_eq!(validation.user_name.as_deref(), Some("listener"));
        assert_eq!(validation.message, "Token valid.");
    }
}
