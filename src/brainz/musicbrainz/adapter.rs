//! Adapter layer: Convert MusicBrainz DTOs to domain models

use super::dto;
use crate::brainz::domain::RecordingMatch;

/// Take the best hit from a search response, if any.
///
/// Hits arrive ordered by relevance; we trust the first one, matching the
/// way the lookup is used (exact artist/release/track queries).
pub fn to_recording_match(response: dto::RecordingSearchResponse) -> Option<RecordingMatch> {
    response.recordings.into_iter().next().map(|r| RecordingMatch {
        recording_mbid: r.id,
        release_mbid: r.releases.into_iter().next().map(|rel| rel.id),
    })
}
