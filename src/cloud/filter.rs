//! Identifier filter: drop listens without a resolved recording MBID.
//!
//! Only identified listens can be tag-enriched; unidentified ones have zero
//! influence on the word cloud.

use crate::brainz::domain::ListenRecord;

/// Keep the listens that carry a non-empty recording MBID.
///
/// Pure; order preserved. An empty input (or one with no identified
/// listens) yields an empty output, which downstream stages handle without
/// error.
pub fn identified(listens: Vec<ListenRecord>) -> Vec<ListenRecord> {
    listens.into_iter().filter(ListenRecord::is_identified).collect()
}


/// Property-based tests using proptest
#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arbitrary_listen() -> impl Strategy<Value = ListenRecord> {
        (
            "[a-zA-Z0-9 ]{1,20}",
            proptest::option::of("[a-z0-9-]{0,36}"),
        )
            .prop_map(|(track, mbid)| ListenRecord {
                artist: "Artist".to_string(),
                release: String::new(),
                track,
                recording_mbid: mbid,
                release_mbid: None,
                listened_at: None,
            })
    }

    proptest! {
        /// Output is never longer than the input
        #[test]
        fn filter_never_grows(listens in proptest::collection::vec(arbitrary_listen(), 0..50)) {
            let input_len = listens.len();
            let kept = identified(listens);
            prop_assert!(kept.len() <= input_len);
        }

        /// Every surviving record has a non-empty identifier
        #[test]
        fn filter_output_is_identified(listens in proptest::collection::vec(arbitrary_listen(), 0..50)) {
            for record in identified(listens) {
                prop_assert!(record.is_identified());
            }
        }
    }
}
