//! Ranking: order the tally by descending count and truncate.

use super::tally::{WordFrequency, WordTally};

/// Produce the ranked word list: descending by count, ties broken by
/// first-encounter order, truncated to `limit` entries.
///
/// A limit of zero yields an empty list; a limit beyond the distinct word
/// count returns everything.
pub fn rank(tally: WordTally, limit: usize) -> Vec<WordFrequency> {
    let mut entries = tally.into_entries();
    // Stable sort over insertion-ordered entries keeps first-seen ties first
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(limit);
    entries
}


/// Property-based tests using proptest
#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Distinct words with arbitrary counts, in a deterministic encounter order
    fn arbitrary_entries() -> impl Strategy<Value = Vec<(String, u64)>> {
        proptest::collection::btree_map("[a-z]{1,8}", 1u64..20, 0..30)
            .prop_map(|m| m.into_iter().collect())
    }

    proptest! {
        /// Output length is min(limit, distinct word count)
        #[test]
        fn rank_length_law(entries in arbitrary_entries(), limit in 0usize..40) {
            let mut tally = WordTally::new();
            for (word, count) in &entries {
                for _ in 0..*count {
                    tally.add(word);
                }
            }
            let distinct = entries.len();
            let ranked = rank(tally, limit);
            prop_assert_eq!(ranked.len(), limit.min(distinct));
        }

        /// Counts are non-increasing
        #[test]
        fn rank_is_sorted(entries in arbitrary_entries(), limit in 0usize..40) {
            let mut tally = WordTally::new();
            for (word, count) in &entries {
                for _ in 0..*count {
                    tally.add(word);
                }
            }
            let ranked = rank(tally, limit);
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].count >= pair[1].count);
            }
        }

        /// Equal counts appear in encounter order
        #[test]
        fn rank_ties_are_stable(entries in arbitrary_entries()) {
            let mut tally = WordTally::new();
            for (word, count) in &entries {
                for _ in 0..*count {
                    tally.add(word);
                }
            }
            let encounter: Vec<String> = entries.iter().map(|(w, _)| w.clone()).collect();
            let ranked = rank(tally, entries.len());
            for pair in ranked.windows(2) {
                if pair[0].count == pair[1].count {
                    let first = encounter.iter().position(|w| *w == pair[0].word).unwrap();
                    let second = encounter.iter().position(|w| *w == pair[1].word).unwrap();
                    prop_assert!(first < second);
                }
            }
        }
    }
}
