//! Tag aggregation: fold tag occurrences into an insertion-ordered word tally.

use std::collections::HashMap;

use serde::Serialize;

use crate::brainz::domain::TagBundle;

/// A word and how many tag occurrences produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: u64,
}

/// Insertion-ordered word counter.
///
/// Counts are keyed by the literal tag text - case-sensitive, no trimming.
/// First-seen order is tracked so ranking can break count ties
/// deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordTally {
    counts: HashMap<String, u64>,
    order: Vec<String>,
}

impl WordTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `word`.
    pub fn add(&mut self, word: &str) {
        match self.counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.to_string(), 1);
                self.order.push(word.to_string());
            }
        }
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Count for a single word, zero when absent.
    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Consume the tally into (word, count) entries in first-seen order.
    pub fn into_entries(mut self) -> Vec<WordFrequency> {
        self.order
            .into_iter()
            .map(|word| {
                let count = self.counts.remove(&word).unwrap_or(0);
                WordFrequency { word, count }
            })
            .collect()
    }
}

/// Fold tag bundles into a word tally, one increment per tag occurrence.
///
/// Iteration is driven by `mbids` (the request list), not the response map:
/// a duplicated identifier contributes its tags once per occurrence in the
/// list, and the encounter order of words is reproducible. Identifiers
/// missing from the response contribute nothing.
pub fn aggregate_tags(mbids: &[String], bundles: &HashMap<String, TagBundle>) -> WordTally {
    mbids
        .iter()
        .filter_map(|mbid| bundles.get(mbid))
        .flat_map(TagBundle::occurrences)
        .fold(WordTally::new(), |mut tally, (_, word)| {
            tally.add(word);
            tally
        })
}
