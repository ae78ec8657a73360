//! Word-cloud aggregation pipeline.
//!
//! Turns raw listen history into a bounded, weighted word list for an
//! external layout renderer. Four stages, run once per invocation with no
//! state shared between runs:
//!
//! 1. Fetch up to a configured number of recent listens (paginated upstream).
//! 2. Keep only listens with a resolved recording MBID.
//! 3. Batch-request tags for the surviving MBIDs and fold all artist,
//!    recording, and release-group tag occurrences into a word tally.
//! 4. Rank by descending count (stable on ties) and truncate.
//!
//! Failures from either upstream request abort the run; empty results are
//! not errors and yield an empty word list.

pub mod filter;
pub mod rank;
pub mod service;
pub mod tally;

pub use rank::rank;
pub use service::{CloudService, RenderInput};
pub use tally::{WordFrequency, WordTally, aggregate_tags};
