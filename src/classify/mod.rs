//! Sentence classification.
//!
//! [`SentenceClassifier`] scores tokenized sentences against a fitted model
//! and decides [`Verdict::Lit`], [`Verdict::Oral`] or [`Verdict::Unknown`].
//! Priors come from a pluggable [`PriorSource`]; batches run in parallel.

pub mod classifier;
pub mod prior;
pub mod summary;
pub mod verdict;

// Re-export commonly used types
pub use classifier::{SentenceClassifier, SentenceScore};
pub use prior::{FixedPrior, LabelFrequencyPrior, PriorSource};
pub use summary::BatchSummary;
pub use verdict::Verdict;
