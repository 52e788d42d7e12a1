//! Loaded training tables and label counting.
//!
//! A [`TrainingTable`] owns the parsed rows of a training file together with
//! its [`LabelCounts`]. Counts are per distinct sentence, not per row: every
//! word of a sentence repeats the same (sentence tag, corpus tag, label)
//! triple, so rows are deduplicated on that key before counting. The counts
//! are the denominators of every probability the model produces.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::corpus::record::{Label, TrainingRecord};

/// Number of distinct sentences per label in a training table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCounts {
    /// Distinct sentences labeled `LIT`
    pub lit: u64,
    /// Distinct sentences labeled `ORAL`
    pub oral: u64,
}

impl LabelCounts {
    /// Create counts from explicit values.
    pub fn new(lit: u64, oral: u64) -> Self {
        LabelCounts { lit, oral }
    }

    /// The count for one label.
    pub fn get(&self, label: Label) -> u64 {
        match label {
            Label::Lit => self.lit,
            Label::Oral => self.oral,
        }
    }

    /// Total number of distinct labeled sentences.
    pub fn total(&self) -> u64 {
        self.lit + self.oral
    }

    /// The first label with zero sentences, if any.
    ///
    /// A table where a label has no sentences cannot support a model: that
    /// label's probabilities would all divide by zero.
    pub fn missing_label(&self) -> Option<Label> {
        Label::ALL.into_iter().find(|&label| self.get(label) == 0)
    }

    fn increment(&mut self, label: Label) {
        match label {
            Label::Lit => self.lit += 1,
            Label::Oral => self.oral += 1,
        }
    }
}

/// A parsed training table: the rows plus their per-label sentence counts.
#[derive(Clone, Debug)]
pub struct TrainingTable {
    records: Vec<TrainingRecord>,
    label_counts: LabelCounts,
}

impl TrainingTable {
    /// Build a table from parsed records, counting distinct sentences.
    pub fn from_records(records: Vec<TrainingRecord>) -> Self {
        let label_counts = {
            let mut seen = AHashSet::new();
            let mut counts = LabelCounts::default();
            for record in &records {
                if seen.insert(record.sentence_key()) {
                    counts.increment(record.label);
                }
            }
            counts
        };
        TrainingTable {
            records,
            label_counts,
        }
    }

    /// The parsed rows, in file order.
    pub fn records(&self) -> &[TrainingRecord] {
        &self.records
    }

    /// Distinct-sentence counts per label.
    pub fn label_counts(&self) -> LabelCounts {
        self.label_counts
    }

    /// Number of rows (word occurrences).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
