//! Model construction.
//!
//! [`ModelBuilder`] folds a [`TrainingTable`] into a [`DiscourseModel`]. Each
//! row bumps the word's occurrence counter under its sentence label and
//! rewrites the word's likelihood pair from the counters so far. Counters
//! accumulate across the whole fold, so the last write for a word uses its
//! full occurrence counts: the stored pairs equal the whole-table estimates.
//!
//! For a word with `k` occurrences under label `L` out of `n_L` distinct
//! `L`-labeled sentences, the likelihood is the relative frequency
//! `k / n_L`. A word never seen under `L` falls back to the smoothed value
//! `n_L / N²` (Ng 1997), where `N` is the total distinct sentence count.
//!
//! # Examples
//!
//! ```
//! use teki::corpus::reader::TableReader;
//! use teki::model::builder::ModelBuilder;
//!
//! let table = TableReader::new()
//!     .from_str(
//!         "bonjour,INTJ,root,SEN:1,cmr-wiki-c001-a1,LIT\n\
//!          wesh,INTJ,root,SEN:2,cmr-esl-c002-a1,ORAL\n",
//!     )
//!     .unwrap();
//! let model = ModelBuilder::new().build(&table).unwrap();
//!
//! let pair = model.likelihood("bonjour").unwrap();
//! assert_eq!(pair.lit, 1.0);
//! assert_eq!(pair.oral, 0.25); // never seen under ORAL: 1 / 2²
//! ```

use ahash::AHashMap;
use log::debug;

use crate::corpus::record::{Label, TrainingRecord};
use crate::corpus::table::{LabelCounts, TrainingTable};
use crate::error::{Result, TekiError};
use crate::model::model::DiscourseModel;
use crate::model::pair::LabelPair;

/// Smoothed likelihood for a word never observed under `label` (Ng 1997):
/// `counts[label] / N²` with `N` the total distinct sentence count.
pub fn ng_fallback(counts: LabelCounts, label: Label) -> f64 {
    let n = counts.total() as f64;
    counts.get(label) as f64 / (n * n)
}

/// Per-word occurrence counters and the likelihood table they produce.
#[derive(Debug, Default)]
struct Accumulator {
    seen_in_lit: AHashMap<String, u64>,
    seen_in_oral: AHashMap<String, u64>,
    likelihoods: AHashMap<String, LabelPair>,
}

/// Builds a [`DiscourseModel`] from a training table.
#[derive(Clone, Copy, Debug, Default)]
pub struct ModelBuilder {}

impl ModelBuilder {
    /// Create a new model builder.
    pub fn new() -> Self {
        ModelBuilder {}
    }

    /// Build a model from a training table.
    ///
    /// Fails with [`TekiError::DegenerateTraining`] when either label has no
    /// sentences (that label's likelihoods would divide by zero). The build
    /// is all-or-nothing.
    pub fn build(&self, table: &TrainingTable) -> Result<DiscourseModel> {
        let counts = table.label_counts();
        if let Some(label) = counts.missing_label() {
            return Err(TekiError::degenerate_training(format!(
                "no {label} sentences in training table ({} rows)",
                table.len()
            )));
        }

        let accumulator = table
            .records()
            .iter()
            .fold(Accumulator::default(), |accumulator, record| {
                Self::step(accumulator, record, counts)
            });

        debug!(
            "built model: {} distinct words from {} rows ({} LIT / {} ORAL sentences)",
            accumulator.likelihoods.len(),
            table.len(),
            counts.lit,
            counts.oral
        );

        Ok(DiscourseModel::new(counts, accumulator.likelihoods))
    }

    /// One fold step: count the occurrence, rewrite the word's pair.
    fn step(
        mut accumulator: Accumulator,
        record: &TrainingRecord,
        counts: LabelCounts,
    ) -> Accumulator {
        let seen = match record.label {
            Label::Lit => &mut accumulator.seen_in_lit,
            Label::Oral => &mut accumulator.seen_in_oral,
        };
        *seen.entry(record.word.clone()).or_insert(0) += 1;

        let pair = LabelPair::new(
            Self::likelihood(&accumulator.seen_in_lit, &record.word, counts, Label::Lit),
            Self::likelihood(&accumulator.seen_in_oral, &record.word, counts, Label::Oral),
        );
        accumulator.likelihoods.insert(record.word.clone(), pair);
        accumulator
    }

    fn likelihood(
        seen: &AHashMap<String, u64>,
        word: &str,
        counts: LabelCounts,
        label: Label,
    ) -> f64 {
        match seen.get(word) {
            Some(&occurrences) => occurrences as f64 / counts.get(label) as f64,
            None => ng_fallback(counts, label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::table::TrainingTable;

    fn record(word: &str, sentence: &str, label: Label) -> TrainingRecord {
        TrainingRecord::new(word, "X", "dep", sentence, "cmr-wiki-c001-a1", label)
    }

    #[test]
    fn test_two_sentence_model() {
        let table = TrainingTable::from_records(vec![
            record("bonjour", "SEN:1", Label::Lit),
            record("wesh", "SEN:2", Label::Oral),
        ]);
        let model = ModelBuilder::new().build(&table).unwrap();

        assert_eq!(model.vocabulary_size(), 2);
        assert_eq!(
            model.likelihood("bonjour").unwrap(),
            LabelPair::new(1.0, 1.0 / 4.0)
        );
        assert_eq!(
            model.likelihood("wesh").unwrap(),
            LabelPair::new(1.0 / 4.0, 1.0)
        );
        assert_eq!(model.likelihood("inconnu"), None);
    }

    #[test]
    fn test_word_under_both_labels() {
        let table = TrainingTable::from_records(vec![
            record("le", "SEN:1", Label::Lit),
            record("le", "SEN:2", Label::Oral),
        ]);
        let model = ModelBuilder::new().build(&table).unwrap();

        assert_eq!(model.likelihood("le").unwrap(), LabelPair::new(1.0, 1.0));
    }

    #[test]
    fn test_occurrences_accumulate_across_sentences() {
        // "le" occurs in two of three LIT sentences; counters keep growing,
        // so the final pair reflects both occurrences.
        let table = TrainingTable::from_records(vec![
            record("le", "SEN:1", Label::Lit),
            record("chat", "SEN:1", Label::Lit),
            record("un", "SEN:2", Label::Lit),
            record("le", "SEN:3", Label::Lit),
            record("wesh", "SEN:4", Label::Oral),
        ]);
        let model = ModelBuilder::new().build(&table).unwrap();

        let counts = model.label_counts();
        assert_eq!(counts, LabelCounts::new(3, 1));

        let pair = model.likelihood("le").unwrap();
        assert_eq!(pair.lit, 2.0 / 3.0);
        assert_eq!(pair.oral, ng_fallback(counts, Label::Oral));
    }

    #[test]
    fn test_ng_fallback_values() {
        let counts = LabelCounts::new(3, 2);
        assert_eq!(ng_fallback(counts, Label::Lit), 3.0 / 25.0);
        assert_eq!(ng_fallback(counts, Label::Oral), 2.0 / 25.0);
    }

    #[test]
    fn test_single_label_table_is_degenerate() {
        let table = TrainingTable::from_records(vec![
            record("bonjour", "SEN:1", Label::Lit),
            record("monde", "SEN:2", Label::Lit),
        ]);
        let result = ModelBuilder::new().build(&table);

        match result {
            Err(TekiError::DegenerateTraining(msg)) => {
                assert!(msg.contains("ORAL"), "got: {msg}");
            }
            other => panic!("expected DegenerateTraining, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_table_is_degenerate() {
        let table = TrainingTable::from_records(vec![]);
        assert!(matches!(
            ModelBuilder::new().build(&table),
            Err(TekiError::DegenerateTraining(_))
        ));
    }
}
