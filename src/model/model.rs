//! The fitted frequency and probability model.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::corpus::record::Label;
use crate::corpus::table::LabelCounts;
use crate::model::builder::ng_fallback;
use crate::model::pair::LabelPair;

/// A fitted discourse model: per-label sentence counts plus one likelihood
/// pair per distinct training word.
///
/// Models are immutable once built. Classification never mutates them, which
/// is what makes batch classification embarrassingly parallel.
#[derive(Clone, Debug)]
pub struct DiscourseModel {
    label_counts: LabelCounts,
    likelihoods: AHashMap<String, LabelPair>,
}

/// Aggregate statistics of a fitted model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyReport {
    /// Distinct sentences per label
    pub label_counts: LabelCounts,
    /// Total distinct labeled sentences
    pub total_sentences: u64,
    /// Number of distinct training words
    pub vocabulary_size: usize,
}

impl DiscourseModel {
    pub(crate) fn new(label_counts: LabelCounts, likelihoods: AHashMap<String, LabelPair>) -> Self {
        DiscourseModel {
            label_counts,
            likelihoods,
        }
    }

    /// Distinct-sentence counts per label.
    pub fn label_counts(&self) -> LabelCounts {
        self.label_counts
    }

    /// The likelihood pair for a training word, if the word is in
    /// vocabulary.
    pub fn likelihood(&self, word: &str) -> Option<LabelPair> {
        self.likelihoods.get(word).copied()
    }

    /// Check whether a word was seen during training.
    pub fn contains(&self, word: &str) -> bool {
        self.likelihoods.contains_key(word)
    }

    /// Number of distinct training words.
    pub fn vocabulary_size(&self) -> usize {
        self.likelihoods.len()
    }

    /// Iterate over the training vocabulary, in no particular order.
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.likelihoods.keys().map(|word| word.as_str())
    }

    /// The likelihood pair applied to out-of-vocabulary words at
    /// classification time: the Ng (1997) fallback under both labels.
    pub fn oov_pair(&self) -> LabelPair {
        LabelPair::new(
            ng_fallback(self.label_counts, Label::Lit),
            ng_fallback(self.label_counts, Label::Oral),
        )
    }

    /// Aggregate statistics: label counts, total sentences, vocabulary size.
    pub fn frequency_report(&self) -> FrequencyReport {
        FrequencyReport {
            label_counts: self.label_counts,
            total_sentences: self.label_counts.total(),
            vocabulary_size: self.likelihoods.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::record::TrainingRecord;
    use crate::corpus::table::TrainingTable;
    use crate::model::builder::ModelBuilder;

    fn model() -> DiscourseModel {
        let table = TrainingTable::from_records(vec![
            TrainingRecord::new("bonjour", "INTJ", "root", "SEN:1", "cmr-wiki-c001-a1", Label::Lit),
            TrainingRecord::new("monde", "NOUN", "obj", "SEN:2", "cmr-wiki-c001-a1", Label::Lit),
            TrainingRecord::new("wesh", "INTJ", "root", "SEN:3", "cmr-esl-c002-a1", Label::Oral),
        ]);
        ModelBuilder::new().build(&table).unwrap()
    }

    #[test]
    fn test_lookup_and_vocabulary() {
        let model = model();
        assert!(model.contains("bonjour"));
        assert!(!model.contains("inconnu"));
        assert_eq!(model.vocabulary_size(), 3);

        let mut words: Vec<_> = model.vocabulary().collect();
        words.sort_unstable();
        assert_eq!(words, vec!["bonjour", "monde", "wesh"]);
    }

    #[test]
    fn test_oov_pair() {
        let model = model();
        // 2 LIT + 1 ORAL sentences, N = 3
        assert_eq!(model.oov_pair(), LabelPair::new(2.0 / 9.0, 1.0 / 9.0));
    }

    #[test]
    fn test_frequency_report() {
        let report = model().frequency_report();
        assert_eq!(report.label_counts, LabelCounts::new(2, 1));
        assert_eq!(report.total_sentences, 3);
        assert_eq!(report.vocabulary_size, 3);
    }
}
