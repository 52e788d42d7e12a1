//! Sentence classification.
//!
//! A sentence score starts from the prior pair and multiplies in one
//! likelihood pair per token: the word's stored pair when it is in
//! vocabulary, the model's out-of-vocabulary pair otherwise. Every token
//! occurrence multiplies, including repeats of the same word. The larger
//! total wins; equal totals (including both underflowed to zero) yield
//! [`Verdict::Unknown`].
//!
//! Scoring takes the model immutably, so batches of sentences are classified
//! in parallel.
//!
//! # Examples
//!
//! ```
//! use teki::classify::classifier::SentenceClassifier;
//! use teki::classify::verdict::Verdict;
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
//! let classifier = SentenceClassifier::new(model);
//!
//! assert_eq!(classifier.classify(&["bonjour"]), Verdict::Lit);
//! assert_eq!(classifier.classify(&["wesh"]), Verdict::Oral);
//! // Out-of-vocabulary words score the same under both labels.
//! assert_eq!(classifier.classify(&["inconnu"]), Verdict::Unknown);
//! ```

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::classify::prior::{LabelFrequencyPrior, PriorSource};
use crate::classify::verdict::Verdict;
use crate::model::model::DiscourseModel;
use crate::model::pair::LabelPair;

/// The scored totals of one sentence.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SentenceScore {
    /// Accumulated probability totals per label
    pub totals: LabelPair,
}

impl SentenceScore {
    /// Decide the verdict: the label with the strictly larger total, or
    /// [`Verdict::Unknown`] when the totals compare equal.
    pub fn verdict(&self) -> Verdict {
        if self.totals.lit > self.totals.oral {
            Verdict::Lit
        } else if self.totals.oral > self.totals.lit {
            Verdict::Oral
        } else {
            Verdict::Unknown
        }
    }
}

/// Classifies tokenized sentences against a fitted [`DiscourseModel`].
///
/// Tokenization happens upstream; the classifier consumes token slices as
/// given and never normalizes them.
pub struct SentenceClassifier {
    model: DiscourseModel,
    prior: Box<dyn PriorSource>,
    oov: LabelPair,
}

impl std::fmt::Debug for SentenceClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentenceClassifier")
            .field("vocabulary_size", &self.model.vocabulary_size())
            .field("prior", &self.prior.name())
            .field("oov", &self.oov)
            .finish()
    }
}

impl SentenceClassifier {
    /// Create a classifier with the default label-frequency priors.
    pub fn new(model: DiscourseModel) -> Self {
        let oov = model.oov_pair();
        SentenceClassifier {
            model,
            prior: Box::new(LabelFrequencyPrior),
            oov,
        }
    }

    /// Replace the prior source.
    pub fn with_prior<P: PriorSource + 'static>(mut self, prior: P) -> Self {
        self.prior = Box::new(prior);
        self
    }

    /// The model this classifier scores against.
    pub fn model(&self) -> &DiscourseModel {
        &self.model
    }

    /// Score a tokenized sentence under both labels.
    ///
    /// An empty token slice scores as the bare priors.
    pub fn score<T: AsRef<str>>(&self, tokens: &[T]) -> SentenceScore {
        let mut totals = self.prior.priors(&self.model);
        for token in tokens {
            let pair = self.model.likelihood(token.as_ref()).unwrap_or(self.oov);
            totals.lit *= pair.lit;
            totals.oral *= pair.oral;
        }
        SentenceScore { totals }
    }

    /// Classify a tokenized sentence.
    pub fn classify<T: AsRef<str>>(&self, tokens: &[T]) -> Verdict {
        self.score(tokens).verdict()
    }

    /// Score many sentences in parallel, preserving input order.
    pub fn classify_batch<T>(&self, sentences: &[Vec<T>]) -> Vec<SentenceScore>
    where
        T: AsRef<str> + Sync,
    {
        sentences
            .par_iter()
            .map(|tokens| self.score(tokens))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::prior::FixedPrior;
    use crate::corpus::record::{Label, TrainingRecord};
    use crate::corpus::table::TrainingTable;
    use crate::model::builder::ModelBuilder;

    fn record(word: &str, sentence: &str, corpus: &str, label: Label) -> TrainingRecord {
        TrainingRecord::new(word, "X", "dep", sentence, corpus, label)
    }

    fn balanced_classifier() -> SentenceClassifier {
        // The sentence tag repeats across two corpus documents: two
        // distinct sentences, one per label.
        let table = TrainingTable::from_records(vec![
            record("bonjour", "SEN:1", "cmr-wiki-c001-a1", Label::Lit),
            record("wesh", "SEN:1", "cmr-esl-c002-a1", Label::Oral),
        ]);
        let model = ModelBuilder::new().build(&table).unwrap();
        SentenceClassifier::new(model)
    }

    #[test]
    fn test_known_words_decide() {
        let classifier = balanced_classifier();

        let score = classifier.score(&["bonjour"]);
        assert_eq!(score.totals, LabelPair::new(0.5, 0.5 * 0.25));
        assert_eq!(score.verdict(), Verdict::Lit);

        assert_eq!(classifier.classify(&["wesh"]), Verdict::Oral);
    }

    #[test]
    fn test_oov_only_sentence_ties() {
        let classifier = balanced_classifier();

        // Both labels have one sentence, so the fallback pair is symmetric
        // and an all-OOV sentence always ties.
        let score = classifier.score(&["inconnu"]);
        assert_eq!(score.totals.lit, score.totals.oral);
        assert_eq!(score.verdict(), Verdict::Unknown);
    }

    #[test]
    fn test_opposing_words_cancel() {
        let classifier = balanced_classifier();

        // One word from each register with symmetric likelihoods: the
        // products come out identical and the verdict is Unknown.
        let score = classifier.score(&["bonjour", "wesh"]);
        assert_eq!(score.totals.lit, score.totals.oral);
        assert_eq!(score.verdict(), Verdict::Unknown);
    }

    #[test]
    fn test_empty_sentence_scores_as_priors() {
        let table = TrainingTable::from_records(vec![
            record("un", "SEN:1", "cmr-wiki-c001-a1", Label::Lit),
            record("deux", "SEN:2", "cmr-wiki-c001-a1", Label::Lit),
            record("wesh", "SEN:3", "cmr-esl-c002-a1", Label::Oral),
        ]);
        let model = ModelBuilder::new().build(&table).unwrap();
        let classifier = SentenceClassifier::new(model);

        let score = classifier.score::<&str>(&[]);
        assert_eq!(score.totals, LabelPair::new(2.0 / 3.0, 1.0 / 3.0));
        assert_eq!(score.verdict(), Verdict::Lit);
    }

    #[test]
    fn test_empty_sentence_with_balanced_table_is_unknown() {
        let classifier = balanced_classifier();
        assert_eq!(classifier.classify::<&str>(&[]), Verdict::Unknown);
    }

    #[test]
    fn test_repeated_tokens_multiply_each_time() {
        let classifier = balanced_classifier();

        let once = classifier.score(&["bonjour", "inconnu"]);
        let twice = classifier.score(&["bonjour", "inconnu", "inconnu"]);
        // The second "inconnu" multiplies another 0.25 into both totals.
        assert_eq!(twice.totals.lit, once.totals.lit * 0.25);
        assert_eq!(twice.totals.oral, once.totals.oral * 0.25);
    }

    #[test]
    fn test_long_oov_sentence_underflows_to_unknown() {
        let classifier = balanced_classifier();

        let tokens = vec!["inconnu"; 600];
        let score = classifier.score(&tokens);
        assert_eq!(score.totals.lit, 0.0);
        assert_eq!(score.totals.oral, 0.0);
        assert_eq!(score.verdict(), Verdict::Unknown);
    }

    #[test]
    fn test_fixed_prior_overrides_label_frequency() {
        let table = TrainingTable::from_records(vec![
            record("un", "SEN:1", "cmr-wiki-c001-a1", Label::Lit),
            record("deux", "SEN:2", "cmr-wiki-c001-a1", Label::Lit),
            record("wesh", "SEN:3", "cmr-esl-c002-a1", Label::Oral),
        ]);
        let model = ModelBuilder::new().build(&table).unwrap();
        let classifier = SentenceClassifier::new(model).with_prior(FixedPrior::uniform());

        // Uniform priors leave an empty sentence tied despite the LIT-heavy
        // table.
        let score = classifier.score::<&str>(&[]);
        assert_eq!(score.totals, LabelPair::new(0.5, 0.5));
        assert_eq!(score.verdict(), Verdict::Unknown);
    }

    #[test]
    fn test_batch_matches_sequential_and_preserves_order() {
        let classifier = balanced_classifier();

        let sentences: Vec<Vec<String>> = vec![
            vec!["bonjour".to_string()],
            vec!["wesh".to_string()],
            vec!["inconnu".to_string()],
            vec!["bonjour".to_string(), "wesh".to_string()],
        ];

        let batch = classifier.classify_batch(&sentences);
        assert_eq!(batch.len(), sentences.len());
        for (tokens, score) in sentences.iter().zip(&batch) {
            assert_eq!(*score, classifier.score(tokens));
        }

        let verdicts: Vec<Verdict> = batch.iter().map(|s| s.verdict()).collect();
        assert_eq!(
            verdicts,
            vec![
                Verdict::Lit,
                Verdict::Oral,
                Verdict::Unknown,
                Verdict::Unknown
            ]
        );
    }

    #[test]
    fn test_scores_are_deterministic() {
        let classifier = balanced_classifier();
        let tokens = ["bonjour", "inconnu", "wesh", "bonjour"];

        let first = classifier.score(&tokens);
        for _ in 0..10 {
            assert_eq!(classifier.score(&tokens), first);
        }
    }
}
