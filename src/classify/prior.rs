//! Prior probabilities.
//!
//! The prior pair seeds every sentence score before any token is looked at.
//! It is a pluggable step: the default [`LabelFrequencyPrior`] derives the
//! pair from the model's label counts, and [`FixedPrior`] substitutes an
//! explicit pair (e.g. uniform priors) without touching the classifier.

use crate::model::model::DiscourseModel;
use crate::model::pair::LabelPair;

/// A source of prior probabilities for a fitted model.
pub trait PriorSource: Send + Sync {
    /// The prior pair to seed sentence scores with.
    fn priors(&self, model: &DiscourseModel) -> LabelPair;

    /// Name of this prior source, for reports.
    fn name(&self) -> &str;
}

/// Priors proportional to each label's share of the training sentences:
/// `counts[L] / N`.
///
/// This is the default used by
/// [`SentenceClassifier::new`](crate::classify::classifier::SentenceClassifier::new).
#[derive(Clone, Copy, Debug, Default)]
pub struct LabelFrequencyPrior;

impl PriorSource for LabelFrequencyPrior {
    fn priors(&self, model: &DiscourseModel) -> LabelPair {
        let counts = model.label_counts();
        let total = counts.total() as f64;
        LabelPair::new(counts.lit as f64 / total, counts.oral as f64 / total)
    }

    fn name(&self) -> &str {
        "label_frequency"
    }
}

/// A fixed prior pair, independent of the model.
#[derive(Clone, Copy, Debug)]
pub struct FixedPrior {
    pair: LabelPair,
}

impl FixedPrior {
    /// Create a fixed prior from explicit values.
    pub fn new(lit: f64, oral: f64) -> Self {
        FixedPrior {
            pair: LabelPair::new(lit, oral),
        }
    }

    /// Uniform priors: both labels at 0.5.
    pub fn uniform() -> Self {
        FixedPrior::new(0.5, 0.5)
    }
}

impl PriorSource for FixedPrior {
    fn priors(&self, _model: &DiscourseModel) -> LabelPair {
        self.pair
    }

    fn name(&self) -> &str {
        "fixed"
    }
}
