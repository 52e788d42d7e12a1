//! Per-label probability pairs.

use serde::{Deserialize, Serialize};

use crate::corpus::record::Label;

/// A pair of values keyed by [`Label`].
///
/// The same shape carries per-word likelihoods, prior probabilities, the
/// out-of-vocabulary fallback pair and running score totals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelPair {
    /// Value under the `LIT` label
    pub lit: f64,
    /// Value under the `ORAL` label
    pub oral: f64,
}

impl LabelPair {
    /// Create a pair from explicit values.
    pub fn new(lit: f64, oral: f64) -> Self {
        LabelPair { lit, oral }
    }

    /// The value for one label.
    pub fn get(&self, label: Label) -> f64 {
        match label {
            Label::Lit => self.lit,
            Label::Oral => self.oral,
        }
    }

    /// Set the value for one label.
    pub fn set(&mut self, label: Label, value: f64) {
        match label {
            Label::Lit => self.lit = value,
            Label::Oral => self.oral = value,
        }
    }
}
