//! Batch result accounting.

use serde::{Deserialize, Serialize};

use crate::classify::verdict::Verdict;

/// Counters accumulated over a batch of classified sentences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Sentences classified
    pub sentences: u64,
    /// Tokens scored across all sentences
    pub tokens: u64,
    /// Sentences decided `LIT`
    pub lit: u64,
    /// Sentences decided `ORAL`
    pub oral: u64,
    /// Sentences left undecided
    pub unknown: u64,
}

impl BatchSummary {
    /// Create an empty summary.
    pub fn new() -> Self {
        BatchSummary::default()
    }

    /// Record one classified sentence.
    pub fn record(&mut self, verdict: Verdict, tokens: usize) {
        self.sentences += 1;
        self.tokens += tokens as u64;
        match verdict {
            Verdict::Lit => self.lit += 1,
            Verdict::Oral => self.oral += 1,
            Verdict::Unknown => self.unknown += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let mut summary = BatchSummary::new();
        summary.record(Verdict::Lit, 4);
        summary.record(Verdict::Oral, 2);
        summary.record(Verdict::Lit, 7);
        summary.record(Verdict::Unknown, 0);

        assert_eq!(summary.sentences, 4);
        assert_eq!(summary.tokens, 13);
        assert_eq!(summary.lit, 2);
        assert_eq!(summary.oral, 1);
        assert_eq!(summary.unknown, 1);
    }
}
