//! Classification verdicts.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::corpus::record::Label;

/// The outcome of classifying one sentence.
///
/// `Unknown` is a first-class outcome, not an error: it is returned whenever
/// the two label scores compare equal, including when both have underflowed
/// to zero on a long sentence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Literate (written) register
    #[serde(rename = "LIT")]
    Lit,
    /// Oral register
    #[serde(rename = "ORAL")]
    Oral,
    /// The scores compared equal
    #[serde(rename = "UNK")]
    Unknown,
}

impl Verdict {
    /// The tag used in reports and result files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Lit => "LIT",
            Verdict::Oral => "ORAL",
            Verdict::Unknown => "UNK",
        }
    }

    /// The label this verdict decides for, if it decides at all.
    pub fn label(&self) -> Option<Label> {
        match self {
            Verdict::Lit => Some(Label::Lit),
            Verdict::Oral => Some(Label::Oral),
            Verdict::Unknown => None,
        }
    }
}

impl From<Label> for Verdict {
    fn from(label: Label) -> Self {
        match label {
            Label::Lit => Verdict::Lit,
            Label::Oral => Verdict::Oral,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_tags() {
        assert_eq!(Verdict::Lit.as_str(), "LIT");
        assert_eq!(Verdict::Oral.as_str(), "ORAL");
        assert_eq!(Verdict::Unknown.as_str(), "UNK");
    }

    #[test]
    fn test_verdict_label() {
        assert_eq!(Verdict::Lit.label(), Some(Label::Lit));
        assert_eq!(Verdict::Oral.label(), Some(Label::Oral));
        assert_eq!(Verdict::Unknown.label(), None);
    }

    #[test]
    fn test_verdict_json_tags() {
        assert_eq!(serde_json::to_string(&Verdict::Unknown).unwrap(), "\"UNK\"");
        assert_eq!(serde_json::to_string(&Verdict::Lit).unwrap(), "\"LIT\"");
    }
}
