//! Training record types.
//!
//! A training table row describes one word occurrence inside a labeled
//! sentence:
//!
//! ```csv
//! corrélés,VERB,acl:relcl,SEN:2,cmr-wiki-c001-a1,LIT
//! ```
//!
//! The six fields are the word form, its part-of-speech tag, its dependency
//! relation, the sentence tag, the corpus tag and the discourse label. Only
//! the word, the sentence identity (sentence tag + corpus tag) and the label
//! participate in model building; the part-of-speech and dependency columns
//! are carried through untouched.
//!
//! # Examples
//!
//! ```
//! use teki::corpus::record::{Label, TrainingRecord};
//!
//! let record = TrainingRecord::new(
//!     "corrélés",
//!     "VERB",
//!     "acl:relcl",
//!     "SEN:2",
//!     "cmr-wiki-c001-a1",
//!     Label::Lit,
//! );
//! assert_eq!(record.word, "corrélés");
//! assert_eq!(record.label, Label::Lit);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TekiError};

/// Discourse label of a training sentence.
///
/// `LIT` marks the literate (written) register, `ORAL` the oral register.
/// Labels are matched exactly and case-sensitively when parsing training
/// tables; any other value is malformed input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Label {
    /// Literate (written) register
    Lit,
    /// Oral register
    Oral,
}

impl Label {
    /// All labels, in reporting order.
    pub const ALL: [Label; 2] = [Label::Lit, Label::Oral];

    /// The tag used in training tables and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Lit => "LIT",
            Label::Oral => "ORAL",
        }
    }

    /// The other label.
    pub fn opposite(&self) -> Label {
        match self {
            Label::Lit => Label::Oral,
            Label::Oral => Label::Lit,
        }
    }
}

impl FromStr for Label {
    type Err = TekiError;

    fn from_str(s: &str) -> Result<Self> {
        // Exact match only: "lit", "Oral" or stray whitespace are rejected.
        match s {
            "LIT" => Ok(Label::Lit),
            "ORAL" => Ok(Label::Oral),
            other => Err(TekiError::malformed_input(format!(
                "unknown label {other:?} (expected \"LIT\" or \"ORAL\")"
            ))),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of a training table: a single word occurrence in a labeled
/// sentence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingRecord {
    /// The word form as it appears in the corpus
    pub word: String,

    /// Part-of-speech tag (carried through, not consumed)
    pub part_of_speech: String,

    /// Dependency relation (carried through, not consumed)
    pub dependency_relation: String,

    /// Sentence tag, e.g. `SEN:2` (unique within one corpus document)
    pub sentence_tag: String,

    /// Corpus tag identifying the source document, e.g. `cmr-wiki-c001-a1`
    pub corpus_tag: String,

    /// Discourse label of the sentence this word occurs in
    pub label: Label,
}

impl TrainingRecord {
    /// Create a new training record.
    pub fn new(
        word: impl Into<String>,
        part_of_speech: impl Into<String>,
        dependency_relation: impl Into<String>,
        sentence_tag: impl Into<String>,
        corpus_tag: impl Into<String>,
        label: Label,
    ) -> Self {
        TrainingRecord {
            word: word.into(),
            part_of_speech: part_of_speech.into(),
            dependency_relation: dependency_relation.into(),
            sentence_tag: sentence_tag.into(),
            corpus_tag: corpus_tag.into(),
            label,
        }
    }

    /// The sentence identity this row belongs to.
    ///
    /// Sentence tags repeat across corpus documents, so a sentence is
    /// identified by the (sentence tag, corpus tag, label) triple. Label
    /// counting deduplicates on this key.
    pub fn sentence_key(&self) -> (&str, &str, Label) {
        (&self.sentence_tag, &self.corpus_tag, self.label)
    }
}
