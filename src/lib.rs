//! # Teki
//!
//! A lexical LIT/ORAL discourse classifier for French corpora.
//!
//! Teki learns per-word likelihoods from a labeled training table (one row
//! per word occurrence, one label per sentence) and classifies tokenized
//! sentences into written (`LIT`) or oral (`ORAL`) register, with `UNK` for
//! ties. Unseen words are smoothed following Ng (1997).
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - CSV training-table ingestion with fail-fast validation
//! - Frequency and probability model built as a pure fold
//! - Pluggable prior probabilities
//! - Parallel batch classification
//!
//! ## Example
//!
//! ```
//! use teki::classify::classifier::SentenceClassifier;
//! use teki::classify::verdict::Verdict;
//! use teki::corpus::reader::TableReader;
//! use teki::model::builder::ModelBuilder;
//!
//! fn main() -> teki::error::Result<()> {
//!     let table = TableReader::new().from_str(
//!         "bonjour,INTJ,root,SEN:1,cmr-wiki-c001-a1,LIT\n\
//!          wesh,INTJ,root,SEN:2,cmr-esl-c002-a1,ORAL\n",
//!     )?;
//!     let model = ModelBuilder::new().build(&table)?;
//!     let classifier = SentenceClassifier::new(model);
//!
//!     let verdict = classifier.classify(&["bonjour"]);
//!     assert_eq!(verdict, Verdict::Lit);
//!     Ok(())
//! }
//! ```

pub mod classify;
pub mod cli;
pub mod corpus;
pub mod error;
pub mod model;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
