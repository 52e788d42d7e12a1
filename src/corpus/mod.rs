//! Training corpus ingestion.
//!
//! This module loads labeled training tables produced by the corpus
//! preparation pipeline (one CSV row per word occurrence, one `LIT`/`ORAL`
//! label per sentence) and counts distinct sentences per label.
//!
//! - [`TableReader`] parses and validates the CSV table
//! - [`TrainingRecord`] is one typed row
//! - [`TrainingTable`] owns the rows and their [`LabelCounts`]

pub mod reader;
pub mod record;
pub mod table;

// Re-export commonly used types
pub use reader::{FIELDS_PER_ROW, TableReader};
pub use record::{Label, TrainingRecord};
pub use table::{LabelCounts, TrainingTable};
