//! Training table reader.
//!
//! Reads header-less CSV training tables into a [`TrainingTable`]:
//!
//! ```csv
//! corrélés,VERB,acl:relcl,SEN:2,cmr-wiki-c001-a1,LIT
//! wesh,INTJ,discourse,SEN:14,cmr-esl-c004-a2,ORAL
//! ```
//!
//! Loading is all-or-nothing: the first malformed row (wrong field count or
//! unknown label) fails the whole load with its 1-based row number. Rows are
//! never skipped silently.
//!
//! # Examples
//!
//! ```
//! use teki::corpus::reader::TableReader;
//!
//! let table = TableReader::new()
//!     .from_str("bonjour,INTJ,root,SEN:1,cmr-wiki-c001-a1,LIT\n")
//!     .unwrap();
//! assert_eq!(table.len(), 1);
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use log::debug;

use crate::corpus::record::{Label, TrainingRecord};
use crate::corpus::table::TrainingTable;
use crate::error::{Result, TekiError};

/// Number of fields in a training table row.
pub const FIELDS_PER_ROW: usize = 6;

/// A reader for training tables in CSV format.
///
/// Rows have exactly [`FIELDS_PER_ROW`] fields: word, part-of-speech,
/// dependency relation, sentence tag, corpus tag, label.
///
/// Fields are taken verbatim by default. Trimming is opt-in because labels
/// match exactly: a row ending in `, LIT` is malformed unless
/// [`with_trim`](TableReader::with_trim) is enabled.
#[derive(Clone, Debug)]
pub struct TableReader {
    /// CSV delimiter character (default: ',')
    delimiter: u8,
    /// Whether to trim whitespace from fields
    trim: bool,
}

impl Default for TableReader {
    fn default() -> Self {
        Self::new()
    }
}

impl TableReader {
    /// Create a new reader with comma delimiter and no trimming.
    pub fn new() -> Self {
        TableReader {
            delimiter: b',',
            trim: false,
        }
    }

    /// Set a custom delimiter character.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter as u8;
        self
    }

    /// Set whether to trim whitespace from fields.
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Read a training table from a file.
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<TrainingTable> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let table = self.from_reader(file)?;
        debug!(
            "loaded training table from {}: {} rows",
            path.display(),
            table.len()
        );
        Ok(table)
    }

    /// Read a training table from an `io::Read` source.
    pub fn from_reader<R: Read>(&self, reader: R) -> Result<TrainingTable> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut records = Vec::new();
        for (index, result) in csv_reader.records().enumerate() {
            let row = index + 1;
            let record = result?;

            // Arity is checked per record so the error carries a row number;
            // the csv reader itself runs flexible.
            if record.len() != FIELDS_PER_ROW {
                return Err(TekiError::malformed_input(format!(
                    "row {row}: expected {FIELDS_PER_ROW} fields, found {}",
                    record.len()
                )));
            }

            let label = record[5].parse::<Label>().map_err(|_| {
                TekiError::malformed_input(format!(
                    "row {row}: unknown label {:?} (expected \"LIT\" or \"ORAL\")",
                    &record[5]
                ))
            })?;

            records.push(TrainingRecord::new(
                &record[0], &record[1], &record[2], &record[3], &record[4], label,
            ));
        }

        let table = TrainingTable::from_records(records);
        debug!(
            "parsed {} rows, {} LIT / {} ORAL sentences",
            table.len(),
            table.label_counts().lit,
            table.label_counts().oral
        );
        Ok(table)
    }

    /// Read a training table from a string.
    pub fn from_str(&self, input: &str) -> Result<TrainingTable> {
        self.from_reader(input.as_bytes())
    }
}
