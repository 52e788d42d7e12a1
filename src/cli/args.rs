//! Command line argument parsing for Teki CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Teki - lexical LIT/ORAL discourse classifier
#[derive(Parser, Debug, Clone)]
#[command(name = "teki")]
#[command(about = "Lexical LIT/ORAL discourse classifier for French corpora")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Teki Contributors")]
#[command(long_about = None)]
pub struct TekiArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TekiArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Classify a single sentence
    Classify(ClassifyArgs),

    /// Classify a file of sentences, one per line
    #[command(name = "classify-file")]
    ClassifyFile(ClassifyFileArgs),

    /// Show training table and model statistics
    Stats(StatsArgs),

    /// Validate a training table
    Validate(ValidateArgs),
}

/// Arguments for classifying a single sentence
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Path to the training table (CSV)
    #[arg(value_name = "TABLE")]
    pub table: PathBuf,

    /// Sentence to classify (split on whitespace)
    #[arg(value_name = "SENTENCE")]
    pub sentence: String,

    /// Field delimiter of the training table
    #[arg(short, long, default_value = ",")]
    pub delimiter: char,

    /// Trim whitespace around table fields
    #[arg(long)]
    pub trim: bool,

    /// Use uniform priors instead of label-frequency priors
    #[arg(long)]
    pub uniform_prior: bool,
}

/// Arguments for classifying a file of sentences
#[derive(Parser, Debug, Clone)]
pub struct ClassifyFileArgs {
    /// Path to the training table (CSV)
    #[arg(value_name = "TABLE")]
    pub table: PathBuf,

    /// File with one sentence per line
    #[arg(value_name = "SENTENCE_FILE")]
    pub sentence_file: PathBuf,

    /// Write per-line results to a CSV file (a directory gets a
    /// timestamped file name)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Field delimiter of the training table
    #[arg(short, long, default_value = ",")]
    pub delimiter: char,

    /// Trim whitespace around table fields
    #[arg(long)]
    pub trim: bool,

    /// Use uniform priors instead of label-frequency priors
    #[arg(long)]
    pub uniform_prior: bool,
}

/// Arguments for table statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the training table (CSV)
    #[arg(value_name = "TABLE")]
    pub table: PathBuf,

    /// Field delimiter of the training table
    #[arg(short, long, default_value = ",")]
    pub delimiter: char,

    /// Trim whitespace around table fields
    #[arg(long)]
    pub trim: bool,
}

/// Arguments for table validation
#[derive(Parser, Debug, Clone)]
pub struct ValidateArgs {
    /// Path to the training table (CSV)
    #[arg(value_name = "TABLE")]
    pub table: PathBuf,

    /// Field delimiter of the training table
    #[arg(short, long, default_value = ",")]
    pub delimiter: char,

    /// Trim whitespace around table fields
    #[arg(long)]
    pub trim: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_classify_command() {
        let args = TekiArgs::try_parse_from([
            "teki",
            "classify",
            "/path/to/table.csv",
            "bonjour tout le monde",
        ])
        .unwrap();

        if let Command::Classify(classify_args) = args.command {
            assert_eq!(classify_args.table, PathBuf::from("/path/to/table.csv"));
            assert_eq!(classify_args.sentence, "bonjour tout le monde");
            assert_eq!(classify_args.delimiter, ',');
            assert!(!classify_args.trim);
            assert!(!classify_args.uniform_prior);
        } else {
            panic!("Expected Classify command");
        }
    }

    #[test]
    fn test_classify_file_command() {
        let args = TekiArgs::try_parse_from([
            "teki",
            "classify-file",
            "/path/to/table.csv",
            "/path/to/sentences.txt",
            "--output",
            "results.csv",
            "--uniform-prior",
        ])
        .unwrap();

        if let Command::ClassifyFile(file_args) = args.command {
            assert_eq!(file_args.table, PathBuf::from("/path/to/table.csv"));
            assert_eq!(
                file_args.sentence_file,
                PathBuf::from("/path/to/sentences.txt")
            );
            assert_eq!(file_args.output, Some(PathBuf::from("results.csv")));
            assert!(file_args.uniform_prior);
        } else {
            panic!("Expected ClassifyFile command");
        }
    }

    #[test]
    fn test_stats_with_delimiter() {
        let args = TekiArgs::try_parse_from([
            "teki",
            "stats",
            "/path/to/table.tsv",
            "--delimiter",
            "\t",
            "--trim",
        ])
        .unwrap();

        if let Command::Stats(stats_args) = args.command {
            assert_eq!(stats_args.delimiter, '\t');
            assert!(stats_args.trim);
        } else {
            panic!("Expected Stats command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = TekiArgs::try_parse_from(["teki", "validate", "t.csv"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Verbose flag
        let args = TekiArgs::try_parse_from(["teki", "-v", "validate", "t.csv"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Multiple verbose flags
        let args = TekiArgs::try_parse_from(["teki", "-vv", "validate", "t.csv"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        // Quiet flag
        let args = TekiArgs::try_parse_from(["teki", "--quiet", "validate", "t.csv"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            TekiArgs::try_parse_from(["teki", "--format", "json", "validate", "t.csv"]).unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
    }
}
