//! Command implementations for Teki CLI.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{Local, Utc};

use crate::classify::classifier::SentenceClassifier;
use crate::classify::prior::FixedPrior;
use crate::classify::summary::BatchSummary;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::corpus::reader::TableReader;
use crate::error::Result;
use crate::model::builder::ModelBuilder;

/// Execute a CLI command.
pub fn execute_command(args: TekiArgs) -> Result<()> {
    match &args.command {
        Command::Classify(classify_args) => classify_sentence(classify_args.clone(), &args),
        Command::ClassifyFile(file_args) => classify_file(file_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
        Command::Validate(validate_args) => validate_table(validate_args.clone(), &args),
    }
}

/// Build a table reader from shared CLI options.
fn table_reader(delimiter: char, trim: bool) -> TableReader {
    TableReader::new().with_delimiter(delimiter).with_trim(trim)
}

/// Load a table and fit a classifier on it.
fn load_classifier(
    table_path: &Path,
    delimiter: char,
    trim: bool,
    uniform_prior: bool,
    cli_args: &TekiArgs,
) -> Result<SentenceClassifier> {
    if cli_args.verbosity() > 1 {
        println!("Loading training table: {}", table_path.display());
    }

    let table = table_reader(delimiter, trim).from_path(table_path)?;
    let model = ModelBuilder::new().build(&table)?;

    if cli_args.verbosity() > 1 {
        println!(
            "Model ready: {} words, {} sentences",
            model.vocabulary_size(),
            model.label_counts().total()
        );
    }

    let mut classifier = SentenceClassifier::new(model);
    if uniform_prior {
        classifier = classifier.with_prior(FixedPrior::uniform());
    }

    Ok(classifier)
}

/// Classify a single sentence.
fn classify_sentence(args: ClassifyArgs, cli_args: &TekiArgs) -> Result<()> {
    let classifier = load_classifier(
        &args.table,
        args.delimiter,
        args.trim,
        args.uniform_prior,
        cli_args,
    )?;

    let tokens: Vec<&str> = args.sentence.split_whitespace().collect();
    let score = classifier.score(&tokens);
    let oov_count = tokens
        .iter()
        .filter(|token| !classifier.model().contains(token))
        .count();

    output_result(
        "Classification completed",
        &ClassifyResult {
            sentence: args.sentence.clone(),
            token_count: tokens.len(),
            oov_count,
            verdict: score.verdict(),
            lit_score: score.totals.lit,
            oral_score: score.totals.oral,
        },
        cli_args,
    )?;

    Ok(())
}

/// Classify a file of sentences, one per line.
fn classify_file(args: ClassifyFileArgs, cli_args: &TekiArgs) -> Result<()> {
    let classifier = load_classifier(
        &args.table,
        args.delimiter,
        args.trim,
        args.uniform_prior,
        cli_args,
    )?;

    if cli_args.verbosity() > 1 {
        println!("Classifying sentences from: {}", args.sentence_file.display());
    }

    let file = File::open(&args.sentence_file)?;
    let reader = BufReader::new(file);

    let mut sentences = Vec::new();
    for line in reader.lines() {
        sentences.push(line?);
    }

    let start_time = Instant::now();

    let token_lists: Vec<Vec<String>> = sentences
        .iter()
        .map(|sentence| {
            sentence
                .split_whitespace()
                .map(|token| token.to_string())
                .collect()
        })
        .collect();

    let scores = classifier.classify_batch(&token_lists);
    let duration = start_time.elapsed();

    let mut summary = BatchSummary::new();
    let mut results = Vec::with_capacity(sentences.len());
    for (index, (sentence, score)) in sentences.iter().zip(&scores).enumerate() {
        let verdict = score.verdict();
        let token_count = token_lists[index].len();
        summary.record(verdict, token_count);
        results.push(LineResult {
            line: index as u64 + 1,
            sentence: sentence.clone(),
            token_count,
            verdict,
            lit_score: score.totals.lit,
            oral_score: score.totals.oral,
        });
    }

    let output_file = match &args.output {
        Some(requested) => {
            let path = resolve_output_path(requested);
            write_results_csv(&results, &path)?;
            if cli_args.verbosity() > 1 {
                println!("Results saved to: {}", path.display());
            }
            Some(path.to_string_lossy().to_string())
        }
        None => None,
    };

    output_result(
        "File classification completed",
        &FileClassificationResult {
            input: args.sentence_file.to_string_lossy().to_string(),
            generated_at: Utc::now(),
            duration_ms: duration.as_millis() as u64,
            summary,
            results,
            output_file,
        },
        cli_args,
    )?;

    Ok(())
}

/// Show training table and model statistics.
fn show_stats(args: StatsArgs, cli_args: &TekiArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Gathering statistics for: {}", args.table.display());
    }

    let table = table_reader(args.delimiter, args.trim).from_path(&args.table)?;
    let model = ModelBuilder::new().build(&table)?;
    let report = model.frequency_report();

    output_result(
        "Training table statistics",
        &StatsResult {
            table: args.table.to_string_lossy().to_string(),
            rows: table.len(),
            lit_sentences: report.label_counts.lit,
            oral_sentences: report.label_counts.oral,
            total_sentences: report.total_sentences,
            vocabulary_size: report.vocabulary_size,
        },
        cli_args,
    )?;

    Ok(())
}

/// Validate a training table.
fn validate_table(args: ValidateArgs, cli_args: &TekiArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Validating training table: {}", args.table.display());
    }

    let table = table_reader(args.delimiter, args.trim).from_path(&args.table)?;
    let counts = table.label_counts();

    let mut issues = Vec::new();
    if table.is_empty() {
        issues.push("table has no rows".to_string());
    } else if let Some(label) = counts.missing_label() {
        issues.push(format!("no {label} sentences"));
    }

    let issue_count = issues.len();

    output_result(
        "Training table validation completed",
        &ValidationReport {
            table: args.table.to_string_lossy().to_string(),
            rows: table.len(),
            lit_sentences: counts.lit,
            oral_sentences: counts.oral,
            issues,
            generated_at: Utc::now(),
        },
        cli_args,
    )?;

    if issue_count > 0 {
        return Err(crate::error::TekiError::invalid_operation(format!(
            "training table validation failed with {issue_count} issue(s)"
        )));
    }

    Ok(())
}

/// Resolve the requested output path; directories get a timestamped file
/// name inside them.
fn resolve_output_path(requested: &Path) -> PathBuf {
    if requested.is_dir() {
        let file_name = format!(
            "teki_results_{}.csv",
            Local::now().format("%d_%m_%Y_%H_%M_%S")
        );
        requested.join(file_name)
    } else {
        requested.to_path_buf()
    }
}

/// Write per-line results to a CSV file.
fn write_results_csv(results: &[LineResult], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "line",
        "sentence",
        "token_count",
        "verdict",
        "lit_score",
        "oral_score",
    ])?;

    for result in results {
        writer.write_record([
            result.line.to_string(),
            result.sentence.clone(),
            result.token_count.to_string(),
            result.verdict.as_str().to_string(),
            format!("{:e}", result.lit_score),
            format!("{:e}", result.oral_score),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
