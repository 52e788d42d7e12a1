//! Output formatting for CLI commands.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classify::summary::BatchSummary;
use crate::classify::verdict::Verdict;
use crate::cli::args::{OutputFormat, TekiArgs};
use crate::error::Result;

/// Result structure for single-sentence classification.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifyResult {
    pub sentence: String,
    pub token_count: usize,
    pub oov_count: usize,
    pub verdict: Verdict,
    pub lit_score: f64,
    pub oral_score: f64,
}

/// Per-line result of file classification.
#[derive(Debug, Serialize, Deserialize)]
pub struct LineResult {
    pub line: u64,
    pub sentence: String,
    pub token_count: usize,
    pub verdict: Verdict,
    pub lit_score: f64,
    pub oral_score: f64,
}

/// Result structure for file classification.
#[derive(Debug, Serialize, Deserialize)]
pub struct FileClassificationResult {
    pub input: String,
    pub generated_at: DateTime<Utc>,
    pub duration_ms: u64,
    pub summary: BatchSummary,
    pub results: Vec<LineResult>,
    pub output_file: Option<String>,
}

/// Result structure for table statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResult {
    pub table: String,
    pub rows: usize,
    pub lit_sentences: u64,
    pub oral_sentences: u64,
    pub total_sentences: u64,
    pub vocabulary_size: usize,
}

/// Result structure for table validation.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationReport {
    pub table: String,
    pub rows: usize,
    pub lit_sentences: u64,
    pub oral_sentences: u64,
    pub issues: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &TekiArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Csv => output_csv(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &TekiArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    match result {
        _ if std::any::type_name::<T>().contains("FileClassificationResult") => {
            output_file_classification_human(&value, args)
        }
        _ if std::any::type_name::<T>().contains("ClassifyResult") => {
            output_classify_human(&value, args)
        }
        _ if std::any::type_name::<T>().contains("StatsResult") => {
            output_stats_human(&value, args)
        }
        _ if std::any::type_name::<T>().contains("ValidationReport") => {
            output_validation_human(&value, args)
        }
        _ => {
            // Generic output for other types
            output_generic_human(&value, args)
        }
    }
}

/// Output a single classification in human format.
fn output_classify_human(value: &serde_json::Value, _args: &TekiArgs) -> Result<()> {
    if let Some(obj) = value.as_object() {
        if let Some(sentence) = obj.get("sentence").and_then(|s| s.as_str()) {
            println!("Sentence: {sentence}");
        }

        if let Some(verdict) = obj.get("verdict").and_then(|v| v.as_str()) {
            println!("Verdict: {verdict}");
        }

        let lit = obj.get("lit_score").and_then(|s| s.as_f64()).unwrap_or(0.0);
        let oral = obj
            .get("oral_score")
            .and_then(|s| s.as_f64())
            .unwrap_or(0.0);
        println!("Scores: LIT {lit:.6e}, ORAL {oral:.6e}");

        if let Some(tokens) = obj.get("token_count").and_then(|t| t.as_u64()) {
            let oov = obj.get("oov_count").and_then(|o| o.as_u64()).unwrap_or(0);
            println!("Tokens: {tokens} ({oov} out of vocabulary)");
        }
    }
    Ok(())
}

/// Output file classification results in human format.
fn output_file_classification_human(value: &serde_json::Value, _args: &TekiArgs) -> Result<()> {
    if let Some(obj) = value.as_object() {
        if let Some(results) = obj.get("results").and_then(|r| r.as_array()) {
            println!("Classification Results:");
            println!("═══════════════════════");

            for result in results {
                let line = result.get("line").and_then(|l| l.as_u64()).unwrap_or(0);
                let verdict = result
                    .get("verdict")
                    .and_then(|v| v.as_str())
                    .unwrap_or("UNK");
                let sentence = result
                    .get("sentence")
                    .and_then(|s| s.as_str())
                    .unwrap_or("");
                println!("line {line}: {verdict:<4} {sentence}");
            }
        }

        if let Some(summary) = obj.get("summary").and_then(|s| s.as_object()) {
            println!();
            println!("Summary:");
            println!("────────");

            for key in ["sentences", "tokens", "lit", "oral", "unknown"] {
                if let Some(count) = summary.get(key).and_then(|c| c.as_u64()) {
                    println!("{key}: {count}");
                }
            }
        }

        if let Some(duration) = obj.get("duration_ms").and_then(|d| d.as_u64()) {
            println!();
            println!("Classification time: {duration}ms");
        }

        if let Some(output_file) = obj.get("output_file").and_then(|o| o.as_str()) {
            println!("Results saved to: {output_file}");
        }
    }
    Ok(())
}

/// Output table statistics in human format.
fn output_stats_human(value: &serde_json::Value, _args: &TekiArgs) -> Result<()> {
    if let Some(obj) = value.as_object() {
        println!("Training Table Statistics:");
        println!("══════════════════════════");

        if let Some(rows) = obj.get("rows").and_then(|r| r.as_u64()) {
            println!("Rows (word occurrences): {rows}");
        }

        if let Some(lit) = obj.get("lit_sentences").and_then(|l| l.as_u64()) {
            println!("LIT sentences: {lit}");
        }

        if let Some(oral) = obj.get("oral_sentences").and_then(|o| o.as_u64()) {
            println!("ORAL sentences: {oral}");
        }

        if let Some(total) = obj.get("total_sentences").and_then(|t| t.as_u64()) {
            println!("Total sentences: {total}");
        }

        if let Some(vocabulary) = obj.get("vocabulary_size").and_then(|v| v.as_u64()) {
            println!("Vocabulary size: {vocabulary}");
        }
    }
    Ok(())
}

/// Output a validation report in human format.
fn output_validation_human(value: &serde_json::Value, _args: &TekiArgs) -> Result<()> {
    if let Some(obj) = value.as_object() {
        println!("Validation Report:");
        println!("══════════════════");

        if let Some(table) = obj.get("table").and_then(|t| t.as_str()) {
            println!("Table: {table}");
        }

        if let Some(rows) = obj.get("rows").and_then(|r| r.as_u64()) {
            println!("Rows: {rows}");
        }

        if let Some(lit) = obj.get("lit_sentences").and_then(|l| l.as_u64()) {
            println!("LIT sentences: {lit}");
        }

        if let Some(oral) = obj.get("oral_sentences").and_then(|o| o.as_u64()) {
            println!("ORAL sentences: {oral}");
        }

        if let Some(issues) = obj.get("issues").and_then(|i| i.as_array()) {
            println!();
            if issues.is_empty() {
                println!("No issues found.");
            } else {
                println!("Issues:");
                for issue in issues {
                    if let Some(text) = issue.as_str() {
                        println!("  - {text}");
                    }
                }
            }
        }
    }
    Ok(())
}

/// Output generic data in human format.
fn output_generic_human(value: &serde_json::Value, _args: &TekiArgs) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &TekiArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Output in CSV format.
fn output_csv<T: Serialize>(result: &T, _args: &TekiArgs) -> Result<()> {
    // For CSV output, we'll convert to JSON first and then try to flatten
    let value = serde_json::to_value(result)?;

    match value {
        serde_json::Value::Array(arr) => {
            // Output array as CSV rows
            for (i, item) in arr.iter().enumerate() {
                if i == 0 {
                    // Output header
                    if let Some(obj) = item.as_object() {
                        let headers: Vec<String> = obj.keys().cloned().collect();
                        let header_line = headers.join(",");
                        println!("{header_line}");
                    }
                }

                // Output row
                if let Some(obj) = item.as_object() {
                    let values: Vec<String> = obj.values().map(format_csv_value).collect();
                    let value_line = values.join(",");
                    println!("{value_line}");
                }
            }
        }
        serde_json::Value::Object(obj) => {
            // Per-line results flatten to rows; everything else becomes
            // key-value pairs
            if let Some(results) = obj.get("results").and_then(|r| r.as_array()) {
                output_csv(results, _args)?;
            } else {
                println!("key,value");
                for (key, value) in obj {
                    let formatted_csv_value = format_csv_value(&value);
                    println!("{key},{formatted_csv_value}");
                }
            }
        }
        _ => {
            println!("value");
            let formatted_csv_value = format_csv_value(&value);
            println!("{formatted_csv_value}");
        }
    }

    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}

/// Format a JSON value for CSV output.
fn format_csv_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => {
            if s.contains(',') || s.contains('"') || s.contains('\n') {
                let escaped = s.replace('"', "\"\"");
                format!("\"{escaped}\"")
            } else {
                s.clone()
            }
        }
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join("; ");
            format!("\"[{formatted_values}]\"")
        }
        serde_json::Value::Object(_) => "\"[object]\"".to_string(),
        serde_json::Value::Null => "".to_string(),
    }
}
