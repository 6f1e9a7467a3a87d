//! Batch conversion command for multiple statement PDFs.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use folha_core::{Dataset, Severity};

use super::convert::{format_dataset, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "csv")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of converting a single file.
struct ConvertResult {
    path: PathBuf,
    dataset: Option<Dataset>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs) -> anyhow::Result<()> {
    let start = Instant::now();

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            ext.eq_ignore_ascii_case("pdf")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to convert",
        style("ℹ").blue(),
        files.len()
    );

    // Create output directory if specified
    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let overall_pb = ProgressBar::new(files.len() as u64);
    overall_pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    // One document at a time; conversions share no state.
    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let file_start = Instant::now();
        let result = convert_single_file(&path);
        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        match result {
            Ok(dataset) => {
                results.push(ConvertResult {
                    path: path.clone(),
                    dataset: Some(dataset),
                    error: None,
                    processing_time_ms,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to convert {}: {}", path.display(), error_msg);
                    results.push(ConvertResult {
                        path: path.clone(),
                        dataset: None,
                        error: Some(error_msg),
                        processing_time_ms,
                    });
                } else {
                    error!("Failed to convert {}: {}", path.display(), error_msg);
                    anyhow::bail!("Conversion failed: {}", error_msg);
                }
            }
        }

        overall_pb.inc(1);
    }

    overall_pb.finish_with_message("Complete");

    // Write outputs
    let successful: Vec<_> = results.iter().filter(|r| r.dataset.is_some()).collect();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    for result in &successful {
        if let (Some(dataset), Some(output_dir)) = (&result.dataset, &args.output_dir) {
            let output_name = result
                .path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("statement");

            let extension = match args.format {
                OutputFormat::Csv => "csv",
                OutputFormat::Json => "json",
                OutputFormat::Text => "txt",
            };

            let output_path = output_dir.join(format!("{}.{}", output_name, extension));
            let content = format_dataset(dataset, args.format)?;

            fs::write(&output_path, content)?;
            debug!("Wrote output to {}", output_path.display());
        }
    }

    // Generate summary if requested
    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    // Print summary
    println!();
    println!(
        "{} Converted {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn convert_single_file(path: &PathBuf) -> anyhow::Result<Dataset> {
    let data = fs::read(path)?;
    Ok(folha_core::extract_dataset(&data)?)
}

fn write_summary(path: &PathBuf, results: &[ConvertResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "rows",
        "warnings",
        "processing_time_ms",
        "error",
    ])?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        let time = result.processing_time_ms.to_string();

        if let Some(dataset) = &result.dataset {
            let rows = dataset.records.len().to_string();
            let warnings = dataset
                .diagnostics
                .iter()
                .filter(|d| d.severity == Severity::Warning)
                .count()
                .to_string();

            wtr.write_record([
                filename,
                "success",
                rows.as_str(),
                warnings.as_str(),
                time.as_str(),
                "",
            ])?;
        } else {
            wtr.write_record([
                filename,
                "error",
                "",
                "",
                time.as_str(),
                result.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folha_core::{Diagnostic, PayrollRecord};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_write_summary_lists_successes_and_failures() {
        let dir = tempfile::tempdir().unwrap();
        let summary_path = dir.path().join("summary.csv");

        let results = vec![
            ConvertResult {
                path: PathBuf::from("abril.pdf"),
                dataset: Some(Dataset {
                    records: vec![PayrollRecord {
                        classification: "A".to_string(),
                        description: "ROW".to_string(),
                        amount: Decimal::from_str("1.00").unwrap(),
                    }],
                    diagnostics: vec![
                        Diagnostic::info("section started", 1),
                        Diagnostic::warning("invalid amount '9,9' on line 4", 4),
                    ],
                }),
                error: None,
                processing_time_ms: 12,
            },
            ConvertResult {
                path: PathBuf::from("maio.pdf"),
                dataset: None,
                error: Some("PDF is encrypted".to_string()),
                processing_time_ms: 3,
            },
        ];

        write_summary(&summary_path, &results).unwrap();

        let text = fs::read_to_string(&summary_path).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "abril.pdf,success,1,1,12,");
        assert_eq!(lines[2], "maio.pdf,error,,,3,PDF is encrypted");
    }
}
