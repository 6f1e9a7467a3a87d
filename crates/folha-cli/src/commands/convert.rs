//! Convert command - extract the payroll table from a single statement PDF.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use folha_core::payroll::amount::format_amount;
use folha_core::{Dataset, Diagnostic, FolhaError, ParseError, Severity};

/// Arguments for the convert command.
#[derive(Args)]
pub struct ConvertArgs {
    /// Input statement PDF
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: <input>.csv, or stdout for json/text)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: OutputFormat,

    /// Print the processing log after conversion
    #[arg(long)]
    diagnostics: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// CSV table (the download artifact)
    Csv,
    /// Full dataset as JSON
    Json,
    /// Plain text summary
    Text,
}

pub async fn run(args: ConvertArgs) -> anyhow::Result<()> {
    let start = Instant::now();

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Converting file: {}", args.input.display());

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    pb.set_message("Loading PDF...");
    pb.set_position(10);

    let data = fs::read(&args.input)?;

    pb.set_message("Extracting payroll rows...");
    pb.set_position(40);

    let (payload, diagnostics): (anyhow::Result<Vec<u8>>, Vec<Diagnostic>) = match args.format {
        OutputFormat::Csv => {
            // The one-call conversion covers the whole CSV flow and hands
            // the log back whatever the outcome.
            let conversion = folha_core::convert(&data);
            (
                conversion.payload.map_err(anyhow::Error::from),
                conversion.diagnostics,
            )
        }
        OutputFormat::Json | OutputFormat::Text => match folha_core::extract_dataset(&data) {
            Ok(dataset) => {
                let bytes = format_dataset(&dataset, args.format)?;
                (Ok(bytes), dataset.diagnostics)
            }
            Err(e) => {
                let diagnostics = match &e {
                    FolhaError::Parse(ParseError::NoData { diagnostics }) => diagnostics.clone(),
                    _ => Vec::new(),
                };
                (Err(e.into()), diagnostics)
            }
        },
    };

    pb.finish_with_message("Done");

    if args.diagnostics {
        print_diagnostics(&diagnostics);
    }

    let bytes = payload?;

    // Write output
    match args.format {
        OutputFormat::Csv => {
            let output_path = args
                .output
                .clone()
                .unwrap_or_else(|| args.input.with_extension("csv"));
            fs::write(&output_path, &bytes)?;
            println!(
                "{} Table written to {}",
                style("✓").green(),
                output_path.display()
            );
        }
        OutputFormat::Json | OutputFormat::Text => {
            if let Some(output_path) = &args.output {
                fs::write(output_path, &bytes)?;
                println!(
                    "{} Output written to {}",
                    style("✓").green(),
                    output_path.display()
                );
            } else {
                print!("{}", String::from_utf8_lossy(&bytes));
            }
        }
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Render a dataset in the requested output format.
pub fn format_dataset(dataset: &Dataset, format: OutputFormat) -> anyhow::Result<Vec<u8>> {
    match format {
        OutputFormat::Csv => Ok(folha_core::table::serialize(&dataset.records)?),
        OutputFormat::Json => Ok(serde_json::to_vec_pretty(dataset)?),
        OutputFormat::Text => Ok(format_text(dataset).into_bytes()),
    }
}

fn format_text(dataset: &Dataset) -> String {
    let mut output = String::new();

    output.push_str(&format!("Rows: {}\n", dataset.records.len()));
    output.push('\n');

    for record in &dataset.records {
        output.push_str(&format!(
            "{:<15} {:<45} {:>15}\n",
            record.classification,
            record.description,
            format_amount(&record.amount),
        ));
    }

    output
}

/// Print the processing log, one styled line per entry.
pub fn print_diagnostics(diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }

    eprintln!("{}", style("Processing log:").yellow());
    for diagnostic in diagnostics {
        let tag = match diagnostic.severity {
            Severity::Info => style("info").blue(),
            Severity::Warning => style("warn").yellow(),
            Severity::Error => style("error").red(),
        };

        if diagnostic.line > 0 {
            eprintln!(
                "  [{}] line {}: {}",
                tag, diagnostic.line, diagnostic.message
            );
        } else {
            eprintln!("  [{}] {}", tag, diagnostic.message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folha_core::PayrollRecord;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dataset() -> Dataset {
        Dataset {
            records: vec![PayrollRecord {
                classification: "3.1.1.1.01.04".to_string(),
                description: "VENCIMENTO BASICO".to_string(),
                amount: Decimal::from_str("1234.56").unwrap(),
            }],
            diagnostics: vec![Diagnostic::info("section started", 2)],
        }
    }

    #[test]
    fn test_format_dataset_csv_has_fixed_columns() {
        let bytes = format_dataset(&dataset(), OutputFormat::Csv).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.starts_with("CLSF.CONTABIL,DENOMINACAO / RUBRICA,VALOR / TOTAL\n"));
        assert!(text.contains("3.1.1.1.01.04,VENCIMENTO BASICO,1234.56"));
    }

    #[test]
    fn test_format_dataset_text_uses_brazilian_amounts() {
        let bytes = format_dataset(&dataset(), OutputFormat::Text).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.contains("1.234,56"));
    }

    #[test]
    fn test_format_dataset_json_round_trips() {
        let bytes = format_dataset(&dataset(), OutputFormat::Json).unwrap();
        let parsed: Dataset = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(parsed, dataset());
    }
}
