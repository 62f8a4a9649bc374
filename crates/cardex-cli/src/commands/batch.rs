//! Batch command - extract fields from multiple statement files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use cardex_core::{CardexConfig, ExtractionService, Statement};

use super::extract::{OutputFormat, format_statement};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory for per-file results
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Stop at the first failing file
    #[arg(long)]
    fail_fast: bool,
}

/// Result of processing a single file.
struct BatchResult {
    path: PathBuf,
    statement: Option<Statement>,
    error: Option<String>,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "pdf" | "txt")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let service = ExtractionService::with_config(&config);
    let mut results = Vec::with_capacity(files.len());

    for path in files {
        match process_file(&path, &service, &args, &config) {
            Ok(statement) => {
                debug!("extracted {} from {}", statement.detected_bank, path.display());
                results.push(BatchResult {
                    path,
                    statement: Some(statement),
                    error: None,
                });
            }
            Err(err) => {
                warn!("failed to process {}: {}", path.display(), err);
                if args.fail_fast {
                    pb.finish_and_clear();
                    return Err(err);
                }
                results.push(BatchResult {
                    path,
                    statement: None,
                    error: Some(err.to_string()),
                });
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();

    if args.summary {
        let summary_path = args
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("summary.csv");
        write_summary(&summary_path, &results)?;
        println!("{} Wrote {}", style("✓").green(), summary_path.display());
    }

    let succeeded = results.iter().filter(|r| r.statement.is_some()).count();
    let failed = results.len() - succeeded;
    println!(
        "{} Processed {} files in {:.1}s ({} ok, {} failed)",
        style("✓").green(),
        results.len(),
        start.elapsed().as_secs_f32(),
        succeeded,
        failed
    );

    Ok(())
}

fn process_file(
    path: &PathBuf,
    service: &ExtractionService,
    args: &BatchArgs,
    config: &CardexConfig,
) -> anyhow::Result<Statement> {
    let text = super::read_statement_text(path, config)?;
    let statement = service.classify_and_extract(&text)?;

    if let Some(ref output_dir) = args.output_dir {
        let extension = match args.format {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        };
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("statement");
        let out_path = output_dir.join(format!("{}.{}", stem, extension));
        fs::write(&out_path, format_statement(&statement, args.format)?)?;
    }

    Ok(statement)
}

fn write_summary(path: &PathBuf, results: &[BatchResult]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "file",
        "detected_bank",
        "card_holder_name",
        "card_number_last4",
        "billing_period",
        "payment_due_date",
        "total_amount_due",
        "error",
    ])?;

    for result in results {
        match &result.statement {
            Some(statement) => writer.write_record([
                result.path.display().to_string(),
                statement.detected_bank.clone(),
                statement.card_holder_name.to_string(),
                statement.card_number_last4.to_string(),
                statement.billing_period.to_string(),
                statement.payment_due_date.to_string(),
                format!("{:.2}", statement.total_amount_due),
                String::new(),
            ])?,
            None => writer.write_record([
                result.path.display().to_string(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                result.error.clone().unwrap_or_default(),
            ])?,
        }
    }

    writer.flush()?;
    Ok(())
}
