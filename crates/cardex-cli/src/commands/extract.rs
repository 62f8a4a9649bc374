//! Extract command - pull billing fields from a single statement.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::{info, warn};

use cardex_core::error::ExtractionError;
use cardex_core::{ExtractionService, Statement};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input statement (PDF or rendered text)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let text = super::read_statement_text(&args.input, &config)?;
    if text.trim().len() < config.pdf.min_text_length {
        warn!("statement has little or no text layer; extraction will likely find nothing");
    }

    let service = ExtractionService::with_config(&config);
    let statement = match service.classify_and_extract(&text) {
        Ok(statement) => statement,
        Err(ExtractionError::UnsupportedBank) => {
            anyhow::bail!(
                "No supported issuer detected in {}. Run `cardex banks` for the supported list.",
                args.input.display()
            );
        }
        Err(err) => return Err(err.into()),
    };

    let output = format_statement(&statement, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!("{} Wrote {}", style("✓").green(), output_path.display());
    } else {
        println!("{}", output);
    }

    Ok(())
}

/// Render a statement record in the requested output format.
pub fn format_statement(statement: &Statement, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(statement)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.serialize(statement)?;
            let bytes = writer.into_inner()?;
            Ok(String::from_utf8(bytes)?)
        }
        OutputFormat::Text => {
            let mut out = String::new();
            out.push_str(&format!("Detected bank:    {}\n", statement.detected_bank));
            out.push_str(&format!("Cardholder name:  {}\n", statement.card_holder_name));
            out.push_str(&format!("Card ending:      {}\n", statement.card_number_last4));
            out.push_str(&format!("Billing period:   {}\n", statement.billing_period));
            out.push_str(&format!("Payment due date: {}\n", statement.payment_due_date));
            out.push_str(&format!("Total amount due: {:.2}\n", statement.total_amount_due));
            Ok(out)
        }
    }
}
