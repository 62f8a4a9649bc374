//! Samples command - write synthetic statement fixtures.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;

use cardex_core::{Bank, samples};

/// Arguments for the samples command.
#[derive(Args)]
pub struct SamplesArgs {
    /// Output directory
    #[arg(short, long, default_value = "samples")]
    output_dir: PathBuf,
}

pub async fn run(args: SamplesArgs) -> anyhow::Result<()> {
    fs::create_dir_all(&args.output_dir)?;

    for bank in Bank::ALL {
        let path = args.output_dir.join(format!("{}_sample.txt", bank.code()));
        fs::write(&path, samples::statement_for(bank))?;
        println!("{} Created {}", style("✓").green(), path.display());
    }

    Ok(())
}
