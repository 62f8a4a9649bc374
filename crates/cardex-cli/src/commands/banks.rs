//! Banks command - list supported issuers.

use clap::Args;
use console::style;

use cardex_core::Bank;

/// Arguments for the banks command.
#[derive(Args)]
pub struct BanksArgs {
    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub async fn run(args: BanksArgs) -> anyhow::Result<()> {
    if args.json {
        let banks: Vec<_> = Bank::ALL
            .iter()
            .map(|bank| serde_json::json!({ "name": bank.full_name(), "code": bank.code() }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&banks)?);
    } else {
        println!("{}", style("Supported issuers:").bold());
        for bank in Bank::ALL {
            println!("  {:<8} {}", bank.code(), bank.full_name());
        }
    }

    Ok(())
}
