//! Polybank CLI - runs the account polymorphism demonstration
//!
//! Usage:
//! ```bash
//! polybank
//! polybank --withdraw 8000
//! polybank --deposit 250 --fee 75 --json
//! RUST_LOG=debug polybank
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use polybank_core::scenario::{self, ScenarioConfig};
use polybank_core::AnyAccount;
use rust_decimal::Decimal;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

/// Polybank - one set of account calls, three account behaviors
#[derive(Parser)]
#[command(name = "polybank")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Amount deposited into every account
    #[arg(long, default_value = "500")]
    pub deposit: Decimal,

    /// Amount withdrawn from every account
    #[arg(long, default_value = "1200")]
    pub withdraw: Decimal,

    /// Fee charged to the current account
    #[arg(long, default_value = "200")]
    pub fee: Decimal,

    /// Print the final accounts as JSON after the transcript
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    fn to_config(&self) -> ScenarioConfig {
        ScenarioConfig {
            deposit: self.deposit,
            withdrawal: self.withdraw,
            fee: self.fee,
        }
    }
}

fn main() -> Result<()> {
    // Logs go to stderr, stdout carries the transcript only
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.to_config();
    tracing::debug!(?config, json = cli.json, "starting polybank");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let accounts =
        scenario::run(&config, &mut out).context("Failed to write transcript")?;

    if cli.json {
        let snapshots: Vec<_> = accounts.iter().map(AnyAccount::snapshot).collect();
        let json = serde_json::to_string_pretty(&snapshots).context("Failed to encode accounts")?;
        writeln!(out)?;
        writeln!(out, "{json}")?;
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_match_scenario() {
        let cli = Cli::parse_from(["polybank"]);
        assert_eq!(cli.to_config(), ScenarioConfig::default());
        assert!(!cli.json);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from(["polybank", "--withdraw", "8000", "--fee", "12.5", "--json"]);
        let config = cli.to_config();

        assert_eq!(config.deposit, dec!(500));
        assert_eq!(config.withdrawal, dec!(8000));
        assert_eq!(config.fee, dec!(12.5));
        assert!(cli.json);
    }
}
