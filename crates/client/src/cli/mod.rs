//! CLI command definitions.

pub mod bills;
pub mod recurrence;
pub mod recurring;
pub mod transactions;
pub mod wallets;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::ClientConfig;

/// CLI client for the walletwise API.
#[derive(Debug, Parser)]
#[command(name = "walletwise")]
#[command(about = "CLI client for the walletwise finance API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "WALLETWISE_URL", default_value = ClientConfig::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Items per page for paginated listings.
    #[arg(long, env = "WALLETWISE_PAGE_SIZE", default_value_t = ClientConfig::DEFAULT_PAGE_SIZE)]
    pub page_size: u32,

    /// HTTP request timeout in seconds.
    #[arg(long, env = "WALLETWISE_TIMEOUT_SECONDS", default_value_t = ClientConfig::DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    /// Display offset from UTC in minutes (e.g. 120 or -300).
    #[arg(
        long,
        env = "WALLETWISE_UTC_OFFSET_MINUTES",
        default_value_t = 0,
        allow_hyphen_values = true
    )]
    pub utc_offset_minutes: i32,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Client configuration assembled from flags and environment.
    pub fn config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            page_size: self.page_size,
            timeout_seconds: self.timeout_seconds,
            utc_offset_minutes: self.utc_offset_minutes,
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Transaction history.
    Transactions(transactions::TransactionsCommand),
    /// Wallet management.
    Wallets(wallets::WalletsCommand),
    /// List categories.
    Categories,
    /// Bills and due dates.
    Bills(bills::BillsCommand),
    /// List budgets with progress.
    Budgets,
    /// List debts with repayment progress.
    Debts,
    /// List saving goals with progress.
    Goals,
    /// Recurring transactions.
    Recurring(recurring::RecurringCommand),
    /// Recurrence labels, computed offline.
    Recurrence(recurrence::RecurrenceCommand),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_negative_offset_parses() {
        let cli = Cli::try_parse_from([
            "walletwise",
            "--utc-offset-minutes",
            "-300",
            "--base-url",
            "http://api.test",
            "categories",
        ])
        .unwrap();

        let config = cli.config();
        assert_eq!(config.utc_offset_minutes, -300);
        assert_eq!(config.base_url, "http://api.test");
        assert!(matches!(cli.command, Commands::Categories));
    }
}
