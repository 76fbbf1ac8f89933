//! Bill CLI commands.

use clap::{Parser, Subcommand};

/// Bill commands.
#[derive(Debug, Parser)]
pub struct BillsCommand {
    #[command(subcommand)]
    pub action: BillsAction,
}

/// Available bill actions.
#[derive(Debug, Subcommand)]
pub enum BillsAction {
    /// List all bills.
    List,
    /// Show overdue bills and unpaid bills due soon.
    Upcoming {
        /// How many days ahead to look.
        #[arg(long, default_value = "7")]
        days: i64,
    },
    /// Mark a bill as paid.
    Pay {
        /// Bill ID.
        id: i64,
    },
}
