//! Recurring transaction CLI commands.

use clap::{Parser, Subcommand};

use super::recurrence::RuleArgs;
use super::transactions::Kind;

/// Recurring transaction commands.
#[derive(Debug, Parser)]
pub struct RecurringCommand {
    #[command(subcommand)]
    pub action: RecurringAction,
}

/// Available recurring transaction actions.
#[derive(Debug, Subcommand)]
pub enum RecurringAction {
    /// List recurring transactions with their schedules.
    List,
    /// Create a recurring transaction.
    Create {
        /// Wallet ID.
        #[arg(long)]
        wallet_id: i64,
        /// Amount per occurrence.
        #[arg(long)]
        amount: f64,
        /// Income or expense.
        #[arg(long, value_enum)]
        kind: Kind,
        /// Category ID.
        #[arg(long)]
        category_id: Option<i64>,
        /// Free-form note.
        #[arg(long)]
        note: Option<String>,
        #[command(flatten)]
        rule: RuleArgs,
    },
}
