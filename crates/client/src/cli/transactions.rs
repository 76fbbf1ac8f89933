//! Transaction CLI commands.

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

pub use walletwise_core::finance::TransactionKind as CoreTransactionKind;

/// Transaction commands.
#[derive(Debug, Parser)]
pub struct TransactionsCommand {
    #[command(subcommand)]
    pub action: TransactionsAction,
}

/// CLI transaction kind (with clap ValueEnum).
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Kind {
    Income,
    Expense,
}

impl From<Kind> for CoreTransactionKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Income => CoreTransactionKind::Income,
            Kind::Expense => CoreTransactionKind::Expense,
        }
    }
}

/// Available transaction actions.
#[derive(Debug, Subcommand)]
pub enum TransactionsAction {
    /// List transactions page by page.
    List {
        /// First page to show (zero-based).
        #[arg(long, default_value = "0")]
        page: u32,
        /// Number of consecutive pages to show.
        #[arg(long, default_value = "1")]
        pages: u32,
    },
    /// Get transaction by ID.
    Get {
        /// Transaction ID.
        id: i64,
    },
    /// Book a new transaction.
    Create {
        /// Wallet ID.
        #[arg(long)]
        wallet_id: i64,
        /// Amount (non-negative).
        #[arg(long)]
        amount: f64,
        /// Income or expense.
        #[arg(long, value_enum)]
        kind: Kind,
        /// Date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Category ID.
        #[arg(long)]
        category_id: Option<i64>,
        /// Free-form note.
        #[arg(long)]
        note: Option<String>,
    },
    /// Update a transaction.
    Update {
        /// Transaction ID.
        id: i64,
        /// New wallet.
        #[arg(long)]
        wallet_id: Option<i64>,
        /// New amount.
        #[arg(long)]
        amount: Option<f64>,
        /// New kind.
        #[arg(long, value_enum)]
        kind: Option<Kind>,
        /// New date.
        #[arg(long)]
        date: Option<NaiveDate>,
        /// New category.
        #[arg(long)]
        category_id: Option<i64>,
        /// New note.
        #[arg(long)]
        note: Option<String>,
    },
    /// Delete transaction by ID.
    Delete {
        /// Transaction ID.
        id: i64,
    },
}
