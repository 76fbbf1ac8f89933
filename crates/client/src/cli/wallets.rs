//! Wallet CLI commands.

use clap::{Parser, Subcommand};

/// Wallet management commands.
#[derive(Debug, Parser)]
pub struct WalletsCommand {
    #[command(subcommand)]
    pub action: WalletsAction,
}

/// Available wallet actions.
#[derive(Debug, Subcommand)]
pub enum WalletsAction {
    /// List all wallets.
    List,
    /// Create a new wallet.
    Create {
        /// Wallet name.
        #[arg(long)]
        name: String,
        /// ISO currency code.
        #[arg(long, default_value = "USD")]
        currency: String,
        /// Opening balance.
        #[arg(long, default_value = "0")]
        balance: f64,
    },
}
