//! walletwise_client - REST client and CLI for the walletwise finance API.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod view;

pub use client::WalletwiseClient;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use view::{ListView, PageFetcher, TransactionListView};
