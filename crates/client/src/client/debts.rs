//! Debt API operations.

use walletwise_core::finance::Debt;

use super::WalletwiseClient;
use crate::error::Result;

impl WalletwiseClient {
    /// List all debts.
    pub async fn list_debts(&self) -> Result<Vec<Debt>> {
        let response = self.client.get(self.url("/api/debts")).send().await?;
        self.handle_response(response, "debts").await
    }
}
