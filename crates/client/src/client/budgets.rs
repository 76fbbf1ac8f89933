//! Budget API operations.

use walletwise_core::finance::Budget;

use super::WalletwiseClient;
use crate::error::Result;

impl WalletwiseClient {
    /// List all budgets.
    pub async fn list_budgets(&self) -> Result<Vec<Budget>> {
        let response = self.client.get(self.url("/api/budgets")).send().await?;
        self.handle_response(response, "budgets").await
    }
}
