//! Saving goal API operations.

use walletwise_core::finance::SavingGoal;

use super::WalletwiseClient;
use crate::error::Result;

impl WalletwiseClient {
    /// List all saving goals.
    pub async fn list_saving_goals(&self) -> Result<Vec<SavingGoal>> {
        let response = self.client.get(self.url("/api/saving-goals")).send().await?;
        self.handle_response(response, "saving goals").await
    }
}
