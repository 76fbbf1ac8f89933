//! Wallet API operations.

use walletwise_core::finance::{CreateWalletRequest, Wallet};

use super::WalletwiseClient;
use crate::error::{ClientError, Result};

impl WalletwiseClient {
    /// List all wallets.
    pub async fn list_wallets(&self) -> Result<Vec<Wallet>> {
        let response = self.client.get(self.url("/api/wallets")).send().await?;
        self.handle_response(response, "wallets").await
    }

    /// Create a new wallet.
    pub async fn create_wallet(&self, req: &CreateWalletRequest) -> Result<Wallet> {
        if req.name.trim().is_empty() {
            return Err(ClientError::InvalidInput(
                "wallet name cannot be empty".to_string(),
            ));
        }
        let response = self
            .client
            .post(self.url("/api/wallets"))
            .json(req)
            .send()
            .await?;
        self.handle_response(response, "wallet").await
    }
}
