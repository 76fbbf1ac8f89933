//! Category API operations.

use walletwise_core::finance::Category;

use super::WalletwiseClient;
use crate::error::Result;

impl WalletwiseClient {
    /// List all categories.
    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        let response = self.client.get(self.url("/api/categories")).send().await?;
        self.handle_response(response, "categories").await
    }
}
