//! Bill API operations.

use walletwise_core::finance::Bill;

use super::WalletwiseClient;
use crate::error::Result;

impl WalletwiseClient {
    /// List all bills.
    pub async fn list_bills(&self) -> Result<Vec<Bill>> {
        let response = self.client.get(self.url("/api/bills")).send().await?;
        self.handle_response(response, "bills").await
    }

    /// Mark a bill as paid.
    pub async fn pay_bill(&self, id: i64) -> Result<Bill> {
        let response = self
            .client
            .patch(self.url(&format!("/api/bills/{}/pay", id)))
            .send()
            .await?;
        self.handle_response(response, &format!("bill {}", id)).await
    }
}
