//! Recurring transaction API operations.

use walletwise_core::finance::{CreateRecurringRequest, RecurringTransaction};

use super::WalletwiseClient;
use crate::error::Result;

impl WalletwiseClient {
    /// List all recurring transactions.
    pub async fn list_recurring(&self) -> Result<Vec<RecurringTransaction>> {
        let response = self
            .client
            .get(self.url("/api/recurring-transactions"))
            .send()
            .await?;
        self.handle_response(response, "recurring transactions")
            .await
    }

    /// Create a recurring transaction.
    pub async fn create_recurring(
        &self,
        req: &CreateRecurringRequest,
    ) -> Result<RecurringTransaction> {
        Self::check_amount(req.amount)?;
        let response = self
            .client
            .post(self.url("/api/recurring-transactions"))
            .json(req)
            .send()
            .await?;
        self.handle_response(response, "recurring transaction")
            .await
    }
}
