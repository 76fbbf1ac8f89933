//! Transaction API operations.

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;
use walletwise_core::finance::{
    CreateTransactionRequest, Transaction, UpdateTransactionRequest,
};
use walletwise_core::pagination::{PageEntry, PageKey};

use super::WalletwiseClient;
use crate::error::{ClientError, Result};
use crate::view::PageFetcher;

/// Query parameters for a page of transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageQuery {
    pub page: PageKey,
    pub limit: u32,
}

impl WalletwiseClient {
    /// Fetch one page of transactions, newest first.
    pub async fn list_transactions(&self, page: PageKey) -> Result<PageEntry<Transaction>> {
        let query = PageQuery {
            page,
            limit: self.page_size,
        };
        debug!(page, limit = query.limit, "fetching transactions page");
        let response = self
            .client
            .get(self.url("/api/transactions"))
            .query(&query)
            .send()
            .await?;
        self.handle_response(response, &format!("transactions page {}", page))
            .await
    }

    /// Get transaction by ID.
    pub async fn get_transaction(&self, id: i64) -> Result<Transaction> {
        let response = self
            .client
            .get(self.url(&format!("/api/transactions/{}", id)))
            .send()
            .await?;
        self.handle_response(response, &format!("transaction {}", id))
            .await
    }

    /// Book a new transaction.
    pub async fn create_transaction(&self, req: &CreateTransactionRequest) -> Result<Transaction> {
        Self::check_amount(req.amount)?;
        let response = self
            .client
            .post(self.url("/api/transactions"))
            .json(req)
            .send()
            .await?;
        self.handle_response(response, "transaction").await
    }

    /// Update a transaction.
    pub async fn update_transaction(
        &self,
        id: i64,
        req: &UpdateTransactionRequest,
    ) -> Result<Transaction> {
        if req.is_empty() {
            return Err(ClientError::InvalidInput(
                "update must change at least one field".to_string(),
            ));
        }
        let response = self
            .client
            .put(self.url(&format!("/api/transactions/{}", id)))
            .json(req)
            .send()
            .await?;
        self.handle_response(response, &format!("transaction {}", id))
            .await
    }

    /// Delete transaction by ID.
    pub async fn delete_transaction(&self, id: i64) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/transactions/{}", id)))
            .send()
            .await?;
        self.handle_empty_response(response, &format!("transaction {}", id))
            .await
    }
}

#[async_trait]
impl PageFetcher<Transaction> for WalletwiseClient {
    async fn fetch_page(&self, key: PageKey) -> Result<PageEntry<Transaction>> {
        self.list_transactions(key).await
    }
}
