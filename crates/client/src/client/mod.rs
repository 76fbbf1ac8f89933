//! HTTP client for the walletwise backend.

pub mod bills;
pub mod budgets;
pub mod categories;
pub mod debts;
pub mod goals;
pub mod recurring;
pub mod transactions;
pub mod wallets;

use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

/// HTTP client for the walletwise API.
#[derive(Debug, Clone)]
pub struct WalletwiseClient {
    client: reqwest::Client,
    base_url: String,
    page_size: u32,
}

impl WalletwiseClient {
    /// Create a new client with the given base URL and default page size.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            page_size: ClientConfig::DEFAULT_PAGE_SIZE,
        }
    }

    /// Create a client from configuration, applying its timeout and page size.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            page_size: config.page_size.max(1),
        })
    }

    /// Create from environment (WALLETWISE_URL and friends).
    pub fn from_env() -> Result<Self> {
        Self::from_config(&ClientConfig::from_env())
    }

    /// Set the number of items requested per page.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Rejects negative or non-finite amounts before they reach the backend.
    fn check_amount(amount: f64) -> Result<()> {
        if amount.is_finite() && amount >= 0.0 {
            Ok(())
        } else {
            Err(ClientError::InvalidInput(format!(
                "amount must be a non-negative number, got {}; use the kind to book an expense",
                amount
            )))
        }
    }

    /// Decode a JSON body or map the error status.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
        resource: &str,
    ) -> Result<T> {
        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url(), "response received");
        if status.is_success() {
            let body = response.bytes().await?;
            serde_json::from_slice(&body).map_err(|e| {
                ClientError::InvalidResponse(format!("could not decode {}: {}", resource, e))
            })
        } else {
            Err(self.error_for_status(response, resource).await)
        }
    }

    /// Handle responses where no body is expected.
    async fn handle_empty_response(
        &self,
        response: reqwest::Response,
        resource: &str,
    ) -> Result<()> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(self.error_for_status(response, resource).await)
        }
    }

    async fn error_for_status(&self, response: reqwest::Response, resource: &str) -> ClientError {
        let status = response.status();
        if status.as_u16() == 404 {
            return ClientError::NotFound {
                resource: resource.to_string(),
            };
        }
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        warn!(status = status.as_u16(), %message, "request for {} failed", resource);
        ClientError::ServerError {
            status: status.as_u16(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = WalletwiseClient::new("http://localhost:3000/");

        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.url("/api/wallets"), "http://localhost:3000/api/wallets");
    }

    #[test]
    fn test_page_size_is_at_least_one() {
        let client = WalletwiseClient::new("http://localhost:3000").with_page_size(0);

        assert_eq!(client.page_size(), 1);
    }

    #[test]
    fn test_check_amount() {
        assert!(WalletwiseClient::check_amount(0.0).is_ok());
        assert!(WalletwiseClient::check_amount(12.5).is_ok());
        for amount in [-0.01, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                WalletwiseClient::check_amount(amount),
                Err(ClientError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_from_config() {
        let config = ClientConfig {
            base_url: "http://api.test/".to_string(),
            page_size: 50,
            timeout_seconds: 3,
            utc_offset_minutes: 0,
        };

        let client = WalletwiseClient::from_config(&config).unwrap();

        assert_eq!(client.base_url(), "http://api.test");
        assert_eq!(client.page_size(), 50);
    }
}
