use std::{env, time::Duration};

use chrono::{FixedOffset, Offset, Utc};

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Backend base URL (default: "http://localhost:3000")
    pub base_url: String,
    /// Items per page for paginated listings (default: 20)
    pub page_size: u32,
    /// HTTP request timeout in seconds (default: 30)
    pub timeout_seconds: u64,
    /// Display offset from UTC in minutes (default: 0)
    pub utc_offset_minutes: i32,
}

impl ClientConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:3000";
    pub const DEFAULT_PAGE_SIZE: u32 = 20;
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `WALLETWISE_URL` - Backend base URL (default: "http://localhost:3000")
    /// - `WALLETWISE_PAGE_SIZE` - Items per page (default: 20)
    /// - `WALLETWISE_TIMEOUT_SECONDS` - Request timeout (default: 30)
    /// - `WALLETWISE_UTC_OFFSET_MINUTES` - Display offset (default: 0)
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("WALLETWISE_URL")
                .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string()),
            page_size: env::var("WALLETWISE_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|size| *size > 0)
                .unwrap_or(Self::DEFAULT_PAGE_SIZE),
            timeout_seconds: env::var("WALLETWISE_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(Self::DEFAULT_TIMEOUT_SECONDS),
            utc_offset_minutes: env::var("WALLETWISE_UTC_OFFSET_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Get the display offset. Out-of-range values fall back to UTC.
    pub fn display_offset(&self) -> FixedOffset {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
