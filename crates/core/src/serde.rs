//! Serde helper functions for backend payloads.
//!
//! The backend is loose about a few field encodings: dates arrive either as
//! plain `YYYY-MM-DD` or as full RFC 3339 timestamps, and decimal amounts
//! are sometimes serialized as strings.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(s).map(|dt| dt.naive_utc().date()))
        .map_err(|e| format!("invalid date {:?}: {}", s, e))
}

/// Deserialize a NaiveDate from `YYYY-MM-DD` or an RFC 3339 timestamp.
///
/// Timestamps are reduced to their UTC calendar date.
pub fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_date(s.trim()).map_err(serde::de::Error::custom)
}

/// Deserialize an optional date, treating null and empty strings as None.
pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if !s.trim().is_empty() => parse_date(s.trim())
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    String(String),
}

/// Deserialize an amount sent either as a JSON number or a numeric string.
///
/// NaN and infinities are rejected.
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => n,
        NumberOrString::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| serde::de::Error::custom(format!("invalid amount {:?}: {}", s, e)))?,
    };
    if !amount.is_finite() {
        return Err(serde::de::Error::custom(format!(
            "amount must be finite, got {}",
            amount
        )));
    }
    Ok(amount)
}
