//! API request types for finance operations.
//!
//! Shared between the client and anything else that talks to the backend.
//! Pure data types with no I/O.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::types::TransactionKind;
use crate::recurrence::RecurrenceRule;

/// Request payload for booking a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    pub wallet_id: i64,
    pub amount: f64,
    pub kind: TransactionKind,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl CreateTransactionRequest {
    /// Create a request with the required fields.
    pub fn new(wallet_id: i64, amount: f64, kind: TransactionKind, date: NaiveDate) -> Self {
        Self {
            wallet_id,
            amount,
            kind,
            date,
            category_id: None,
            note: None,
        }
    }

    pub fn with_category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Request payload for editing a transaction. Only set fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateTransactionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransactionKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl UpdateTransactionRequest {
    /// Returns true if no field would be changed.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Request payload for creating a wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateWalletRequest {
    pub name: String,
    pub currency: String,
    #[serde(default)]
    pub balance: f64,
}

impl CreateWalletRequest {
    /// Create a wallet request with a zero opening balance.
    pub fn new(name: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            currency: currency.into(),
            balance: 0.0,
        }
    }

    pub fn with_balance(mut self, balance: f64) -> Self {
        self.balance = balance;
        self
    }
}

/// Request payload for creating a recurring transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRecurringRequest {
    pub wallet_id: i64,
    pub amount: f64,
    pub kind: TransactionKind,
    pub rule: RecurrenceRule,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl CreateRecurringRequest {
    pub fn new(wallet_id: i64, amount: f64, kind: TransactionKind, rule: RecurrenceRule) -> Self {
        Self {
            wallet_id,
            amount,
            kind,
            rule,
            category_id: None,
            note: None,
        }
    }

    pub fn with_category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}
