use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::operations::progress_percent;
use crate::recurrence::RecurrenceRule;
use crate::serde::{
    deserialize_amount, deserialize_date, deserialize_optional_date, deserialize_optional_string,
};

/// Whether money flows in or out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Returns +1.0 for income and -1.0 for expenses.
    pub fn sign(&self) -> f64 {
        match self {
            TransactionKind::Income => 1.0,
            TransactionKind::Expense => -1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

/// A transaction category ("Groceries", "Salary").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub kind: TransactionKind,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub icon: Option<String>,
}

/// A wallet holding a balance in one currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub id: i64,
    pub name: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub balance: f64,
    pub currency: String,
}

/// A single income or expense booked against a wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub wallet_id: i64,
    #[serde(default)]
    pub category_id: Option<i64>,
    /// Always non-negative; direction comes from `kind`.
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: f64,
    pub kind: TransactionKind,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub note: Option<String>,
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
}

impl Transaction {
    /// Returns the amount with its sign applied (expenses are negative).
    pub fn signed_amount(&self) -> f64 {
        self.amount * self.kind.sign()
    }
}

/// A bill due on a given date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub id: i64,
    pub name: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: f64,
    #[serde(deserialize_with = "deserialize_date")]
    pub due_date: NaiveDate,
    #[serde(default)]
    pub paid: bool,
}

impl Bill {
    /// Returns true if the bill is unpaid and its due date has passed.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.paid && self.due_date < today
    }

    /// Returns the number of days until the due date (negative when overdue).
    pub fn days_until_due(&self, today: NaiveDate) -> i64 {
        (self.due_date - today).num_days()
    }
}

/// A spending limit for one category over a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: i64,
    pub category_id: i64,
    #[serde(deserialize_with = "deserialize_amount")]
    pub limit: f64,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub spent: f64,
    #[serde(deserialize_with = "deserialize_date")]
    pub start_date: NaiveDate,
    #[serde(deserialize_with = "deserialize_date")]
    pub end_date: NaiveDate,
}

impl Budget {
    /// Percentage of the limit already spent, clamped to `[0, 100]`.
    pub fn progress(&self) -> f64 {
        progress_percent(self.spent, self.limit)
    }

    /// Amount left before the limit is hit (negative when over budget).
    pub fn remaining(&self) -> f64 {
        self.limit - self.spent
    }

    pub fn is_over_budget(&self) -> bool {
        self.spent > self.limit
    }

    /// Returns true if `date` falls within the budget period (inclusive).
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// Money owed, paid down over time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    pub id: i64,
    pub name: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub principal: f64,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub paid_amount: f64,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub due_date: Option<NaiveDate>,
}

impl Debt {
    /// Amount still owed, never below zero.
    pub fn remaining(&self) -> f64 {
        (self.principal - self.paid_amount).max(0.0)
    }

    pub fn progress(&self) -> f64 {
        progress_percent(self.paid_amount, self.principal)
    }

    pub fn is_settled(&self) -> bool {
        self.paid_amount >= self.principal
    }
}

/// A target amount the user is saving towards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingGoal {
    pub id: i64,
    pub name: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub target_amount: f64,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub current_amount: f64,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub deadline: Option<NaiveDate>,
}

impl SavingGoal {
    pub fn progress(&self) -> f64 {
        progress_percent(self.current_amount, self.target_amount)
    }

    pub fn is_reached(&self) -> bool {
        self.current_amount >= self.target_amount
    }
}

/// A transaction template the backend books according to `rule`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringTransaction {
    pub id: i64,
    pub wallet_id: i64,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: f64,
    pub kind: TransactionKind,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub note: Option<String>,
    pub rule: RecurrenceRule,
}

impl RecurringTransaction {
    /// Describes the schedule, e.g. "Every month on day 12".
    pub fn schedule(&self) -> String {
        self.rule.describe()
    }
}
