use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use super::types::{Bill, Transaction, TransactionKind};

/// Returns `current / target` as a percentage clamped to `[0, 100]`.
///
/// A non-positive target yields 0.
pub fn progress_percent(current: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    (current / target * 100.0).clamp(0.0, 100.0)
}

/// Sums transaction amounts, optionally restricted to one kind.
pub fn total_amount(transactions: &[Transaction], kind: Option<TransactionKind>) -> f64 {
    transactions
        .iter()
        .filter(|tx| kind.is_none_or(|k| tx.kind == k))
        .map(|tx| tx.amount)
        .sum()
}

/// Income minus expenses.
pub fn net_total(transactions: &[Transaction]) -> f64 {
    transactions.iter().map(Transaction::signed_amount).sum()
}

/// Groups transactions by their date.
pub fn group_by_date(transactions: &[Transaction]) -> BTreeMap<NaiveDate, Vec<&Transaction>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<&Transaction>> = BTreeMap::new();

    for tx in transactions {
        grouped.entry(tx.date).or_default().push(tx);
    }

    grouped
}

/// Groups transactions by date, newest day first, as listed in the UI.
pub fn grouped_newest_first(transactions: &[Transaction]) -> Vec<(NaiveDate, Vec<&Transaction>)> {
    group_by_date(transactions).into_iter().rev().collect()
}

/// Returns unpaid bills due within `days` days of `today` (inclusive),
/// sorted by due date. A window reaching past the calendar range is
/// clamped to its end.
pub fn upcoming_bills(bills: &[Bill], today: NaiveDate, days: i64) -> Vec<&Bill> {
    let horizon = Duration::try_days(days)
        .and_then(|window| today.checked_add_signed(window))
        .unwrap_or(if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX });
    let mut upcoming: Vec<&Bill> = bills
        .iter()
        .filter(|bill| !bill.paid && bill.due_date >= today && bill.due_date <= horizon)
        .collect();
    upcoming.sort_by_key(|bill| bill.due_date);
    upcoming
}

/// Returns unpaid bills whose due date is before `today`, oldest first.
pub fn overdue_bills(bills: &[Bill], today: NaiveDate) -> Vec<&Bill> {
    let mut overdue: Vec<&Bill> = bills.iter().filter(|bill| bill.is_overdue(today)).collect();
    overdue.sort_by_key(|bill| bill.due_date);
    overdue
}
