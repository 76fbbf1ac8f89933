//! Human-readable labels for monthly recurrence choices.
//!
//! Pure functions over [`NaiveDate`]. Callers normalize timestamps to the
//! display offset (see [`to_display_date`]) before asking for a label.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// The "Nth weekday" position of a date within its month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekOfMonthLabel {
    pub week_of_month: u32,
    pub weekday_name: String,
}

impl WeekOfMonthLabel {
    /// Renders the label as "2nd Tuesday".
    pub fn label(&self) -> String {
        format!("{} {}", ordinal(self.week_of_month), self.weekday_name)
    }
}

/// Converts a UTC timestamp to the calendar date seen at `offset`.
pub fn to_display_date(timestamp: DateTime<Utc>, offset: FixedOffset) -> NaiveDate {
    timestamp.with_timezone(&offset).date_naive()
}

/// Returns the 1-based occurrence of `date`'s weekday within its month.
///
/// Weeks are counted from the 1st of the month: days 1-7 are week 1, days
/// 8-14 week 2, and so on. The result is always in `1..=5`.
pub fn week_of_month(date: NaiveDate) -> u32 {
    date.day().div_ceil(7)
}

/// Returns the English name of `date`'s weekday.
pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Appends the English ordinal suffix to `n` ("1st", "12th", "23rd").
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 100, n % 10) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

/// Computes the week-of-month position and weekday name of `date`.
pub fn week_of_month_label(date: NaiveDate) -> WeekOfMonthLabel {
    WeekOfMonthLabel {
        week_of_month: week_of_month(date),
        weekday_name: weekday_name(date).to_string(),
    }
}

/// Returns the "Nth weekday" label for `date`, e.g. "2nd Tuesday".
pub fn nth_weekday_label(date: NaiveDate) -> String {
    week_of_month_label(date).label()
}
