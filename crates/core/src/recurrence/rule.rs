//! Recurrence rule types selected on the recurring-transaction form.
//!
//! Only the description of a rule lives here; expanding a rule into concrete
//! occurrence dates is done by the backend.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::descriptor::{nth_weekday_label, weekday_name};
use super::error::RecurrenceError;

/// How often a recurring transaction repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    /// Returns the time unit for `interval`, pluralized ("day", "weeks").
    pub fn unit_label(&self, interval: u32) -> &'static str {
        let plural = interval != 1;
        match (self, plural) {
            (Frequency::Daily, false) => "day",
            (Frequency::Daily, true) => "days",
            (Frequency::Weekly, false) => "week",
            (Frequency::Weekly, true) => "weeks",
            (Frequency::Monthly, false) => "month",
            (Frequency::Monthly, true) => "months",
            (Frequency::Yearly, false) => "year",
            (Frequency::Yearly, true) => "years",
        }
    }
}

/// Which day a monthly rule lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthlyMode {
    /// Same day of month as the start date ("on day 12").
    #[default]
    SameDay,
    /// Same weekday occurrence as the start date ("on the 2nd Tuesday").
    NthWeekday,
}

/// When a recurrence stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RecurrenceEnd {
    #[default]
    Never,
    OnDate { date: NaiveDate },
    AfterOccurrences { count: u32 },
}

/// One of the choices offered for a monthly rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyOption {
    pub mode: MonthlyMode,
    pub label: String,
}

/// Returns the two monthly choices for a rule starting on `date`.
pub fn monthly_options(date: NaiveDate) -> [MonthlyOption; 2] {
    [
        MonthlyOption {
            mode: MonthlyMode::SameDay,
            label: format!("Monthly on day {}", date.day()),
        },
        MonthlyOption {
            mode: MonthlyMode::NthWeekday,
            label: format!("Monthly on the {}", nth_weekday_label(date)),
        },
    ]
}

/// A recurrence rule as chosen by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceRule {
    pub frequency: Frequency,
    pub interval: u32,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub monthly_mode: MonthlyMode,
    #[serde(default)]
    pub end: RecurrenceEnd,
}

impl RecurrenceRule {
    /// Creates a rule that repeats every `interval` units and never ends.
    pub fn new(
        frequency: Frequency,
        interval: u32,
        start_date: NaiveDate,
    ) -> Result<Self, RecurrenceError> {
        if interval == 0 {
            return Err(RecurrenceError::ZeroInterval);
        }
        Ok(Self {
            frequency,
            interval,
            start_date,
            monthly_mode: MonthlyMode::default(),
            end: RecurrenceEnd::default(),
        })
    }

    /// Sets the monthly mode. Ignored by non-monthly frequencies.
    pub fn with_monthly_mode(mut self, mode: MonthlyMode) -> Self {
        self.monthly_mode = mode;
        self
    }

    /// Sets the end condition.
    pub fn ending(mut self, end: RecurrenceEnd) -> Result<Self, RecurrenceError> {
        match end {
            RecurrenceEnd::OnDate { date } if date < self.start_date => {
                return Err(RecurrenceError::EndBeforeStart);
            }
            RecurrenceEnd::AfterOccurrences { count: 0 } => {
                return Err(RecurrenceError::ZeroOccurrences);
            }
            _ => {}
        }
        self.end = end;
        Ok(self)
    }

    /// Describes the rule, e.g. "Every 2 months on the 2nd Tuesday, until 2024-12-31".
    pub fn describe(&self) -> String {
        let every = if self.interval == 1 {
            format!("Every {}", self.frequency.unit_label(1))
        } else {
            format!(
                "Every {} {}",
                self.interval,
                self.frequency.unit_label(self.interval)
            )
        };

        let anchor = match self.frequency {
            Frequency::Daily => String::new(),
            Frequency::Weekly => format!(" on {}", weekday_name(self.start_date)),
            Frequency::Monthly => match self.monthly_mode {
                MonthlyMode::SameDay => format!(" on day {}", self.start_date.day()),
                MonthlyMode::NthWeekday => {
                    format!(" on the {}", nth_weekday_label(self.start_date))
                }
            },
            Frequency::Yearly => format!(" on {}", self.start_date.format("%B %-d")),
        };

        let until = match self.end {
            RecurrenceEnd::Never => String::new(),
            RecurrenceEnd::OnDate { date } => format!(", until {}", date),
            RecurrenceEnd::AfterOccurrences { count: 1 } => ", once".to_string(),
            RecurrenceEnd::AfterOccurrences { count } => format!(", {} times", count),
        };

        format!("{}{}{}", every, anchor, until)
    }
}
