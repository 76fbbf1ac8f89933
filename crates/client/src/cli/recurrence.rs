//! Recurrence label commands. These never touch the network.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use walletwise_core::recurrence::{
    Frequency as CoreFrequency, RecurrenceEnd, RecurrenceError, RecurrenceRule,
};

/// Recurrence commands.
#[derive(Debug, Parser)]
pub struct RecurrenceCommand {
    #[command(subcommand)]
    pub action: RecurrenceAction,
}

/// CLI frequency (with clap ValueEnum).
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl From<Frequency> for CoreFrequency {
    fn from(f: Frequency) -> Self {
        match f {
            Frequency::Daily => CoreFrequency::Daily,
            Frequency::Weekly => CoreFrequency::Weekly,
            Frequency::Monthly => CoreFrequency::Monthly,
            Frequency::Yearly => CoreFrequency::Yearly,
        }
    }
}

/// Rule options shared by commands that build a recurrence rule.
#[derive(Debug, Clone, Args)]
pub struct RuleArgs {
    /// Start date (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// Repeat frequency.
    #[arg(long, value_enum, default_value = "monthly")]
    pub frequency: Frequency,
    /// Repeat every N units.
    #[arg(long, default_value = "1")]
    pub interval: u32,
    /// For monthly rules, repeat on the same weekday occurrence.
    #[arg(long)]
    pub nth_weekday: bool,
    /// Last date (YYYY-MM-DD).
    #[arg(long, conflicts_with = "count")]
    pub until: Option<NaiveDate>,
    /// Number of occurrences.
    #[arg(long)]
    pub count: Option<u32>,
}

impl RuleArgs {
    /// Builds the rule, using `today` when no start date was given.
    pub fn to_rule(&self, today: NaiveDate) -> Result<RecurrenceRule, RecurrenceError> {
        use walletwise_core::recurrence::MonthlyMode;

        let start = self.date.unwrap_or(today);
        let mode = if self.nth_weekday {
            MonthlyMode::NthWeekday
        } else {
            MonthlyMode::SameDay
        };
        let end = match (self.until, self.count) {
            (Some(date), _) => RecurrenceEnd::OnDate { date },
            (None, Some(count)) => RecurrenceEnd::AfterOccurrences { count },
            (None, None) => RecurrenceEnd::Never,
        };

        RecurrenceRule::new(self.frequency.into(), self.interval, start)?
            .with_monthly_mode(mode)
            .ending(end)
    }
}

/// Available recurrence actions.
#[derive(Debug, Subcommand)]
pub enum RecurrenceAction {
    /// Show the "Nth weekday" label for a date.
    Label {
        /// Date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show the monthly choices for a start date.
    Options {
        /// Date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Describe a recurrence rule.
    Describe(RuleArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use walletwise_core::recurrence::MonthlyMode;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn args() -> RuleArgs {
        RuleArgs {
            date: None,
            frequency: Frequency::Monthly,
            interval: 1,
            nth_weekday: false,
            until: None,
            count: None,
        }
    }

    #[test]
    fn test_rule_defaults_to_today() {
        let rule = args().to_rule(date(2024, 3, 12)).unwrap();

        assert_eq!(rule.start_date, date(2024, 3, 12));
        assert_eq!(rule.monthly_mode, MonthlyMode::SameDay);
        assert_eq!(rule.end, RecurrenceEnd::Never);
    }

    #[test]
    fn test_rule_with_nth_weekday_and_count() {
        let rule = RuleArgs {
            nth_weekday: true,
            count: Some(3),
            ..args()
        }
        .to_rule(date(2024, 3, 12))
        .unwrap();

        assert_eq!(
            rule.describe(),
            "Every month on the 2nd Tuesday, 3 times"
        );
    }

    #[test]
    fn test_rule_rejects_zero_interval() {
        let result = RuleArgs {
            interval: 0,
            ..args()
        }
        .to_rule(date(2024, 3, 12));

        assert_eq!(result, Err(RecurrenceError::ZeroInterval));
    }
}
