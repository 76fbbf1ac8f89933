mod descriptor;
mod error;
mod rule;

pub use descriptor::{
    nth_weekday_label, ordinal, to_display_date, week_of_month, week_of_month_label,
    weekday_name, WeekOfMonthLabel,
};
pub use error::RecurrenceError;
pub use rule::{
    monthly_options, Frequency, MonthlyMode, MonthlyOption, RecurrenceEnd, RecurrenceRule,
};
