use thiserror::Error;

/// Errors that can occur when building a recurrence rule.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecurrenceError {
    #[error("Recurrence interval must be at least 1")]
    ZeroInterval,
    #[error("Recurrence must end on or after its start date")]
    EndBeforeStart,
    #[error("Recurrence must run for at least one occurrence")]
    ZeroOccurrences,
}
