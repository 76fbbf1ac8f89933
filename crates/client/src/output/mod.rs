//! Output formatting functions.

pub mod json;
pub mod pretty;

use serde::Serialize;

use crate::cli::OutputFormat;

/// Render `value` as JSON, or hand it to `pretty` for human-readable output.
pub fn format_output<T, P>(value: &T, format: OutputFormat, pretty: P) -> String
where
    T: Serialize,
    P: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Json => json::format_json(value),
        OutputFormat::Pretty => pretty(value),
    }
}
