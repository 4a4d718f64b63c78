//! Output formatting for taskline.
//!
//! This module provides formatters for displaying parse results in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::TasklineError;
use crate::features::nlp::ParseResult;

pub use json::*;
pub use pretty::*;

/// Format one parse result based on output format
///
/// # Errors
///
/// Returns `TasklineError::Json` if JSON serialization fails.
pub fn format_result(result: &ParseResult, format: OutputFormat) -> Result<String, TasklineError> {
    match format {
        OutputFormat::Pretty => Ok(format_result_pretty(result)),
        OutputFormat::Json => format_result_json(result),
    }
}

/// Format several parse results based on output format
///
/// # Errors
///
/// Returns `TasklineError::Json` if JSON serialization fails.
pub fn format_results(
    results: &[ParseResult],
    format: OutputFormat,
) -> Result<String, TasklineError> {
    match format {
        OutputFormat::Pretty => Ok(format_results_pretty(results)),
        OutputFormat::Json => format_results_json(results),
    }
}

/// Format the quick examples based on output format
///
/// # Errors
///
/// Returns `TasklineError::Json` if JSON serialization fails.
pub fn format_examples(examples: &[&str], format: OutputFormat) -> Result<String, TasklineError> {
    match format {
        OutputFormat::Pretty => Ok(format_examples_pretty(examples)),
        OutputFormat::Json => to_json(&examples),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::nlp::parse_on;
    use chrono::NaiveDate;

    #[test]
    fn test_format_result_json() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let result = parse_on("Buy groceries urgent #errands", today);
        let output = format_result(&result, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["residualText"], "Buy groceries");
        assert_eq!(value["priority"], "high");
        assert_eq!(value["tags"][0], "errands");
        assert_eq!(value["date"], "2024-03-15");
    }

    #[test]
    fn test_format_results_json_is_array() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let results = vec![parse_on("one", today), parse_on("two", today)];
        let output = format_results(&results, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_format_examples_json() {
        let output = format_examples(&["a", "b"], OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[1], "b");
    }
}
