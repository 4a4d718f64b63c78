//! JSON output formatting for taskline.

use serde::Serialize;

use crate::error::TasklineError;
use crate::features::nlp::ParseResult;

/// Format a single parse result as JSON.
///
/// # Errors
///
/// Returns `TasklineError::Json` if serialization fails.
pub fn format_result_json(result: &ParseResult) -> Result<String, TasklineError> {
    to_json(result)
}

/// Format a batch of parse results as a JSON array.
///
/// # Errors
///
/// Returns `TasklineError::Json` if serialization fails.
pub fn format_results_json(results: &[ParseResult]) -> Result<String, TasklineError> {
    to_json(&results)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `TasklineError::Json` if serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, TasklineError> {
    Ok(serde_json::to_string_pretty(value)?)
}
