//! Parse command implementation.
//!
//! This module implements `taskline parse` for one-off and batch parsing.

use std::io::BufRead;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::cli::args::{OutputFormat, ParseArgs};
use crate::core::datetime::parse_iso_date;
use crate::core::{Clock, FixedClock, SystemClock};
use crate::error::TasklineError;
use crate::features::nlp::{ParseResult, ParserOptions, TextCommandParser};
use crate::output::{format_result, format_results};

/// Resolve the `--today` flag, falling back to the system clock.
///
/// # Errors
///
/// Returns `TasklineError::InvalidDate` if the flag is not `YYYY-MM-DD`.
pub fn resolve_today(flag: Option<&str>) -> Result<NaiveDate, TasklineError> {
    match flag {
        Some(raw) => parse_iso_date(raw).ok_or_else(|| TasklineError::InvalidDate(raw.to_string())),
        None => Ok(SystemClock.today()),
    }
}

/// Execute the parse command.
///
/// Text arguments are parsed as a single task. Without them, every
/// non-empty line from `input` is parsed as its own task.
///
/// # Errors
///
/// Returns an error if `--today` is invalid, stdin cannot be read, or
/// output formatting fails.
pub fn parse<R: BufRead>(
    args: ParseArgs,
    mut options: ParserOptions,
    format: OutputFormat,
    input: R,
) -> Result<String, TasklineError> {
    if args.no_suggestions {
        options.suggestions = false;
    }

    // One date for the whole batch so lines parsed around midnight agree.
    let today = resolve_today(args.today.as_deref())?;
    let parser = TextCommandParser::with_clock(FixedClock(today)).with_options(options);
    debug!(%today, ?options, "parser ready");

    if !args.text.is_empty() {
        let text = args.text.join(" ");
        let result = parser.parse(&text);
        info!(confidence = result.confidence, "parsed task");
        return format_result(&result, format);
    }

    let results = parse_lines(&parser, input)?;
    info!(count = results.len(), "parsed tasks from stdin");
    format_results(&results, format)
}

fn parse_lines<C: Clock, R: BufRead>(
    parser: &TextCommandParser<C>,
    input: R,
) -> Result<Vec<ParseResult>, TasklineError> {
    let mut results = Vec::new();
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        results.push(parser.parse(&line));
    }
    Ok(results)
}
