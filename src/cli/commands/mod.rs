//! Command implementations for taskline.
//!
//! This module contains the implementation of all CLI commands.

mod config;
mod parse;

pub use config::config;
pub use parse::{parse, resolve_today};

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::{Cli, ExamplesArgs, OutputFormat};
use crate::error::TasklineError;
use crate::features::nlp::{quick_examples, ParserOptions, TextCommandParser};
use crate::core::FixedClock;
use crate::output::{format_examples, format_results};

/// Execute examples command
///
/// # Errors
///
/// Returns an error if `--today` is invalid or output formatting fails.
pub fn examples(
    args: &ExamplesArgs,
    options: ParserOptions,
    format: OutputFormat,
) -> Result<String, TasklineError> {
    let examples = quick_examples();
    if !args.parse {
        return format_examples(examples, format);
    }

    let today = resolve_today(args.today.as_deref())?;
    let parser = TextCommandParser::with_clock(FixedClock(today)).with_options(options);
    let results: Vec<_> = examples.iter().map(|e| parser.parse(e)).collect();
    format_results(&results, format)
}

/// Execute completions command
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn completions(shell: Shell) -> Result<String, TasklineError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "taskline", &mut buf);
    String::from_utf8(buf).map_err(|e| {
        TasklineError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examples_plain_json() {
        let args = ExamplesArgs {
            parse: false,
            today: None,
        };
        let output = examples(&args, ParserOptions::default(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(quick_examples().len()));
    }

    #[test]
    fn test_examples_parsed() {
        let args = ExamplesArgs {
            parse: true,
            today: Some("2024-03-15".to_string()),
        };
        let output = examples(&args, ParserOptions::default(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["residualText"], "Call John");
        assert_eq!(value[0]["time"], "14:00");
    }

    #[test]
    fn test_completions_bash() {
        let script = completions(Shell::Bash).unwrap();
        assert!(script.contains("taskline"));
    }
}
