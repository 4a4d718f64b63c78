//! Colored terminal output formatting for taskline.

use std::fmt::Write;

use colored::Colorize;

use crate::features::nlp::{ParseResult, Priority};

/// Format a parse result for the terminal.
#[must_use]
pub fn format_result_pretty(result: &ParseResult) -> String {
    let mut output = format!("{} {}\n", "Task:".cyan().bold(), result.residual_text.bold());

    writeln!(output, "  {} {}", "Date:".cyan(), result.date_iso()).ok();
    if let Some(time) = result.time_hh_mm() {
        writeln!(output, "  {} {time}", "Time:".cyan()).ok();
    }
    if result.priority != Priority::Medium {
        let label = match result.priority {
            Priority::High => result.priority.to_string().red().bold(),
            _ => result.priority.to_string().dimmed(),
        };
        writeln!(output, "  {} {label}", "Priority:".magenta()).ok();
    }
    if let Some(minutes) = result.duration {
        writeln!(output, "  {} {}", "Duration:".cyan(), format_minutes(minutes)).ok();
    }
    if let Some(location) = &result.location {
        writeln!(output, "  {} {location}", "Location:".blue()).ok();
    }
    if !result.tags.is_empty() {
        let tags_str: Vec<String> = result.tags.iter().map(|t| format!("#{t}")).collect();
        writeln!(output, "  {} {}", "Tags:".yellow(), tags_str.join(" ")).ok();
    }
    if let Some(category) = &result.category {
        writeln!(output, "  {} {category}", "Category:".green()).ok();
    }
    writeln!(
        output,
        "  {} {:.0}%",
        "Confidence:".dimmed(),
        result.confidence * 100.0
    )
    .ok();

    for suggestion in &result.suggestions {
        writeln!(
            output,
            "  {} {} [{}]",
            "?".yellow().bold(),
            suggestion.prompt_text,
            suggestion.options.join(" | ")
        )
        .ok();
    }

    output
}

/// Format a batch of results separated by rules.
#[must_use]
pub fn format_results_pretty(results: &[ParseResult]) -> String {
    if results.is_empty() {
        return "No input".dimmed().to_string();
    }

    let separator = format!("{}\n", "─".repeat(40).dimmed());
    results
        .iter()
        .map(format_result_pretty)
        .collect::<Vec<_>>()
        .join(separator.as_str())
}

/// Render minutes as "1h 30m", "2h" or "45m".
fn format_minutes(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

/// Format the quick examples as a numbered list.
#[must_use]
pub fn format_examples_pretty(examples: &[&str]) -> String {
    let mut output = format!("{}\n", "Try typing:".bold());
    for (i, example) in examples.iter().enumerate() {
        writeln!(output, "  {:>2}. {example}", i + 1).ok();
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::nlp::parse_on;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(45), "45m");
        assert_eq!(format_minutes(120), "2h");
        assert_eq!(format_minutes(90), "1h 30m");
    }

    #[test]
    fn test_pretty_contains_fields() {
        colored::control::set_override(false);
        let result = parse_on("Call John at 2pm tomorrow for 1 hour #work urgent", today());
        let output = format_result_pretty(&result);
        assert!(output.contains("Task: Call John"));
        assert!(output.contains("2024-03-16"));
        assert!(output.contains("14:00"));
        assert!(output.contains("high"));
        assert!(output.contains("1h"));
        assert!(output.contains("#work"));
        assert!(output.contains("call"));
        assert!(output.contains("100%"));
    }

    #[test]
    fn test_pretty_lists_suggestions() {
        colored::control::set_override(false);
        let result = parse_on("call about the deadline", today());
        let output = format_result_pretty(&result);
        assert!(output.contains("9:00 AM | 2:00 PM | 5:00 PM"));
        assert!(output.contains("High Priority | Normal"));
    }

    #[test]
    fn test_examples_numbered() {
        colored::control::set_override(false);
        let output = format_examples_pretty(&["one", "two"]);
        assert!(output.contains(" 1. one"));
        assert!(output.contains(" 2. two"));
    }
}
