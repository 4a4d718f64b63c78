//! Tunable resolution policies for the parser.

use serde::{Deserialize, Serialize};

/// How an explicit clock time and a time-of-day word interact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimePrecedence {
    /// "at 3pm" beats "evening" regardless of position.
    #[default]
    Explicit,
    /// Whichever pass runs later wins, so time-of-day words overwrite.
    LastMatch,
}

/// What "this month" resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThisMonth {
    /// Last day of the current month.
    #[default]
    EndOfMonth,
    /// Tomorrow, matching older versions of the quick-add box.
    Tomorrow,
}

/// Options controlling field resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Precedence between explicit times and time-of-day words.
    pub time_precedence: TimePrecedence,
    /// Resolution of "this month".
    pub this_month: ThisMonth,
    /// Whether to generate suggestions.
    pub suggestions: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            time_precedence: TimePrecedence::default(),
            this_month: ThisMonth::default(),
            suggestions: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ParserOptions::default();
        assert_eq!(options.time_precedence, TimePrecedence::Explicit);
        assert_eq!(options.this_month, ThisMonth::EndOfMonth);
        assert!(options.suggestions);
    }

    #[test]
    fn test_kebab_case_yaml() {
        let options: ParserOptions =
            serde_yaml::from_str("time_precedence: last-match\nthis_month: tomorrow\n").unwrap();
        assert_eq!(options.time_precedence, TimePrecedence::LastMatch);
        assert_eq!(options.this_month, ThisMonth::Tomorrow);
        assert!(options.suggestions);
    }
}
