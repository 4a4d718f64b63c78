//! Result types produced by the text command parser.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize, Serializer};

/// Priority levels for tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Flagged by words like "urgent" or "asap".
    High,
    /// No priority keyword was found.
    #[default]
    Medium,
    /// Flagged by words like "later" or "low priority".
    Low,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        })
    }
}

/// Which field a suggestion offers to fill in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    /// No time was recognized for something that looks like a meeting.
    Time,
    /// The date fell back to today without the user saying so.
    Date,
    /// The text sounds pressing but no priority was set.
    Priority,
}

impl std::fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Time => "time",
            Self::Date => "date",
            Self::Priority => "priority",
        })
    }
}

/// A quick-pick hint for refining a field. Never applied automatically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// Field the suggestion refers to.
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    /// Question shown to the user.
    pub prompt_text: String,
    /// Choices offered, in display order.
    pub options: Vec<String>,
}

impl Suggestion {
    pub(crate) fn new(kind: SuggestionKind, prompt_text: &str, options: &[&str]) -> Self {
        Self {
            kind,
            prompt_text: prompt_text.to_string(),
            options: options.iter().map(|o| (*o).to_string()).collect(),
        }
    }
}

/// Structured task intent extracted from one line of free text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    /// Input with every recognized fragment removed.
    pub residual_text: String,
    /// Time of day, if one was recognized.
    #[serde(serialize_with = "serialize_hh_mm")]
    pub time: Option<NaiveTime>,
    /// Resolved date; today when no date expression was found.
    pub date: NaiveDate,
    /// Task priority.
    pub priority: Priority,
    /// Duration in minutes.
    pub duration: Option<u32>,
    /// Free text following "at", "in" or "@".
    pub location: Option<String>,
    /// Hashtags without the leading `#`, in input order.
    pub tags: Vec<String>,
    /// Lowercase category keyword.
    pub category: Option<String>,
    /// Hints for fields that could not be settled.
    pub suggestions: Vec<Suggestion>,
    /// Heuristic score in `[0.5, 1.0]`.
    pub confidence: f64,
}

impl ParseResult {
    /// Time formatted as 24-hour `HH:MM`.
    #[must_use]
    pub fn time_hh_mm(&self) -> Option<String> {
        self.time.map(|t| t.format("%H:%M").to_string())
    }

    /// Date formatted as `YYYY-MM-DD`.
    #[must_use]
    pub fn date_iso(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

fn serialize_hh_mm<S: Serializer>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error> {
    match time {
        Some(t) => serializer.serialize_str(&t.format("%H:%M").to_string()),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ParseResult {
        ParseResult {
            residual_text: "Call John".to_string(),
            time: NaiveTime::from_hms_opt(14, 0, 0),
            date: NaiveDate::from_ymd_opt(2024, 3, 16).unwrap(),
            priority: Priority::High,
            duration: Some(30),
            location: None,
            tags: vec!["work".to_string()],
            category: Some("call".to_string()),
            suggestions: vec![Suggestion::new(
                SuggestionKind::Priority,
                "Set a priority?",
                &["High Priority", "Normal"],
            )],
            confidence: 1.0,
        }
    }

    #[test]
    fn test_priority_display() {
        assert_eq!(Priority::High.to_string(), "high");
        assert_eq!(Priority::Medium.to_string(), "medium");
        assert_eq!(Priority::Low.to_string(), "low");
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn test_formatted_fields() {
        let result = sample();
        assert_eq!(result.time_hh_mm(), Some("14:00".to_string()));
        assert_eq!(result.date_iso(), "2024-03-16");
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["residualText"], "Call John");
        assert_eq!(value["time"], "14:00");
        assert_eq!(value["date"], "2024-03-16");
        assert_eq!(value["priority"], "high");
        assert_eq!(value["duration"], 30);
        assert!(value["location"].is_null());
        assert_eq!(value["suggestions"][0]["type"], "priority");
        assert_eq!(value["suggestions"][0]["promptText"], "Set a priority?");
        assert_eq!(value["suggestions"][0]["options"][1], "Normal");
    }

    #[test]
    fn test_serializes_missing_time_as_null() {
        let mut result = sample();
        result.time = None;
        let value = serde_json::to_value(result).unwrap();
        assert!(value["time"].is_null());
    }
}
