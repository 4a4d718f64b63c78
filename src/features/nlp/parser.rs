//! Natural language task parser.
//!
//! Parses strings like "Call John at 2pm tomorrow #work" into a
//! [`ParseResult`]. Every pass runs against the original input; the parser
//! then resolves fields in pass order, strips matched fragments from the
//! title and scores the result.

use std::ops::Range;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::options::{ParserOptions, TimePrecedence};
use super::passes::{self, Extraction, Pass, PassContext, Value};
use super::types::{ParseResult, Priority, Suggestion, SuggestionKind};
use crate::core::{Clock, SystemClock};

static EXPLICIT_DAY_HINT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)today|tonight|this").unwrap_or_else(|e| panic!("Invalid day hint regex: {e}"))
});

static PRESSING_HINT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)deadline|due|urgent|important")
        .unwrap_or_else(|e| panic!("Invalid pressing hint regex: {e}"))
});

const QUICK_EXAMPLES: &[&str] = &[
    "Call John at 2pm tomorrow",
    "Buy groceries urgent",
    "Meeting with team this Friday at 10am",
    "Workout at gym 6pm #fitness",
    "Review quarterly report next week #work",
    "Dentist appointment 3/15 at 9:30am",
    "Read for 30 minutes in the evening",
    "Plan vacation next month low priority",
    "Email Sarah about the project deadline",
    "Study for exam December 10 #school",
];

/// Example inputs for UI affordances such as placeholder rotation.
#[must_use]
pub const fn quick_examples() -> &'static [&'static str] {
    QUICK_EXAMPLES
}

/// Parse `input` against the system clock with default options.
///
/// # Examples
///
/// ```
/// use taskline::features::nlp::{parse, Priority};
///
/// let result = parse("Buy groceries urgent #errands");
/// assert_eq!(result.priority, Priority::High);
/// assert_eq!(result.tags, vec!["errands"]);
/// assert!(result.residual_text.contains("Buy groceries"));
/// ```
#[must_use]
pub fn parse(input: &str) -> ParseResult {
    TextCommandParser::new().parse(input)
}

/// Parse `input` as if today were `today`, with default options.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use taskline::features::nlp::parse_on;
///
/// let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// let result = parse_on("Call John at 2pm tomorrow", today);
/// assert_eq!(result.time_hh_mm().as_deref(), Some("14:00"));
/// assert_eq!(result.date_iso(), "2024-03-16");
/// assert_eq!(result.residual_text, "Call John");
/// ```
#[must_use]
pub fn parse_on(input: &str, today: NaiveDate) -> ParseResult {
    resolve(input, today, &ParserOptions::default())
}

/// Stateless parser bound to a clock and a set of resolution options.
#[derive(Debug, Clone, Default)]
pub struct TextCommandParser<C = SystemClock> {
    clock: C,
    options: ParserOptions,
}

impl TextCommandParser<SystemClock> {
    /// Parser reading the local date from the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> TextCommandParser<C> {
    /// Parser reading "today" from `clock`.
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            options: ParserOptions::default(),
        }
    }

    /// Replace the resolution options.
    #[must_use]
    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    /// The options in effect.
    #[must_use]
    pub const fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse one line of task text.
    ///
    /// The clock is read once, so every relative expression in the line
    /// resolves against the same day.
    #[must_use]
    pub fn parse(&self, input: &str) -> ParseResult {
        let today = self.clock.today();
        resolve(input, today, &self.options)
    }
}

/// Fields settled from the extractions before scoring.
#[derive(Debug, Default)]
struct Fields {
    time: Option<chrono::NaiveTime>,
    explicit_time: bool,
    date: Option<NaiveDate>,
    priority: Priority,
    duration: Option<u32>,
    location: Option<String>,
    tags: Vec<String>,
    category: Option<String>,
}

impl Fields {
    fn apply(&mut self, extraction: &Extraction<'_>, precedence: TimePrecedence) {
        match &extraction.value {
            Value::Time(time) => {
                let vague = extraction.pass == Pass::TimeOfDay;
                if vague && self.explicit_time && precedence == TimePrecedence::Explicit {
                    debug!(text = extraction.text, "explicit time already set, ignoring");
                    return;
                }
                self.time = Some(*time);
                self.explicit_time |= !vague;
            },
            Value::Date(date) => self.date = Some(*date),
            Value::Priority(priority) => self.priority = *priority,
            Value::Duration(minutes) => self.duration = Some(*minutes),
            Value::Location(place) => self.location = Some(place.clone()),
            Value::Tag(tag) => self.tags.push(tag.clone()),
            Value::Category(category) => self.category = Some(category.clone()),
        }
    }
}

fn resolve(input: &str, today: NaiveDate, options: &ParserOptions) -> ParseResult {
    let ctx = PassContext {
        today,
        this_month: options.this_month,
    };

    let extractions: Vec<Extraction<'_>> = Pass::ORDER
        .iter()
        .flat_map(|&pass| passes::run(pass, input, &ctx))
        .collect();

    let mut fields = Fields::default();
    for extraction in &extractions {
        debug!(
            pass = ?extraction.pass,
            start = extraction.span.start,
            end = extraction.span.end,
            text = extraction.text,
            "matched"
        );
        fields.apply(extraction, options.time_precedence);
    }

    let residual_text = residual(input, &extractions);
    let date = fields.date.unwrap_or(today);

    let suggestions = if options.suggestions {
        suggest(input, &residual_text, &fields, date, today)
    } else {
        Vec::new()
    };

    let confidence = confidence(&fields, date, today);

    ParseResult {
        residual_text,
        time: fields.time,
        date,
        priority: fields.priority,
        duration: fields.duration,
        location: fields.location,
        tags: fields.tags,
        category: fields.category,
        suggestions,
        confidence,
    }
}

/// Cut every consumed span out of `input`, then collapse whitespace.
///
/// Spans are merged first so overlapping matches are removed once.
fn residual(input: &str, extractions: &[Extraction<'_>]) -> String {
    let mut spans: Vec<Range<usize>> = extractions
        .iter()
        .filter(|e| e.pass.consumes_text())
        .map(|e| e.span.clone())
        .collect();
    spans.sort_by_key(|span| span.start);

    let mut kept = String::with_capacity(input.len());
    let mut cursor = 0;
    for span in spans {
        if span.start > cursor {
            kept.push_str(&input[cursor..span.start]);
            kept.push(' ');
        }
        cursor = cursor.max(span.end);
    }
    kept.push_str(&input[cursor..]);

    let collapsed = kept.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        input.to_string()
    } else {
        collapsed
    }
}

fn suggest(
    input: &str,
    residual_text: &str,
    fields: &Fields,
    date: NaiveDate,
    today: NaiveDate,
) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    let residual_lower = residual_text.to_lowercase();
    if fields.time.is_none() && (residual_lower.contains("meet") || residual_lower.contains("call")) {
        suggestions.push(Suggestion::new(
            SuggestionKind::Time,
            "What time works?",
            &["9:00 AM", "2:00 PM", "5:00 PM"],
        ));
    }

    if date == today && !EXPLICIT_DAY_HINT.is_match(input) {
        suggestions.push(Suggestion::new(
            SuggestionKind::Date,
            "When should this happen?",
            &["Today", "Tomorrow", "This Week"],
        ));
    }

    if PRESSING_HINT.is_match(input) && fields.priority == Priority::Medium {
        suggestions.push(Suggestion::new(
            SuggestionKind::Priority,
            "Is this high priority?",
            &["High Priority", "Normal"],
        ));
    }

    suggestions
}

/// Score in tenths so the result is exact: 5 base, +2 time, +1 for each of
/// date, priority, category and tags.
fn confidence(fields: &Fields, date: NaiveDate, today: NaiveDate) -> f64 {
    let mut tenths: u8 = 5;
    if fields.time.is_some() {
        tenths += 2;
    }
    if date != today {
        tenths += 1;
    }
    if fields.priority != Priority::Medium {
        tenths += 1;
    }
    if fields.category.is_some() {
        tenths += 1;
    }
    if !fields.tags.is_empty() {
        tenths += 1;
    }
    f64::from(tenths.min(10)) / 10.0
}
