//! Extraction passes.
//!
//! Each pass scans the original input independently and reports typed
//! extractions. Passes never consume each other's text; overlap is settled
//! later by the parser's resolution policy.

use std::ops::Range;

use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::options::ThisMonth;
use super::types::Priority;
use crate::core::datetime::{
    clock_time, first_of_next_month, last_of_month, month_from_name, next_weekday, numeric_date,
    offset_days, upcoming_month_day, weekday_from_name, Meridiem,
};

/// One category of pattern, listed in processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    ExplicitTime,
    TimeOfDay,
    RelativeDay,
    Weekday,
    RelativePeriod,
    NumericDate,
    MonthDay,
    HighPriority,
    LowPriority,
    Duration,
    Location,
    Hashtag,
    Category,
}

impl Pass {
    /// All passes in the order they are applied.
    pub const ORDER: [Self; 13] = [
        Self::ExplicitTime,
        Self::TimeOfDay,
        Self::RelativeDay,
        Self::Weekday,
        Self::RelativePeriod,
        Self::NumericDate,
        Self::MonthDay,
        Self::HighPriority,
        Self::LowPriority,
        Self::Duration,
        Self::Location,
        Self::Hashtag,
        Self::Category,
    ];

    /// Whether matched text is removed from the residual title.
    ///
    /// Category keywords describe the task ("Call John") and stay in it.
    #[must_use]
    pub const fn consumes_text(self) -> bool {
        !matches!(self, Self::Category)
    }
}

/// Value recognized by a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Time(NaiveTime),
    Date(NaiveDate),
    Priority(Priority),
    Duration(u32),
    Location(String),
    Tag(String),
    Category(String),
}

/// A single recognized fragment of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction<'a> {
    pub pass: Pass,
    pub span: Range<usize>,
    pub text: &'a str,
    pub value: Value,
}

/// Inputs every pass may depend on besides the text.
#[derive(Debug, Clone, Copy)]
pub struct PassContext {
    pub today: NaiveDate,
    pub this_month: ThisMonth,
}

fn compile(name: &str, pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("Invalid {name} regex: {e}"))
}

static EXPLICIT_TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // "at 3", "at 3pm", "at 3:30 pm" or a bare "15:30" / "3:30pm"
    compile(
        "explicit time",
        r"(?i)\bat\s+(\d{1,2})(?::(\d{2}))?\s*(am|pm)?\b|\b(\d{1,2}):(\d{2})\s*(am|pm)?\b",
    )
});

static TIME_OF_DAY_PATTERN: Lazy<Regex> =
    Lazy::new(|| compile("time of day", r"(?i)\b(morning|afternoon|evening|night)\b"));

static RELATIVE_DAY_PATTERN: Lazy<Regex> =
    Lazy::new(|| compile("relative day", r"(?i)\b(yesterday|today|tomorrow)\b"));

static WEEKDAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    compile(
        "weekday",
        r"(?i)\b(monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b",
    )
});

static RELATIVE_PERIOD_PATTERN: Lazy<Regex> =
    Lazy::new(|| compile("relative period", r"(?i)\b(next|this)\s+(week|month)\b"));

static NUMERIC_DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    compile("numeric date", r"\b(\d{1,2})/(\d{1,2})(?:/(\d{4}|\d{2}))?\b")
});

static MONTH_DAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    compile(
        "month day",
        r"(?i)\b(january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sept|sep|oct|nov|dec)\.?\s+(\d{1,2})(?:st|nd|rd|th)?\b",
    )
});

static HIGH_PRIORITY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    compile(
        "high priority",
        r"(?i)\b(?:urgent|important|high\s+priority|asap)\b|!!",
    )
});

static LOW_PRIORITY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    compile(
        "low priority",
        r"(?i)\b(?:low\s+priority|later|when\s+possible)\b",
    )
});

static DURATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    compile(
        "duration",
        r"(?i)\b(?:for|takes|duration)\s+(\d+)\s*(hours?|hrs?|minutes?|mins?)\b",
    )
});

static LOCATION_PREPOSITION_PATTERN: Lazy<Regex> =
    Lazy::new(|| compile("location preposition", r"(?i)\b(?:at|in)\s+|@\s*"));

static LOCATION_WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| compile("location word", r"^[\p{L}\d][\p{L}\d'&-]*"));

static BARE_TIME_PATTERN: Lazy<Regex> =
    Lazy::new(|| compile("bare time", r"(?i)^\d{1,2}(?::\d{2})?(?:am|pm)?$"));

static HASHTAG_PATTERN: Lazy<Regex> = Lazy::new(|| compile("hashtag", r"#(\w+)"));

static CATEGORY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    compile(
        "category",
        r"(?i)\b(meeting|call|email|review|research|buy|read|write|plan|study|exercise|workout|appointment|deadline)\b",
    )
});

/// Words that end a location phrase because another pass owns them.
const LOCATION_STOP_WORDS: &[&str] = &[
    "morning", "afternoon", "evening", "night", "tonight", "noon", "midnight",
    "yesterday", "today", "tomorrow",
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
    "next", "this",
    "january", "february", "march", "april", "may", "june", "july", "august",
    "september", "october", "november", "december",
    "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
    "urgent", "important", "high", "low", "asap", "later", "when",
    "for", "takes", "duration",
    "at", "in", "on", "with", "by", "from", "to",
];

const ARTICLES: &[&str] = &["the", "a", "an"];

/// Run one pass over `input`.
#[must_use]
pub fn run<'a>(pass: Pass, input: &'a str, ctx: &PassContext) -> Vec<Extraction<'a>> {
    match pass {
        Pass::ExplicitTime => scan(pass, &EXPLICIT_TIME_PATTERN, input, explicit_time),
        Pass::TimeOfDay => scan(pass, &TIME_OF_DAY_PATTERN, input, time_of_day),
        Pass::RelativeDay => scan(pass, &RELATIVE_DAY_PATTERN, input, |c| relative_day(c, ctx)),
        Pass::Weekday => scan(pass, &WEEKDAY_PATTERN, input, |c| weekday(c, ctx)),
        Pass::RelativePeriod => {
            scan(pass, &RELATIVE_PERIOD_PATTERN, input, |c| relative_period(c, ctx))
        },
        Pass::NumericDate => scan(pass, &NUMERIC_DATE_PATTERN, input, |c| explicit_date(c, ctx)),
        Pass::MonthDay => scan(pass, &MONTH_DAY_PATTERN, input, |c| month_day(c, ctx)),
        Pass::HighPriority => scan(pass, &HIGH_PRIORITY_PATTERN, input, |_| {
            Some(Value::Priority(Priority::High))
        }),
        Pass::LowPriority => scan(pass, &LOW_PRIORITY_PATTERN, input, |_| {
            Some(Value::Priority(Priority::Low))
        }),
        Pass::Duration => scan(pass, &DURATION_PATTERN, input, duration),
        Pass::Location => locations(input),
        Pass::Hashtag => scan(pass, &HASHTAG_PATTERN, input, |c| {
            c.get(1).map(|m| Value::Tag(m.as_str().to_string()))
        }),
        Pass::Category => scan(pass, &CATEGORY_PATTERN, input, |c| {
            c.get(1).map(|m| Value::Category(m.as_str().to_lowercase()))
        }),
    }
}

/// Collect every match of `pattern` whose captures resolve to a value.
fn scan<'a, F>(pass: Pass, pattern: &Regex, input: &'a str, mut resolve: F) -> Vec<Extraction<'a>>
where
    F: FnMut(&Captures<'a>) -> Option<Value>,
{
    pattern
        .captures_iter(input)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let value = resolve(&caps)?;
            Some(Extraction {
                pass,
                span: whole.range(),
                text: whole.as_str(),
                value,
            })
        })
        .collect()
}

fn number<T: std::str::FromStr>(caps: &Captures<'_>, group: usize) -> Option<T> {
    caps.get(group).and_then(|m| m.as_str().parse().ok())
}

fn explicit_time(caps: &Captures<'_>) -> Option<Value> {
    // Groups 1-3 belong to the "at ..." form, 4-6 to the bare "H:MM" form.
    let (hour_group, minute_group, meridiem_group) = if caps.get(1).is_some() {
        (1, 2, 3)
    } else {
        (4, 5, 6)
    };
    let hour: u32 = number(caps, hour_group)?;
    let minute: u32 = match caps.get(minute_group) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    let meridiem = caps
        .get(meridiem_group)
        .and_then(|m| Meridiem::from_str_loose(m.as_str()));
    clock_time(hour, minute, meridiem).map(Value::Time)
}

fn time_of_day(caps: &Captures<'_>) -> Option<Value> {
    let hour = match caps.get(1)?.as_str().to_ascii_lowercase().as_str() {
        "morning" => 9,
        "afternoon" => 14,
        "evening" => 18,
        "night" => 20,
        _ => return None,
    };
    NaiveTime::from_hms_opt(hour, 0, 0).map(Value::Time)
}

fn relative_day(caps: &Captures<'_>, ctx: &PassContext) -> Option<Value> {
    let offset = match caps.get(1)?.as_str().to_ascii_lowercase().as_str() {
        "yesterday" => -1,
        "today" => 0,
        "tomorrow" => 1,
        _ => return None,
    };
    offset_days(ctx.today, offset).map(Value::Date)
}

fn weekday(caps: &Captures<'_>, ctx: &PassContext) -> Option<Value> {
    let day = weekday_from_name(caps.get(1)?.as_str())?;
    next_weekday(ctx.today, day).map(Value::Date)
}

fn relative_period(caps: &Captures<'_>, ctx: &PassContext) -> Option<Value> {
    let which = caps.get(1)?.as_str().to_ascii_lowercase();
    let unit = caps.get(2)?.as_str().to_ascii_lowercase();
    let date = match (which.as_str(), unit.as_str()) {
        ("next", "week") => offset_days(ctx.today, 7),
        ("this", "week") => next_weekday(ctx.today, chrono::Weekday::Mon),
        ("next", "month") => first_of_next_month(ctx.today),
        ("this", "month") => match ctx.this_month {
            ThisMonth::EndOfMonth => last_of_month(ctx.today),
            ThisMonth::Tomorrow => offset_days(ctx.today, 1),
        },
        _ => None,
    };
    date.map(Value::Date)
}

fn explicit_date(caps: &Captures<'_>, ctx: &PassContext) -> Option<Value> {
    let month: u32 = number(caps, 1)?;
    let day: u32 = number(caps, 2)?;
    let year: Option<i32> = match caps.get(3) {
        Some(m) => Some(m.as_str().parse().ok()?),
        None => None,
    };
    numeric_date(ctx.today, month, day, year).map(Value::Date)
}

fn month_day(caps: &Captures<'_>, ctx: &PassContext) -> Option<Value> {
    let month = month_from_name(caps.get(1)?.as_str())?;
    let day: u32 = number(caps, 2)?;
    upcoming_month_day(ctx.today, month, day).map(Value::Date)
}

fn duration(caps: &Captures<'_>) -> Option<Value> {
    let amount: u32 = number(caps, 1)?;
    let unit = caps.get(2)?.as_str().to_ascii_lowercase();
    let minutes = if unit.starts_with('h') {
        amount.checked_mul(60)?
    } else {
        amount
    };
    Some(Value::Duration(minutes))
}

fn is_bare_time(word: &str) -> bool {
    BARE_TIME_PATTERN.is_match(word)
}

/// Find "at <place>", "in <place>" and "@place" phrases.
///
/// A phrase whose first word is a clock time ("at 3pm") is not a location.
fn locations(input: &str) -> Vec<Extraction<'_>> {
    LOCATION_PREPOSITION_PATTERN
        .find_iter(input)
        .filter(|prep| {
            // "@" only counts at the start of a word, not inside an address
            !prep.as_str().starts_with('@')
                || input[..prep.start()]
                    .chars()
                    .next_back()
                    .map_or(true, char::is_whitespace)
        })
        .filter_map(|prep| {
            let end = location_phrase_end(input, prep.end())?;
            let place = input[prep.end()..end].trim();
            Some(Extraction {
                pass: Pass::Location,
                span: prep.start()..end,
                text: &input[prep.start()..end],
                value: Value::Location(place.to_string()),
            })
        })
        .collect()
}

/// Walk the words after a preposition and return the byte offset where the
/// place name ends, or `None` if no place name follows.
fn location_phrase_end(input: &str, start: usize) -> Option<usize> {
    let mut cursor = start;
    let mut end = None;
    let mut named = false;

    loop {
        let rest = &input[cursor..];
        let word_start = cursor + (rest.len() - rest.trim_start().len());
        let rest = &input[word_start..];
        if word_start > cursor && input[cursor..word_start].contains('\n') {
            break;
        }
        let Some(word) = LOCATION_WORD_PATTERN.find(rest) else {
            break;
        };
        let text = word.as_str();
        let lower = text.to_lowercase();
        let leading_digit = text.starts_with(|c: char| c.is_ascii_digit());
        if is_bare_time(text) || (end.is_none() && leading_digit) {
            break;
        }
        if LOCATION_STOP_WORDS.contains(&lower.as_str()) {
            break;
        }
        let word_end = word_start + word.end();
        if !ARTICLES.contains(&lower.as_str()) {
            named = true;
        }
        end = Some(word_end);
        cursor = word_end;

        // Punctuation right after the word closes the phrase.
        if input[cursor..]
            .chars()
            .next()
            .is_some_and(|c| !c.is_whitespace())
        {
            break;
        }
    }

    end.filter(|_| named)
}
