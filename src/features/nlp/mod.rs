//! Natural language parsing for task entry.
//!
//! This module turns quick-capture text like:
//! - "Call John at 2pm tomorrow"
//! - "Workout at gym 6pm #fitness"
//! - "Review report next week for 2 hours urgent"
//!
//! into a structured [`ParseResult`].

mod options;
mod parser;
mod passes;
mod types;

pub use options::{ParserOptions, ThisMonth, TimePrecedence};
pub use parser::{parse, parse_on, quick_examples, TextCommandParser};
pub use types::{ParseResult, Priority, Suggestion, SuggestionKind};
