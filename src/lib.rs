//! taskline - natural language task parser
//!
//! This crate turns one line of quick-capture text such as
//! "Call John at 2pm tomorrow #work" into structured task fields: time,
//! date, priority, duration, location, tags and category, plus the leftover
//! title, refinement suggestions and a confidence score.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod output;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::TasklineError;
pub use features::nlp::{parse, parse_on, quick_examples, ParseResult, TextCommandParser};
