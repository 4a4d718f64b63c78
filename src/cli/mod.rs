//! Command-line interface for taskline.

pub mod args;
pub mod commands;
