//! Feature implementations for taskline.

pub mod nlp;
