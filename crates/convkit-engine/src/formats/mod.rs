//! Validators and heuristic formatters for structured text.
//!
//! Each module exposes `validate(input: &str) -> Validation`. A valid result always
//! carries the re-formatted text; an invalid result carries a human-readable reason.

pub mod csv;
pub mod json;
pub mod markdown;
pub mod sql;
pub mod xml;
