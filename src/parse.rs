//! Numeric parsing with explicit errors.

use thiserror::Error;

/// Error returned when an integer field fails to parse.
#[derive(Debug, Error)]
#[error("invalid integer {input:?}")]
pub struct ParseError {
    input: String,
    #[source]
    source: std::num::ParseIntError,
}

impl ParseError {
    /// The input that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Parse a decimal integer.
///
/// Malformed input is an error for the caller to handle, carrying the
/// offending text, not a process abort.
pub fn parse_int(s: &str) -> Result<i64, ParseError> {
    s.parse::<i64>().map_err(|source| ParseError {
        input: s.to_string(),
        source,
    })
}
