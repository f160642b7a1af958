//! Line-oriented session contract for the interactive decoder
//!
//! The core never reads input itself; it interprets already-read lines and
//! leaves prompting and stream handling to the caller.

use std::num::IntErrorKind;

use crate::error::SnowflakeError;

/// Prompt re-displayed after every completed request/response cycle
pub const INSTRUCTIONS: &str = "Enter a Snowflake ID, or \"q\" to exit.";

/// What a line of input asks the session to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// End the session: an empty line or a case-insensitive "q"
    Quit,
    /// Validate and decode this integer
    Decode(i128),
}

/// Interpret one line of input
///
/// Numeric text too large for the parser is still classified by sign, so
/// callers see the same range errors [`SnowflakeDecoder::validate`] would
/// produce. Everything else that fails to parse is `NotAnInteger`.
///
/// [`SnowflakeDecoder::validate`]: crate::SnowflakeDecoder::validate
pub fn parse_line(line: &str) -> Result<Request, SnowflakeError> {
    let line = line.trim();
    if line.is_empty() || line.eq_ignore_ascii_case("q") {
        return Ok(Request::Quit);
    }
    match line.parse::<i128>() {
        Ok(value) => Ok(Request::Decode(value)),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Err(SnowflakeError::AboveRange {
                input: line.to_string(),
            }),
            IntErrorKind::NegOverflow => Err(SnowflakeError::BelowRange {
                input: line.to_string(),
            }),
            _ => Err(SnowflakeError::NotAnInteger {
                input: line.to_string(),
            }),
        },
    }
}
