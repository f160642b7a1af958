use thiserror::Error;

/// Errors raised while parsing or validating a Snowflake identifier
///
/// Every variant is recoverable: callers report the message and keep the
/// session going. Text that fails integer parsing and values of a
/// non-integer type both surface as [`SnowflakeError::NotAnInteger`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnowflakeError {
    /// The input cannot be interpreted as an integer
    #[error("\"{input}\" is not a valid Snowflake identifier: not an integer.")]
    NotAnInteger { input: String },
    /// The value is negative
    #[error("\"{input}\" is not a valid Snowflake identifier: below accepted range.")]
    BelowRange { input: String },
    /// The value exceeds the signed 64-bit maximum
    #[error("\"{input}\" is not a valid Snowflake identifier: above accepted range.")]
    AboveRange { input: String },
}
