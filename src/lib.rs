//! # snowdec
//!
//! Decode 64-bit Snowflake identifiers and describe what they encode.
//!
//! A Snowflake packs a millisecond timestamp, the identity of the machine
//! (or worker/process pair) that generated it, and a per-millisecond
//! sequence counter into a single 64-bit integer. This crate validates a
//! raw integer, splits it into its fields, reconstructs the absolute
//! creation time, and renders a human-readable sentence describing the ID.
//!
//! The pipeline is three pure steps: validate → decode → describe.

#![forbid(unsafe_code)]

mod decoder;
mod describe;
mod error;
mod layout;
mod session;

#[cfg(test)]
mod tests;

// Re-export main types
pub use decoder::{DecodedSnowflake, Origin, SnowflakeDecoder, MAX_ID};
pub use describe::ordinal;
pub use error::SnowflakeError;
pub use layout::{Layout, EPOCH_MS};
pub use session::{parse_line, Request, INSTRUCTIONS};
