//! Cross-module tests for the Snowflake decoder
