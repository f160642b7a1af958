use std::fmt;

use chrono::{DateTime, Duration, Utc};

use crate::error::SnowflakeError;
use crate::layout::{Layout, EPOCH};

/// Largest raw value accepted: the maximum signed 64-bit integer
pub const MAX_ID: u64 = 0x7FFF_FFFF_FFFF_FFFF;

/// The origin fields of a Snowflake, per the selected layout
///
/// The two shapes are mutually exclusive: an ID carries either a
/// worker/process pair or a single machine ID, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    WorkerProcess { worker_id: u8, process_id: u8 },
    Machine { machine_id: u16 },
}

/// A fully decoded Snowflake
///
/// Constructed once by [`SnowflakeDecoder::decode`] and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSnowflake {
    /// The validated raw identifier
    pub id: u64,
    /// Milliseconds since the Snowflake epoch
    pub timestamp_ms: u64,
    /// Absolute creation instant (epoch + `timestamp_ms`)
    pub creation_time: DateTime<Utc>,
    /// Machine or worker/process fields, depending on the layout
    pub origin: Origin,
    /// Per-millisecond counter, 0..=4095
    pub sequence: u16,
}

impl fmt::Display for DecodedSnowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Snowflake {{ id: {}, timestamp_ms: {}, ",
            self.id, self.timestamp_ms
        )?;
        match self.origin {
            Origin::WorkerProcess {
                worker_id,
                process_id,
            } => write!(f, "worker_id: {}, process_id: {}, ", worker_id, process_id)?,
            Origin::Machine { machine_id } => write!(f, "machine_id: {}, ", machine_id)?,
        }
        write!(f, "sequence: {} }}", self.sequence)
    }
}

/// Snowflake validator and field extractor
#[derive(Debug, Clone, Copy, Default)]
pub struct SnowflakeDecoder {
    layout: Layout,
}

impl SnowflakeDecoder {
    /// Create a decoder for the given bit layout
    pub const fn new(layout: Layout) -> Self {
        Self { layout }
    }

    #[inline(always)]
    pub const fn layout(&self) -> Layout {
        self.layout
    }

    /// Check that a raw integer is within the accepted Snowflake range
    ///
    /// Pure predicate-style check; no side effects.
    pub fn validate(&self, raw: i128) -> Result<u64, SnowflakeError> {
        if raw < 0 {
            return Err(SnowflakeError::BelowRange {
                input: raw.to_string(),
            });
        }
        if raw > MAX_ID as i128 {
            return Err(SnowflakeError::AboveRange {
                input: raw.to_string(),
            });
        }
        Ok(raw as u64)
    }

    /// Split a validated identifier into its fields
    ///
    /// Extraction is pure mask-and-shift, so it is total: every in-range ID
    /// decodes to exactly one value and this cannot fail.
    pub fn decode(&self, id: u64) -> DecodedSnowflake {
        let timestamp_ms = (id & Layout::TIMESTAMP_MASK) >> Layout::TIMESTAMP_SHIFT;
        let origin = match self.layout {
            Layout::WorkerProcess => Origin::WorkerProcess {
                worker_id: ((id & Layout::WORKER_MASK) >> Layout::WORKER_SHIFT) as u8,
                process_id: ((id & Layout::PROCESS_MASK) >> Layout::PROCESS_SHIFT) as u8,
            },
            Layout::Machine => Origin::Machine {
                machine_id: ((id & Layout::MACHINE_MASK) >> Layout::MACHINE_SHIFT) as u16,
            },
        };
        DecodedSnowflake {
            id,
            timestamp_ms,
            creation_time: *EPOCH + Duration::milliseconds(timestamp_ms as i64),
            origin,
            sequence: (id & Layout::SEQUENCE_MASK) as u16,
        }
    }

    /// Render the decoded fields as a descriptive sentence
    pub fn describe(&self, decoded: &DecodedSnowflake) -> String {
        decoded.description()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_boundaries() {
        let decoder = SnowflakeDecoder::default();
        assert_eq!(decoder.validate(0), Ok(0));
        assert_eq!(decoder.validate(MAX_ID as i128), Ok(MAX_ID));
        assert!(matches!(
            decoder.validate(-1),
            Err(SnowflakeError::BelowRange { .. })
        ));
        assert!(matches!(
            decoder.validate(MAX_ID as i128 + 1),
            Err(SnowflakeError::AboveRange { .. })
        ));
    }

    #[test]
    fn test_decode_zero() {
        let decoder = SnowflakeDecoder::new(Layout::Machine);
        let decoded = decoder.decode(0);
        assert_eq!(decoded.timestamp_ms, 0);
        assert_eq!(decoded.origin, Origin::Machine { machine_id: 0 });
        assert_eq!(decoded.sequence, 0);
        assert_eq!(decoded.creation_time, *EPOCH);
    }

    #[test]
    fn test_display() {
        let decoder = SnowflakeDecoder::new(Layout::Machine);
        let decoded = decoder.decode(175928847299117063);
        assert_eq!(
            decoded.to_string(),
            "Snowflake { id: 175928847299117063, timestamp_ms: 41944705796, \
             machine_id: 32, sequence: 7 }"
        );
    }
}
