//! Fixed bit layouts for 64-bit Snowflake identifiers

use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;

/// Snowflake epoch: 2015-01-01T00:00:00Z, in milliseconds since the Unix epoch
pub const EPOCH_MS: u64 = 1_420_070_400_000;

/// The epoch as a calendar-aware instant, computed once
pub(crate) static EPOCH: Lazy<DateTime<Utc>> = Lazy::new(|| {
    Utc.timestamp_millis_opt(EPOCH_MS as i64)
        .single()
        .expect("Snowflake epoch is a valid instant")
});

/// Bit layout variant selecting how the 10 origin bits are interpreted
///
/// Both variants share a 42-bit timestamp and a 12-bit sequence; they differ
/// only in whether the middle 10 bits are a single machine ID or a 5-bit
/// worker / 5-bit process split. The layout is fixed per deployment and is
/// not auto-detected from the ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// 5-bit worker ID and 5-bit process ID
    #[default]
    WorkerProcess,
    /// Single 10-bit machine ID
    Machine,
}

impl Layout {
    pub(crate) const TIMESTAMP_MASK: u64 = 0xFFFF_FFFF_FFC0_0000;
    pub(crate) const TIMESTAMP_SHIFT: u8 = 22;
    pub(crate) const WORKER_MASK: u64 = 0x3E_0000;
    pub(crate) const WORKER_SHIFT: u8 = 17;
    pub(crate) const PROCESS_MASK: u64 = 0x1_F000;
    pub(crate) const PROCESS_SHIFT: u8 = 12;
    pub(crate) const MACHINE_MASK: u64 = 0x3F_F000;
    pub(crate) const MACHINE_SHIFT: u8 = 12;
    pub(crate) const SEQUENCE_MASK: u64 = 0xFFF;

    #[inline(always)]
    pub const fn max_sequence(self) -> u16 {
        Self::SEQUENCE_MASK as u16
    }

    #[inline(always)]
    pub const fn max_machine_id(self) -> u16 {
        (Self::MACHINE_MASK >> Self::MACHINE_SHIFT) as u16
    }

    #[inline(always)]
    pub const fn max_worker_id(self) -> u8 {
        (Self::WORKER_MASK >> Self::WORKER_SHIFT) as u8
    }

    #[inline(always)]
    pub const fn max_process_id(self) -> u8 {
        (Self::PROCESS_MASK >> Self::PROCESS_SHIFT) as u8
    }
}
