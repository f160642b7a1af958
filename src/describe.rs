//! Human-readable rendering of decoded Snowflakes

use std::fmt;

use chrono::{DateTime, Datelike, Local, TimeZone};

use crate::decoder::{DecodedSnowflake, Origin};

/// Format `n` as an English ordinal ("1st", "2nd", "3rd", "4th", "11th", ...)
///
/// 11, 12 and 13 (mod 100) always take "th"; otherwise the suffix follows
/// the last digit.
pub fn ordinal(n: u64) -> String {
    let suffix = match n % 100 {
        11..=13 => "th",
        _ => match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    };
    format!("{n}{suffix}")
}

impl DecodedSnowflake {
    /// Render the description with the creation time in the local zone
    pub fn description(&self) -> String {
        self.description_in(&self.creation_time.with_timezone(&Local))
    }

    /// Render the description with the creation time in `moment`'s zone
    ///
    /// Pure function of the decoded fields; the wording is fixed and only
    /// the zone abbreviation varies with the chosen zone.
    pub fn description_in<Tz: TimeZone>(&self, moment: &DateTime<Tz>) -> String
    where
        Tz::Offset: fmt::Display,
    {
        let day = ordinal(moment.day() as u64);
        let millis = moment.timestamp_subsec_millis();
        let when_fmt = format!("%B {day}, %Y at %H:%M and %S.{millis:03} seconds (%Z)");
        let when = moment.format(&when_fmt);

        let rank = ordinal(self.sequence as u64 + 1);
        let (origin_clause, server) = match self.origin {
            Origin::WorkerProcess {
                worker_id,
                process_id,
            } => (
                format!(
                    "The worker \"{worker_id}\" and its process \"{process_id}\" \
                     were involved in creating the ID"
                ),
                "process",
            ),
            Origin::Machine { machine_id } => {
                (format!("The machine \"{machine_id}\" created the ID"), "machine")
            }
        };

        format!(
            "This ID was created at {when}. {origin_clause}. And within the \
             millisecond of its generation, it was the {rank} in queue to be \
             served by that {server}."
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_suffixes() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(4), "4th");
        assert_eq!(ordinal(10), "10th");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(12), "12th");
        assert_eq!(ordinal(13), "13th");
        assert_eq!(ordinal(21), "21st");
        assert_eq!(ordinal(22), "22nd");
        assert_eq!(ordinal(23), "23rd");
        assert_eq!(ordinal(101), "101st");
        assert_eq!(ordinal(111), "111th");
        assert_eq!(ordinal(112), "112th");
        assert_eq!(ordinal(4096), "4096th");
    }
}
