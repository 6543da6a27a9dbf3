//! Time-of-day intervals anchored to a single reference day.
//!
//! An availability window is a pair of clock times with no date. When the end
//! is earlier than the start the window runs past midnight, so its end is
//! shifted forward by 24 hours. After normalization every interval is
//! forward-ordered on one timeline of seconds from the reference midnight.
//! Arithmetic uses those offsets, while reporting uses the original clock times.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::Serialize;

use crate::error::{MatchError, Result};

/// Seconds in one day; the shift applied to overnight end times.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// A normalized availability window.
///
/// Holds the clock times as submitted and their offsets on the reference
/// timeline. `end_offset > start_offset` always holds; sub-second precision
/// is ignored by the offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Interval {
    #[serde(with = "clock")]
    start: NaiveTime,
    #[serde(with = "clock")]
    end: NaiveTime,
    #[serde(skip)]
    start_offset: u32,
    #[serde(skip)]
    end_offset: u32,
}

impl Interval {
    /// Normalize a clock-time pair into a forward-ordered interval.
    ///
    /// An end earlier than the start is read as overnight and lands on the
    /// following day (`22:00`-`02:00` has an internal end of 26:00).
    ///
    /// # Errors
    /// Returns `MatchError::EmptyInterval` when start and end name the same
    /// second of the day.
    pub fn normalize(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        let start_offset = start.num_seconds_from_midnight();
        let mut end_offset = end.num_seconds_from_midnight();

        if end_offset == start_offset {
            return Err(MatchError::EmptyInterval { start, end });
        }
        if end_offset < start_offset {
            end_offset += SECONDS_PER_DAY;
        }

        Ok(Self {
            start,
            end,
            start_offset,
            end_offset,
        })
    }

    /// Parse and normalize a pair of `HH:MM` / `HH:MM:SS` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::normalize(parse_clock(start)?, parse_clock(end)?)
    }

    /// Start on the original clock.
    pub fn start(&self) -> NaiveTime {
        self.start
    }

    /// End on the original clock (never shifted).
    pub fn end(&self) -> NaiveTime {
        self.end
    }

    pub fn start_offset(&self) -> u32 {
        self.start_offset
    }

    /// End in seconds from the reference midnight; exceeds a day for overnight windows.
    pub fn end_offset(&self) -> u32 {
        self.end_offset
    }

    pub fn is_overnight(&self) -> bool {
        self.end_offset >= SECONDS_PER_DAY
    }

    pub fn duration_minutes(&self) -> i64 {
        i64::from(self.end_offset - self.start_offset) / 60
    }

    /// Two intervals overlap iff `max(starts) < min(ends)`.
    ///
    /// Intervals that only touch at an endpoint do not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start_offset.max(other.start_offset) < self.end_offset.min(other.end_offset)
    }

    /// The positive-duration overlap of two intervals, if any.
    ///
    /// Each endpoint keeps the clock time of the side it came from, so the
    /// result reports correctly on the original clock.
    pub fn intersection(&self, other: &Interval) -> Option<Interval> {
        let (start, start_offset) = if self.start_offset >= other.start_offset {
            (self.start, self.start_offset)
        } else {
            (other.start, other.start_offset)
        };
        let (end, end_offset) = if self.end_offset <= other.end_offset {
            (self.end, self.end_offset)
        } else {
            (other.end, other.end_offset)
        };

        (start_offset < end_offset).then_some(Interval {
            start,
            end,
            start_offset,
            end_offset,
        })
    }

    /// Whether `other` lies entirely within this interval.
    pub fn contains(&self, other: &Interval) -> bool {
        self.start_offset <= other.start_offset && other.end_offset <= self.end_offset
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", format_clock(self.start), format_clock(self.end))
    }
}

/// Normalize a clock-time pair. See [`Interval::normalize`].
pub fn normalize(start: NaiveTime, end: NaiveTime) -> Result<Interval> {
    Interval::normalize(start, end)
}

/// Parse a time of day written as `HH:MM` or `HH:MM:SS`.
///
/// # Errors
/// Returns `MatchError::InvalidTime` for anything else.
pub fn parse_clock(text: &str) -> Result<NaiveTime> {
    let trimmed = text.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|_| MatchError::InvalidTime(text.to_string()))
}

/// Format a time of day as `HH:MM`, adding seconds only when they are non-zero.
pub fn format_clock(time: NaiveTime) -> String {
    if time.second() == 0 {
        time.format("%H:%M").to_string()
    } else {
        time.format("%H:%M:%S").to_string()
    }
}

/// Serde adapter for clock times in the `HH:MM[:SS]` text form.
pub(crate) mod clock {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_clock(*time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_clock(&raw).map_err(serde::de::Error::custom)
    }
}
