use crate::utils::error::{Result, SlotError};
use chrono::{NaiveTime, Timelike};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

pub const MINUTES_PER_HOUR: u16 = 60;
pub const MINUTES_PER_DAY: u16 = 24 * MINUTES_PER_HOUR;

const TIME_FORMAT: &str = "%H:%M";

fn hhmm_shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").expect("static regex is valid"))
}

/// Wall-clock time of day with minute precision.
///
/// Stored as minutes since midnight. Parsing only yields 00:00..=23:59; the
/// end-of-day value 24:00 exists so that rounding 23:46..23:59 up has
/// somewhere to land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "String")]
pub struct ClockTime {
    minutes: u16,
}

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime { minutes: 0 };
    pub const END_OF_DAY: ClockTime = ClockTime {
        minutes: MINUTES_PER_DAY,
    };

    /// Parses strict zero-padded 24-hour `HH:MM`. `field` names the input in
    /// the error.
    pub fn parse(field: &str, input: &str) -> Result<Self> {
        if !hhmm_shape().is_match(input) {
            return Err(SlotError::parse(field, input, "expected zero-padded HH:MM"));
        }

        let time = NaiveTime::parse_from_str(input, TIME_FORMAT)
            .map_err(|e| SlotError::parse(field, input, e.to_string()))?;

        Ok(Self {
            // hour() <= 23 and minute() <= 59, both fit in u16
            minutes: time.hour() as u16 * MINUTES_PER_HOUR + time.minute() as u16,
        })
    }

    pub(crate) fn from_total_minutes(minutes: u16) -> Self {
        debug_assert!(minutes <= MINUTES_PER_DAY);
        Self { minutes }
    }

    pub fn hour(&self) -> u16 {
        self.minutes / MINUTES_PER_HOUR
    }

    pub fn minute(&self) -> u16 {
        self.minutes % MINUTES_PER_HOUR
    }

    pub fn total_minutes(&self) -> u16 {
        self.minutes
    }

    /// Signed minutes from `earlier` to `self`.
    pub fn minutes_since(&self, earlier: ClockTime) -> i32 {
        i32::from(self.minutes) - i32::from(earlier.minutes)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

impl FromStr for ClockTime {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse("time", s)
    }
}
