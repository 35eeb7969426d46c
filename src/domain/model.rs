use crate::domain::clock::ClockTime;
use serde::Serialize;
use std::fmt;

/// Length of one game, and the spacing of the boundaries games start on.
pub const SLOT_MINUTES: u16 = 15;

/// Number of complete games that fit in a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct SlotCount(pub u32);

impl SlotCount {
    pub const ZERO: SlotCount = SlotCount(0);

    /// `floor(minutes / 15)`.
    pub fn from_minutes(minutes: u32) -> Self {
        SlotCount(minutes / u32::from(SLOT_MINUTES))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for SlotCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayCase {
    /// Start strictly before end on the same day.
    SameDay,
    /// Start later than end; the window crosses midnight.
    Rollover,
}

/// Breakdown of one slot computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayWindow {
    pub start: ClockTime,
    pub end: ClockTime,
    pub rounded_start: ClockTime,
    pub rounded_end: ClockTime,
    pub case: DayCase,
    /// Minutes between the rounded times. Negative only for a same-day window
    /// that rounding inverted.
    pub span_minutes: i32,
    pub slots: SlotCount,
}
