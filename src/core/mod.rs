pub mod counter;
pub mod slots;

pub use crate::domain::clock::ClockTime;
pub use crate::domain::model::{DayCase, PlayWindow, SlotCount};
pub use crate::domain::ports::TimeRangeProvider;
pub use crate::utils::error::Result;
