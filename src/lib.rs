pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::counter::{format_summary_line, SlotCounter, SlotSummary};
pub use core::slots::{count_slots, play_window, round_down_to_slot, round_up_to_slot, try_count_slots};
pub use domain::clock::ClockTime;
pub use domain::model::{DayCase, PlayWindow, SlotCount, SLOT_MINUTES};
pub use utils::error::{Result, SlotError};
