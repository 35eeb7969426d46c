use crate::core::slots::play_window;
use crate::domain::model::{PlayWindow, SlotCount};
use crate::domain::ports::TimeRangeProvider;
use crate::utils::error::Result;
use serde::Serialize;

/// Result of running the counter, ready to print as text or JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotSummary {
    pub start: String,
    pub end: String,
    pub slots: SlotCount,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<PlayWindow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SlotSummary {
    pub fn line(&self) -> String {
        format_summary_line(&self.start, &self.end, self.slots)
    }
}

pub fn format_summary_line(start: &str, end: &str, slots: SlotCount) -> String {
    format!(
        "From time {} to time {}, there are {} playable games",
        start, end, slots
    )
}

pub struct SlotCounter<P: TimeRangeProvider> {
    provider: P,
}

impl<P: TimeRangeProvider> SlotCounter<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Fails on unparseable input instead of reporting zero games.
    pub fn summarize_strict(&self) -> Result<SlotSummary> {
        let window = play_window(self.provider.start_time(), self.provider.end_time())?;
        Ok(self.summary(window, None))
    }

    /// Unparseable input is logged and summarized as zero games.
    pub fn summarize(&self) -> SlotSummary {
        match self.summarize_strict() {
            Ok(summary) => summary,
            Err(e) => {
                tracing::warn!("Error parsing time range: {}", e);
                self.summary(None, Some(e.to_string()))
            }
        }
    }

    fn summary(&self, window: Option<PlayWindow>, error: Option<String>) -> SlotSummary {
        SlotSummary {
            start: self.provider.start_time().to_string(),
            end: self.provider.end_time().to_string(),
            slots: window.as_ref().map_or(SlotCount::ZERO, |w| w.slots),
            window,
            error,
        }
    }
}
