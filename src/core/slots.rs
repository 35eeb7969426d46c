use crate::domain::clock::{ClockTime, MINUTES_PER_DAY};
use crate::domain::model::{DayCase, PlayWindow, SlotCount, SLOT_MINUTES};
use crate::utils::error::Result;

/// Moves `t` forward to the next quarter-hour, since a game cannot start
/// before one. Times already on a boundary are returned unchanged. 23:46
/// through 23:59 round to the end-of-day value 24:00.
pub fn round_up_to_slot(t: ClockTime) -> ClockTime {
    let past_boundary = t.minute() % SLOT_MINUTES;
    if past_boundary == 0 {
        return t;
    }
    ClockTime::from_total_minutes(t.total_minutes() + (SLOT_MINUTES - past_boundary))
}

/// Moves `t` back to the previous quarter-hour; a game still running at the
/// end time does not count.
pub fn round_down_to_slot(t: ClockTime) -> ClockTime {
    ClockTime::from_total_minutes(t.total_minutes() - t.minute() % SLOT_MINUTES)
}

/// Computes the full breakdown for the window `start`..`end`.
///
/// Returns `Ok(None)` when both strings are identical, which means no games
/// and is not an error. An `end` earlier than `start` is read as crossing
/// midnight.
pub fn play_window(start: &str, end: &str) -> Result<Option<PlayWindow>> {
    if start == end {
        tracing::debug!("Start and end are both {}, no games are playable", start);
        return Ok(None);
    }

    let start = ClockTime::parse("start", start)?;
    let end = ClockTime::parse("end", end)?;

    let rounded_start = round_up_to_slot(start);
    let rounded_end = round_down_to_slot(end);

    let window = if start < end {
        let span_minutes = rounded_end.minutes_since(rounded_start);
        let slots = match u32::try_from(span_minutes) {
            Ok(minutes) => SlotCount::from_minutes(minutes),
            Err(_) => {
                tracing::debug!(
                    "Rounding inverted the window ({} after {}), no games are playable",
                    rounded_start,
                    rounded_end
                );
                SlotCount::ZERO
            }
        };

        PlayWindow {
            start,
            end,
            rounded_start,
            rounded_end,
            case: DayCase::SameDay,
            span_minutes,
            slots,
        }
    } else {
        // rounded_start never exceeds 24:00 so neither segment can go negative
        let before_midnight = MINUTES_PER_DAY - rounded_start.total_minutes();
        let after_midnight = rounded_end.total_minutes();
        let total = u32::from(before_midnight) + u32::from(after_midnight);

        PlayWindow {
            start,
            end,
            rounded_start,
            rounded_end,
            case: DayCase::Rollover,
            span_minutes: i32::from(before_midnight) + i32::from(after_midnight),
            slots: SlotCount::from_minutes(total),
        }
    };

    tracing::debug!(
        "{:?} window {}..{} rounded to {}..{}: {} minutes, {} games",
        window.case,
        window.start,
        window.end,
        window.rounded_start,
        window.rounded_end,
        window.span_minutes,
        window.slots
    );

    Ok(Some(window))
}

/// Number of playable games, with parse failures returned to the caller.
pub fn try_count_slots(start: &str, end: &str) -> Result<SlotCount> {
    Ok(play_window(start, end)?.map_or(SlotCount::ZERO, |window| window.slots))
}

/// Number of playable games. Unparseable input is logged and counts as zero
/// games.
pub fn count_slots(start: &str, end: &str) -> SlotCount {
    match try_count_slots(start, end) {
        Ok(slots) => slots,
        Err(e) => {
            tracing::warn!("Error parsing time range: {}", e);
            SlotCount::ZERO
        }
    }
}
