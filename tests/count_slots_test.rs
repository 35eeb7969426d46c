use game_slots::{
    count_slots, format_summary_line, play_window, try_count_slots, ClockTime, DayCase, SlotCount,
    SlotCounter, SlotError,
};

#[test]
fn test_games_between_quarter_hours() {
    // 12:02 -> 12:15 and 12:17 -> 12:15
    assert_eq!(count_slots("12:02", "12:17").get(), 0);
    // 17:01 -> 17:15 and 19:02 -> 19:00, 105 minutes
    assert_eq!(count_slots("17:01", "19:02").get(), 7);
    assert_eq!(count_slots("09:00", "10:00").get(), 4);
    assert_eq!(count_slots("00:00", "23:59").get(), 95);
}

#[test]
fn test_equal_times_play_no_games() {
    for time in ["00:00", "09:00", "12:37", "23:59"] {
        assert_eq!(count_slots(time, time), SlotCount::ZERO);
    }
}

#[test]
fn test_rollover_past_midnight() {
    assert_eq!(count_slots("22:00", "06:00").get(), 32);
    assert_eq!(count_slots("23:50", "00:10").get(), 0);
    assert_eq!(count_slots("23:45", "00:15").get(), 2);

    let window = play_window("18:07", "02:50").unwrap().unwrap();
    assert_eq!(window.case, DayCase::Rollover);
    assert_eq!(window.rounded_start.to_string(), "18:15");
    assert_eq!(window.rounded_end.to_string(), "02:45");
    // 5h45m before midnight plus 2h45m after
    assert_eq!(window.span_minutes, 510);
    assert_eq!(window.slots.get(), 34);
}

#[test]
fn test_short_same_day_windows_play_no_games() {
    assert_eq!(count_slots("10:01", "10:14").get(), 0);
    assert_eq!(count_slots("10:01", "10:29").get(), 0);
    assert_eq!(count_slots("10:00", "10:14").get(), 0);
    assert_eq!(count_slots("10:00", "10:15").get(), 1);
}

#[test]
fn test_bad_input_counts_as_zero_games() {
    for (start, end) in [
        ("9:00", "10:00"),
        ("09:00", "10:0"),
        ("24:00", "10:00"),
        ("09:00", "09:60"),
        ("noon", "13:00"),
        ("", "13:00"),
    ] {
        assert_eq!(count_slots(start, end), SlotCount::ZERO, "{} -> {}", start, end);
        assert!(matches!(
            try_count_slots(start, end),
            Err(SlotError::Parse { .. })
        ));
    }
}

#[test]
fn test_end_of_day_is_only_a_rounding_result() {
    assert!(ClockTime::parse("start", "24:00").is_err());
    let window = play_window("23:46", "23:10").unwrap().unwrap();
    assert_eq!(window.rounded_start, ClockTime::END_OF_DAY);
    assert_eq!(window.slots.get(), 92);
}

#[test]
fn test_counter_output_line() {
    let summary = SlotCounter::new(("17:01", "19:02")).summarize();
    assert_eq!(
        summary.line(),
        "From time 17:01 to time 19:02, there are 7 playable games"
    );
    assert_eq!(
        format_summary_line("22:00", "06:00", SlotCount(32)),
        "From time 22:00 to time 06:00, there are 32 playable games"
    );
}
