use super::*;

// =============================================================
// find_timestamps
// =============================================================

#[test]
fn find_timestamps_returns_tokens_in_order() {
    let found = find_timestamps("intro at 0:05, chorus at 1:30 and outro 12:45");
    let texts: Vec<&str> = found.iter().map(|m| m.text).collect();
    assert_eq!(texts, ["0:05", "1:30", "12:45"]);
}

#[test]
fn find_timestamps_keeps_repeats() {
    let found = find_timestamps("1:30 then 1:30 again");
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].range, 0..4);
    assert_eq!(found[1].range, 10..14);
}

#[test]
fn find_timestamps_rejects_seconds_above_59() {
    assert!(find_timestamps("at 1:60 or 2:99").is_empty());
}

#[test]
fn find_timestamps_needs_two_second_digits() {
    assert!(find_timestamps("1:5 is not a timestamp").is_empty());
}

#[test]
fn find_timestamps_takes_prefix_of_longer_digit_runs() {
    let found = find_timestamps("12:345");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].text, "12:34");
}

#[test]
fn find_timestamps_empty_without_tokens() {
    assert!(find_timestamps("no times here").is_empty());
    assert!(find_timestamps("").is_empty());
}

// =============================================================
// parse_seek
// =============================================================

#[test]
fn parse_seek_converts_minutes_and_seconds() {
    assert_eq!(parse_seek("2:15"), Some(135));
    assert_eq!(parse_seek("0:05"), Some(5));
    assert_eq!(parse_seek("90:00"), Some(5400));
}

#[test]
fn parse_seek_rejects_malformed_values() {
    assert_eq!(parse_seek(""), None);
    assert_eq!(parse_seek("2:5"), None);
    assert_eq!(parse_seek("2:60"), None);
    assert_eq!(parse_seek(":15"), None);
    assert_eq!(parse_seek("a:15"), None);
    assert_eq!(parse_seek("2:15:00"), None);
    assert_eq!(parse_seek("-1:15"), None);
}

#[test]
fn parse_seek_rejects_overflowing_minutes() {
    assert_eq!(parse_seek("99999999999:00"), None);
}

// =============================================================
// format_seconds
// =============================================================

#[test]
fn format_seconds_pads_seconds() {
    assert_eq!(format_seconds(0.0), "0:00");
    assert_eq!(format_seconds(5.0), "0:05");
    assert_eq!(format_seconds(135.0), "2:15");
    assert_eq!(format_seconds(3600.0), "60:00");
}

#[test]
fn format_seconds_truncates_fractions() {
    assert_eq!(format_seconds(59.999), "0:59");
    assert_eq!(format_seconds(61.2), "1:01");
}

#[test]
fn format_seconds_clamps_invalid_positions() {
    assert_eq!(format_seconds(-3.0), "0:00");
    assert_eq!(format_seconds(f64::NAN), "0:00");
    assert_eq!(format_seconds(f64::INFINITY), "0:00");
}

#[test]
fn format_then_parse_agrees_for_whole_seconds() {
    for secs in [0_u32, 7, 59, 60, 135, 599, 3601] {
        assert_eq!(parse_seek(&format_seconds(f64::from(secs))), Some(secs));
    }
}
