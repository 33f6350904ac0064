use super::*;

#[test]
fn zero_is_all_zeroes() {
    assert_eq!(format_hms(0), "00:00:00");
}

#[test]
fn mixed_components_are_padded() {
    assert_eq!(format_hms(3_661_000), "01:01:01");
    assert_eq!(format_hms(90_000), "00:01:30");
}

#[test]
fn sub_second_remainder_is_truncated() {
    assert_eq!(format_hms(999), "00:00:00");
    assert_eq!(format_hms(59_999), "00:00:59");
}

#[test]
fn hours_do_not_wrap_at_a_day() {
    assert_eq!(format_hms(25 * 3_600_000), "25:00:00");
    assert_eq!(format_hms(100 * 3_600_000 + 5_000), "100:00:05");
}
