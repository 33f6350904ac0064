use super::*;

#[test]
fn completion_url_embeds_reservation_and_time() {
    assert_eq!(completion_url("42", "00:05:00"), "/reservations/42/complete/?time=00:05:00");
}

#[test]
fn completion_url_trims_hidden_field_whitespace() {
    assert_eq!(completion_url(" 7\n", "01:00:00"), "/reservations/7/complete/?time=01:00:00");
}

#[test]
fn checkin_url_formats_expected_path() {
    assert_eq!(checkin_url("42"), "/42/checkin/");
}

#[test]
fn flash_message_maps_known_codes() {
    assert_eq!(flash_message("?error=need_checkin"), Some("Check in before starting the workout."));
    assert!(flash_message("error=checkin_time").is_some());
    assert!(flash_message("?page=2&error=recovery_cooldown").is_some());
    assert!(flash_message("?error=no_team").is_some());
}

#[test]
fn flash_message_ignores_unknown_or_missing_codes() {
    assert_eq!(flash_message(""), None);
    assert_eq!(flash_message("?error=mystery"), None);
    assert_eq!(flash_message("?page=2"), None);
    assert_eq!(flash_message("?errors=no_team"), None);
}
