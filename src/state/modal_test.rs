use super::*;

#[test]
fn closed_by_default() {
    let modal = ModalState::default();
    assert!(!modal.is_open());
    assert_eq!(modal.action(), None);
}

#[test]
fn open_records_action_and_close_clears_it() {
    let mut modal = ModalState::default();
    modal.open("/42/checkin/");
    assert!(modal.is_open());
    assert_eq!(modal.action(), Some("/42/checkin/"));
    modal.close();
    assert!(!modal.is_open());
}

#[test]
fn reopening_switches_target() {
    let mut modal = ModalState::default();
    modal.open("/1/checkin/");
    modal.open("/2/checkin/");
    assert_eq!(modal.action(), Some("/2/checkin/"));
}
