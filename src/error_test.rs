use super::*;

#[test]
fn only_server_rejection_has_user_message() {
    let rejected = ClientError::ServerRejected { status: 400, message: "already liked".to_owned() };
    assert_eq!(rejected.user_message(), Some("already liked"));
    assert_eq!(ClientError::RequestFailed("offline".to_owned()).user_message(), None);
    assert_eq!(ClientError::MalformedResponse("eof".to_owned()).user_message(), None);
    assert_eq!(ClientError::UserDeclined.user_message(), None);
}

#[test]
fn display_includes_status_and_transition() {
    let rejected = ClientError::ServerRejected { status: 403, message: "nope".to_owned() };
    assert_eq!(rejected.to_string(), "server rejected request (403): nope");

    let invalid = ClientError::InvalidTransition { action: "pause", from: StopwatchStatus::Idle };
    assert_eq!(invalid.to_string(), "cannot pause a stopwatch that is idle");
}
