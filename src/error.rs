//! Client-side error kinds.
//!
//! ERROR HANDLING
//! ==============
//! No error is fatal to the page. Only a server rejection produces text for
//! the user; transport failures, malformed bodies and declined confirmations
//! are logged (or ignored) by the component that started the action.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::state::stopwatch::StopwatchStatus;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The request never completed (network or transport failure).
    #[error("request failed: {0}")]
    RequestFailed(String),
    /// The server answered with a non-success status.
    #[error("server rejected request ({status}): {message}")]
    ServerRejected { status: u16, message: String },
    /// Success status, but the body could not be decoded.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    /// The user answered "no" to a confirmation prompt.
    #[error("declined by user")]
    UserDeclined,
    /// A stopwatch action that the current status does not allow.
    #[error("cannot {action} a stopwatch that is {from}")]
    InvalidTransition { action: &'static str, from: StopwatchStatus },
}

impl ClientError {
    /// Text to present to the user, if this error warrants it.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Self::ServerRejected { message, .. } => Some(message),
            _ => None,
        }
    }
}
