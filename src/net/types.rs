//! Wire-format DTOs for the like endpoint and error bodies.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// Success body of `POST <like url>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct LikeResponse {
    pub liked: bool,
    pub count: u64,
}

/// Optional body of a non-success response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Message to show for a rejected request.
///
/// Uses the body's `error` field when it is JSON and non-empty, otherwise
/// `fallback`.
pub fn rejection_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|msg| !msg.trim().is_empty())
        .unwrap_or_else(|| fallback.to_owned())
}
