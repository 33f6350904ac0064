//! REST helpers for the like toggle and logout.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning `RequestFailed`, since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ClientError>`; the caller decides whether an
//! error is shown (server rejection) or only logged (everything else).

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::LikeResponse;
#[cfg(any(test, feature = "csr"))]
use super::types::rejection_message;
use crate::config::ClientConfig;
use crate::error::ClientError;

#[cfg(not(feature = "csr"))]
const UNAVAILABLE: &str = "not available outside the browser";

/// Headers for a programmatic, CSRF-protected POST.
///
/// The token header is omitted when no token cookie exists; the server then
/// rejects the request like any other forgery check failure.
pub fn request_headers(config: &ClientConfig, csrf: Option<&str>) -> Vec<(String, String)> {
    let mut headers = vec![config.requested_with.clone()];
    if let Some(token) = csrf {
        headers.push((config.csrf_header.clone(), token.to_owned()));
    }
    headers
}

#[cfg(any(test, feature = "csr"))]
fn rejected(status: u16, body: &str, config: &ClientConfig) -> ClientError {
    ClientError::ServerRejected { status, message: rejection_message(body, &config.messages.generic_failure) }
}

#[cfg(any(test, feature = "csr"))]
fn decode_like(body: &str) -> Result<LikeResponse, ClientError> {
    serde_json::from_str(body).map_err(|e| ClientError::MalformedResponse(e.to_string()))
}

#[cfg(feature = "csr")]
async fn post(url: &str, csrf: Option<&str>, config: &ClientConfig) -> Result<gloo_net::http::Response, ClientError> {
    let mut builder = gloo_net::http::Request::post(url);
    for (name, value) in request_headers(config, csrf) {
        builder = builder.header(&name, &value);
    }
    builder.send().await.map_err(|e| ClientError::RequestFailed(e.to_string()))
}

/// Toggle the like behind `url` and return the authoritative state.
///
/// # Errors
///
/// `RequestFailed` when the request never completes, `ServerRejected` for a
/// non-success status, `MalformedResponse` when a success body does not decode.
pub async fn toggle_like(url: &str, csrf: Option<&str>, config: &ClientConfig) -> Result<LikeResponse, ClientError> {
    #[cfg(feature = "csr")]
    {
        let resp = post(url, csrf, config).await?;
        let body = resp.text().await;
        if !resp.ok() {
            return Err(rejected(resp.status(), &body.unwrap_or_default(), config));
        }
        let body = body.map_err(|e| ClientError::RequestFailed(e.to_string()))?;
        decode_like(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (url, csrf, config);
        Err(ClientError::RequestFailed(UNAVAILABLE.to_owned()))
    }
}

/// End the session by calling `POST <logout_path>`.
///
/// # Errors
///
/// `RequestFailed` on transport failure, `ServerRejected` for a non-success status.
pub async fn logout(csrf: Option<&str>, config: &ClientConfig) -> Result<(), ClientError> {
    #[cfg(feature = "csr")]
    {
        let resp = post(&config.logout_path, csrf, config).await?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(rejected(resp.status(), &body, config));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (csrf, config);
        Err(ClientError::RequestFailed(UNAVAILABLE.to_owned()))
    }
}
