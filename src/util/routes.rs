//! Server URLs the client navigates to or posts at.
//!
//! SYSTEM CONTEXT
//! ==============
//! Paths mirror the server's URL configuration. Redirects that carry an
//! `?error=<code>` query are turned into notices by `flash_message`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use percent_encoding::percent_decode_str;

/// Where the recording form for a finished workout lives.
pub fn completion_url(reservation_id: &str, time: &str) -> String {
    format!("/reservations/{}/complete/?time={time}", reservation_id.trim())
}

/// Check-in form action for a reservation.
pub fn checkin_url(reservation_id: &str) -> String {
    format!("/{}/checkin/", reservation_id.trim())
}

/// Notice text for a redirect `error` code in `query` (with or without `?`).
pub fn flash_message(query: &str) -> Option<&'static str> {
    let code = query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "error")
        .map(|(_, value)| percent_decode_str(value).decode_utf8_lossy())?;
    match code.as_ref() {
        "checkin_time" => Some("Check-in opens 10 minutes before the start time and closes 30 minutes after."),
        "need_checkin" => Some("Check in before starting the workout."),
        "no_team" => Some("Join a team before using a recovery."),
        "recovery_cooldown" => Some("Recovery has already been used this week."),
        _ => None,
    }
}

/// Send the browser to `url`.
pub fn navigate(url: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                log::warn!("navigation to {url} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
    }
}

/// Query string of the current page, including the leading `?`.
pub fn current_query() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        web_sys::window()?.location().search().ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
