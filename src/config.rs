//! Client configuration embedded by the server-rendered page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Templates may render a `<script type="application/json" id="client-config">`
//! block to override endpoint paths, element ids or user-facing text. Every
//! field is optional; anything missing keeps its default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Element id of the embedded JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "client-config";

/// Runtime configuration for every enhancement on the page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Cookie holding the anti-forgery token.
    pub csrf_cookie: String,
    /// Request header carrying the anti-forgery token.
    pub csrf_header: String,
    /// Hidden form field carrying the anti-forgery token on plain form posts.
    pub csrf_form_field: String,
    /// Header (name, value) marking a request as programmatic.
    pub requested_with: (String, String),
    /// Stopwatch display refresh period.
    pub tick_interval_ms: u32,
    pub logout_path: String,
    pub login_path: String,
    /// Id of the element the workout timer mounts into.
    pub workout_mount_id: String,
    /// Id of the hidden input holding the reservation id.
    pub reservation_field_id: String,
    pub liked_glyph: String,
    pub unliked_glyph: String,
    /// `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
    pub messages: Messages,
}

/// User-facing text.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub generic_failure: String,
    pub finish_prompt: String,
    pub leave_prompt: String,
    pub start_label: String,
    pub resume_label: String,
    pub pause_label: String,
    pub finish_label: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            csrf_cookie: "csrftoken".to_owned(),
            csrf_header: "X-CSRFToken".to_owned(),
            csrf_form_field: "csrfmiddlewaretoken".to_owned(),
            requested_with: ("X-Requested-With".to_owned(), "XMLHttpRequest".to_owned()),
            tick_interval_ms: 1000,
            logout_path: "/auth/logout/".to_owned(),
            login_path: "/auth/login/".to_owned(),
            workout_mount_id: "workout-timer".to_owned(),
            reservation_field_id: "resId".to_owned(),
            liked_glyph: "❤️".to_owned(),
            unliked_glyph: "🤍".to_owned(),
            log_level: "info".to_owned(),
            messages: Messages::default(),
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            generic_failure: "Something went wrong. Please try again.".to_owned(),
            finish_prompt: "End the workout and record the result?".to_owned(),
            leave_prompt: "A workout is in progress. Leave this page?".to_owned(),
            start_label: "Start".to_owned(),
            resume_label: "Resume".to_owned(),
            pause_label: "Pause".to_owned(),
            finish_label: "Finish".to_owned(),
        }
    }
}

impl ClientConfig {
    /// Parse a (possibly partial) JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns the serde error if the text is not a valid configuration object.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Read the embedded configuration block, falling back to defaults.
    pub fn load() -> Self {
        #[cfg(feature = "csr")]
        {
            let raw = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
                .and_then(|el| el.text_content());
            let Some(raw) = raw else {
                return Self::default();
            };
            match Self::from_json(&raw) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("invalid #{CONFIG_ELEMENT_ID} block, using defaults: {e}");
                    Self::default()
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }

    /// Configured log level, `Info` when unrecognised.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
