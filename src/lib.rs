//! # workout-client
//!
//! Leptos + WASM enhancements for the server-rendered workout reservation
//! site: the like toggle on timeline posts, the workout stopwatch, the
//! check-in modal and the logout action.
//!
//! The state layer (`state`, `util`, `net::types`) is plain Rust and builds
//! natively; everything that touches the browser sits behind the `csr`
//! feature.

#[cfg(feature = "csr")]
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point, run once when the module is instantiated.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Trace);
    let config = config::ClientConfig::load();
    log::set_max_level(config.log_level().to_level_filter());
    app::mount(config);
}
