//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component logic
//! so the pure parts (formatting, cookies, routes) stay testable natively.

pub mod clock;
pub mod cookie;
#[cfg(feature = "csr")]
pub mod delegate;
pub mod duration;
pub mod routes;
pub mod ticker;
