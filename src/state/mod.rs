//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern so each island depends on a small model. All of
//! it is plain data: components wrap it in signals, tests drive it directly.

pub mod confirm;
pub mod like;
pub mod modal;
pub mod notice;
pub mod stopwatch;
