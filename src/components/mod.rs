//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are mounted as islands into server-rendered pages and read or
//! write the page-lifetime signals created in `app::mount`.

pub mod checkin_modal;
pub mod confirm_dialog;
pub mod notice_banner;
pub mod workout_timer;
