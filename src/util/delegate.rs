//! Document-wide click delegation for server-rendered controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders like buttons, check-in triggers and the logout link as
//! plain markup. One click listener on the window routes clicks by marker, so
//! controls inserted after page load work without registering anything.
//!
//! | Marker                 | Action                                  |
//! |------------------------|-----------------------------------------|
//! | `.like-btn[data-url]`  | toggle like, render server's answer     |
//! | `[data-modal-action]`  | open the check-in modal for that action |
//! | `[data-logout]`        | log out, then go to the login page      |
//!
//! An empty `data-modal-action` with a `data-reservation-id` posts to that
//! reservation's check-in path.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::net::api;
use crate::state::like::{LikeTracker, LikeView};
use crate::state::modal::ModalState;
use crate::state::notice::NoticeState;
use crate::util::cookie::read_cookie;
use crate::util::routes::{checkin_url, navigate};

pub const LIKE_CONTROL: &str = ".like-btn";
pub const MODAL_TRIGGER: &str = "[data-modal-action]";
pub const LOGOUT_CONTROL: &str = "[data-logout]";

const LIKE_GLYPH: &str = ".heart";
const LIKE_COUNT: &str = ".like-count";
const LIKED_CLASS: &str = "is-liked";

/// Page-lifetime handles the delegated actions act on.
#[derive(Clone, Copy)]
pub struct DelegateContext {
    pub config: StoredValue<ClientConfig>,
    pub notices: RwSignal<NoticeState>,
    pub modal: RwSignal<ModalState>,
    pub likes: StoredValue<LikeTracker>,
}

/// Attach the single click listener. It stays for the life of the page.
pub fn install(ctx: DelegateContext) {
    let _listener = window_event_listener(leptos::ev::click, move |ev| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        if let Some(control) = closest(&target, LIKE_CONTROL) {
            ev.prevent_default();
            activate_like(control, ctx);
        } else if let Some(trigger) = closest(&target, MODAL_TRIGGER) {
            ev.prevent_default();
            if let Some(action) = modal_action(&trigger) {
                ctx.modal.update(|m| m.open(action));
            }
        } else if closest(&target, LOGOUT_CONTROL).is_some() {
            ev.prevent_default();
            logout(ctx);
        }
    });
}

fn closest(el: &Element, selector: &str) -> Option<Element> {
    el.closest(selector).ok().flatten()
}

/// Explicit form action, or the check-in path for `data-reservation-id`.
fn modal_action(trigger: &Element) -> Option<String> {
    trigger
        .get_attribute("data-modal-action")
        .filter(|a| !a.is_empty())
        .or_else(|| trigger.get_attribute("data-reservation-id").map(|id| checkin_url(&id)))
}

fn activate_like(control: Element, ctx: DelegateContext) {
    let Some(url) = control.get_attribute("data-url").filter(|u| !u.is_empty()) else {
        log::warn!("like control without data-url ignored");
        return;
    };
    let Some(ticket) = ctx.likes.try_update_value(|t| t.begin(&url)) else {
        return;
    };
    let config = ctx.config.get_value();

    leptos::task::spawn_local(async move {
        let csrf = read_cookie(&config.csrf_cookie);
        match api::toggle_like(&url, csrf.as_deref(), &config).await {
            Ok(resp) => {
                if ctx.likes.try_update_value(|t| t.accept(&ticket)).unwrap_or(false) {
                    render_like(&control, LikeView::from(resp), &config);
                } else {
                    log::debug!("stale like response for {url} (seq {}) discarded", ticket.seq());
                }
            }
            Err(err) => report(&err, ctx.notices),
        }
    });
}

fn render_like(control: &Element, view: LikeView, config: &ClientConfig) {
    let _ = control.class_list().toggle_with_force(LIKED_CLASS, view.liked);
    if let Ok(Some(glyph)) = control.query_selector(LIKE_GLYPH) {
        glyph.set_text_content(Some(view.glyph(&config.liked_glyph, &config.unliked_glyph)));
    }
    if let Ok(Some(count)) = control.query_selector(LIKE_COUNT) {
        count.set_text_content(Some(&view.count.to_string()));
    }
}

fn logout(ctx: DelegateContext) {
    let config = ctx.config.get_value();
    leptos::task::spawn_local(async move {
        let csrf = read_cookie(&config.csrf_cookie);
        match api::logout(csrf.as_deref(), &config).await {
            Ok(()) => navigate(&config.login_path),
            Err(err) => {
                log::warn!("logout failed: {err}");
                let text = err.user_message().unwrap_or(config.messages.generic_failure.as_str()).to_owned();
                ctx.notices.update(|n| {
                    n.push(text);
                });
            }
        }
    });
}

/// Show server rejections; log and swallow everything else.
fn report(err: &ClientError, notices: RwSignal<NoticeState>) {
    match err.user_message() {
        Some(text) => {
            let text = text.to_owned();
            notices.update(|n| {
                n.push(text);
            });
        }
        None => log::warn!("like request failed: {err}"),
    }
}
