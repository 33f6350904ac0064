//! Page bootstrap: shared signals, overlay islands and delegated controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server owns routing and rendering. `mount` attaches what this page
//! needs: the overlay layer always, the workout timer only where the template
//! provides its mount point.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::checkin_modal::CheckinModal;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::notice_banner::NoticeBanner;
use crate::components::workout_timer::WorkoutTimer;
use crate::config::ClientConfig;
use crate::state::confirm::ConfirmState;
use crate::state::like::LikeTracker;
use crate::state::modal::ModalState;
use crate::state::notice::NoticeState;
use crate::util::delegate::{self, DelegateContext};
use crate::util::routes::{current_query, flash_message};

/// Attach every enhancement to the current page.
pub fn mount(config: ClientConfig) {
    let config = StoredValue::new(config);
    let notices = RwSignal::new(NoticeState::default());
    let confirm = RwSignal::new(ConfirmState::default());
    let modal = RwSignal::new(ModalState::default());
    let likes = StoredValue::new(LikeTracker::default());

    if let Some(text) = current_query().as_deref().and_then(flash_message) {
        notices.update(|n| {
            n.push(text);
        });
    }

    leptos::mount::mount_to_body(move || {
        view! {
            <NoticeBanner notices=notices />
            <ConfirmDialog confirm=confirm />
            <CheckinModal modal=modal config=config />
        }
    });

    mount_workout_timer(config, confirm);
    delegate::install(DelegateContext { config, notices, modal, likes });
}

fn mount_workout_timer(config: StoredValue<ClientConfig>, confirm: RwSignal<ConfirmState>) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (mount_id, field_id) = config.with_value(|c| (c.workout_mount_id.clone(), c.reservation_field_id.clone()));
    let Some(host) = document.get_element_by_id(&mount_id) else {
        return;
    };

    let reservation_id = document
        .get_element_by_id(&field_id)
        .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.value())
        .or_else(|| host.get_attribute("data-reservation-id"))
        .filter(|id| !id.trim().is_empty());
    let Some(reservation_id) = reservation_id else {
        log::warn!("#{mount_id} has no reservation id; workout timer not mounted");
        return;
    };
    let Ok(host) = host.dyn_into::<web_sys::HtmlElement>() else {
        return;
    };

    leptos::mount::mount_to(host, move || {
        view! { <WorkoutTimer reservation_id=reservation_id config=config confirm=confirm /> }
    })
    .forget();
}
