//! Check-in confirmation modal.
//!
//! Opened by any `[data-modal-action]` trigger on the page. Confirming submits
//! a plain POST form to the trigger's action, so the server handles the
//! redirect exactly as it would for a non-scripted form.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::modal::ModalState;
use crate::util::cookie::read_cookie;

#[component]
pub fn CheckinModal(modal: RwSignal<ModalState>, config: StoredValue<ClientConfig>) -> impl IntoView {
    let close = move || modal.update(ModalState::close);
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    };
    let action = move || modal.with(|m| m.action().unwrap_or_default().to_owned());
    let csrf_field = config.with_value(|c| c.csrf_form_field.clone());
    let csrf_token = move || config.with_value(|c| read_cookie(&c.csrf_cookie)).unwrap_or_default();

    view! {
        <Show when=move || modal.with(ModalState::is_open)>
            <div class="checkin-modal__backdrop" on:click=move |_| close()>
                <div
                    class="checkin-modal"
                    role="dialog"
                    tabindex="0"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <h2 class="checkin-modal__title">"Check in"</h2>
                    <p class="checkin-modal__body">"Start the workout for this reservation now?"</p>
                    <form class="checkin-modal__form" method="post" action=action>
                        <input type="hidden" name=csrf_field.clone() value=csrf_token />
                        <div class="checkin-modal__actions">
                            <button type="button" class="checkin-modal__cancel" on:click=move |_| close()>
                                "Cancel"
                            </button>
                            <button type="submit" class="checkin-modal__confirm">
                                "Start"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
