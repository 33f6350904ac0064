//! Modal yes/no prompt answering the pending `ConfirmState` request.

use leptos::prelude::*;

use crate::state::confirm::ConfirmState;

#[component]
pub fn ConfirmDialog(confirm: RwSignal<ConfirmState>) -> impl IntoView {
    let answer = move |accepted: bool| {
        confirm.update(|c| {
            c.resolve(accepted);
        });
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
        "Escape" => {
            ev.prevent_default();
            answer(false);
        }
        "Enter" => {
            ev.prevent_default();
            answer(true);
        }
        _ => {}
    };

    view! {
        <Show when=move || confirm.with(ConfirmState::is_open)>
            <div class="confirm-dialog__backdrop" on:click=move |_| answer(false)>
                <div
                    class="confirm-dialog"
                    role="alertdialog"
                    tabindex="0"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <p class="confirm-dialog__message">
                        {move || confirm.with(|c| c.message().unwrap_or_default().to_owned())}
                    </p>
                    <div class="confirm-dialog__actions">
                        <button class="confirm-dialog__cancel" on:click=move |_| answer(false)>
                            "Cancel"
                        </button>
                        <button class="confirm-dialog__ok" on:click=move |_| answer(true)>
                            "OK"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
