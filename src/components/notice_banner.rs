//! Dismissible notices for rejected requests and redirect flashes.

use leptos::prelude::*;

use crate::state::notice::{Notice, NoticeState};

#[component]
pub fn NoticeBanner(notices: RwSignal<NoticeState>) -> impl IntoView {
    view! {
        <div class="notice-banner" role="status" aria-live="polite">
            <For
                each=move || notices.with(|n| n.iter().cloned().collect::<Vec<_>>())
                key=|notice| notice.id
                children=move |notice: Notice| {
                    let id = notice.id;
                    view! {
                        <div class="notice-banner__item">
                            <span class="notice-banner__text">{notice.text}</span>
                            <button
                                class="notice-banner__dismiss"
                                title="Dismiss"
                                on:click=move |_| notices.update(|n| n.dismiss(id))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
