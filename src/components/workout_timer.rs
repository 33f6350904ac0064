//! Workout stopwatch island.
//!
//! ARCHITECTURE
//! ============
//! `Stopwatch` owns the timing rules; this component maps button clicks onto
//! its transitions, keeps a `Ticker` alive exactly while running, arms the
//! leave-page guard through a `beforeunload` listener, and hands the recorded
//! duration to the completion page once the finish prompt is accepted.

use leptos::prelude::*;

use crate::config::ClientConfig;
#[cfg(feature = "csr")]
use crate::error::ClientError;
use crate::state::confirm::ConfirmState;
#[cfg(feature = "csr")]
use crate::state::confirm::answered;
use crate::state::stopwatch::{Stopwatch, StopwatchStatus};
use crate::util::clock::now_ms;
#[cfg(feature = "csr")]
use crate::util::routes::{completion_url, navigate};
use crate::util::ticker::Ticker;

#[component]
pub fn WorkoutTimer(
    #[prop(into)] reservation_id: String,
    config: StoredValue<ClientConfig>,
    confirm: RwSignal<ConfirmState>,
) -> impl IntoView {
    let watch = RwSignal::new(Stopwatch::default());
    let ticker = StoredValue::new_local(Ticker::default());
    let reservation_id = StoredValue::new(reservation_id);

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::beforeunload, move |ev| {
            if watch.with_untracked(Stopwatch::unsaved_work) {
                ev.prevent_default();
                ev.set_return_value(&config.with_value(|c| c.messages.leave_prompt.clone()));
            }
        });
        on_cleanup(move || handle.remove());
    }

    let on_start = move |_| match watch.try_update(|w| w.start(now_ms())) {
        Some(Ok(())) => {
            let period = config.with_value(|c| c.tick_interval_ms);
            ticker.update_value(|t| {
                t.start(period, move || watch.maybe_update(|w| w.tick(now_ms())));
            });
        }
        Some(Err(e)) => leptos::logging::warn!("start ignored: {e}"),
        None => {}
    };

    let on_pause = move |_| match watch.try_update(Stopwatch::pause) {
        Some(Ok(())) => ticker.update_value(Ticker::stop),
        Some(Err(e)) => leptos::logging::warn!("pause ignored: {e}"),
        None => {}
    };

    let on_finish = move |_| {
        if !watch.with_untracked(Stopwatch::can_finish) || confirm.with_untracked(ConfirmState::is_open) {
            return;
        }
        let prompt = config.with_value(|c| c.messages.finish_prompt.clone());
        let Some(answer) = confirm.try_update(|c| c.request(prompt)) else {
            return;
        };

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let confirmed = answered(answer).await;
            match watch.try_update(|w| w.finish(confirmed)) {
                Some(Ok(time)) => {
                    ticker.update_value(Ticker::stop);
                    navigate(&reservation_id.with_value(|id| completion_url(id, &time)));
                }
                Some(Err(ClientError::UserDeclined)) | None => {}
                Some(Err(e)) => leptos::logging::warn!("finish ignored: {e}"),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (answer, reservation_id);
        }
    };

    let status = move || watch.with(Stopwatch::status);
    let start_label = move || {
        config.with_value(|c| {
            watch.with(|w| w.start_label(&c.messages.start_label, &c.messages.resume_label).to_owned())
        })
    };
    let pause_label = config.with_value(|c| c.messages.pause_label.clone());
    let finish_label = config.with_value(|c| c.messages.finish_label.clone());

    view! {
        <div class="workout-timer" class:workout-timer--running=move || status() == StopwatchStatus::Running>
            <div class="workout-timer__display">{move || watch.with(Stopwatch::display)}</div>
            <div class="workout-timer__controls">
                <Show when=move || matches!(status(), StopwatchStatus::Idle | StopwatchStatus::Paused)>
                    <button class="workout-timer__start" on:click=on_start>
                        {start_label}
                    </button>
                </Show>
                <Show when=move || status() == StopwatchStatus::Running>
                    <button class="workout-timer__pause" on:click=on_pause>
                        {pause_label.clone()}
                    </button>
                </Show>
                <Show when=move || watch.with(Stopwatch::can_finish)>
                    <button class="workout-timer__finish" on:click=on_finish>
                        {finish_label.clone()}
                    </button>
                </Show>
            </div>
        </div>
    }
}
