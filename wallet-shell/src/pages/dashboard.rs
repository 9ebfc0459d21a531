//! Dashboard Page - exercises the status banner with a simulated save

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::state::log_context::use_log_context;

/// Simulated latency of the save operation.
const SAVE_DELAY_MS: u32 = 1_200;
/// How long the completion notice stays up.
const SAVED_NOTICE_MS: u32 = 3_000;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let log = use_log_context();
    let (saving, set_saving) = signal(false);
    let (saves, set_saves) = signal(0u32);

    let on_save = move |_| {
        if saving.get_untracked() {
            return;
        }
        set_saving.set(true);
        log.set("Saving snapshot...");

        leptos::task::spawn_local(async move {
            TimeoutFuture::new(SAVE_DELAY_MS).await;
            set_saves.update(|n| *n += 1);
            set_saving.set(false);
            log.flash("Snapshot saved", SAVED_NOTICE_MS);
        });
    };

    view! {
        <section class="page page--dashboard" style="display: flex; flex-direction: column; align-items: center; gap: 1rem; padding: 2rem;">
            <h1 class="page__title">"Dashboard"</h1>
            <p class="page__subtitle">{move || format!("{} snapshots saved this session", saves.get())}</p>
            <button class="btn" disabled=move || saving.get() on:click=on_save>
                "Save snapshot"
            </button>
        </section>
    }
}
