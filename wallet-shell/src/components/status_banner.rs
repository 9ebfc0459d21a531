//! Transient status line below the page content.

use leptos::prelude::*;

use crate::layout::status::{status_line, StatusLine};

/// Busy indicator.
#[component]
pub fn Spinner() -> impl IntoView {
    view! { <span class="spinner" role="status" aria-label="Loading"></span> }
}

/// One-line status row. Renders nothing at all while `log` is `None`.
#[component]
pub fn StatusBanner(#[prop(into)] log: Signal<Option<String>>) -> impl IntoView {
    let line = Memo::new(move |_| log.with(|log| status_line(log.as_deref())));

    view! { <StatusRow line=line/> }
}

/// Renders an already projected [`StatusLine`].
#[component]
pub fn StatusRow(#[prop(into)] line: Signal<Option<StatusLine>>) -> impl IntoView {
    move || {
        line.get().map(|line| {
            view! {
                <div
                    class="status-banner"
                    style="flex-basis: 56px; display: flex; align-items: center; justify-content: center; gap: 1rem; padding: 1rem;"
                >
                    {line.busy.then(|| view! { <Spinner/> })}
                    <span class="status-banner__message">{line.message}</span>
                </div>
            }
        })
    }
}
