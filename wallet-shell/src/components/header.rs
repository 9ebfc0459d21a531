//! Navigation header: back control, source link, wallet control.

use leptos::prelude::*;

use crate::components::wallet_connect::WalletConnect;
use crate::layout::footer::StaticLink;
use crate::layout::header::{BackControl, HeaderItem, HeaderModel};
use crate::services::navigation::use_router_navigator;

const GITHUB_MARK: &str = "M8 0C3.58 0 0 3.58 0 8c0 3.54 2.29 6.53 5.47 7.59.4.07.55-.17.55-.38 0-.19-.01-.82-.01-1.49-2.01.37-2.53-.49-2.69-.94-.09-.23-.48-.94-.82-1.13-.28-.15-.68-.52-.01-.53.63-.01 1.08.58 1.23.82.72 1.21 1.87.87 2.33.66.07-.52.28-.87.51-1.07-1.78-.2-3.64-.89-3.64-3.95 0-.87.31-1.59.82-2.15-.08-.2-.36-1.02.08-2.12 0 0 .67-.21 2.2.82.64-.18 1.32-.27 2-.27.68 0 1.36.09 2 .27 1.53-1.04 2.2-.82 2.2-.82.44 1.1.16 1.92.08 2.12.51.56.82 1.27.82 2.15 0 3.07-1.87 3.75-3.65 3.95.29.25.54.73.54 1.48 0 1.07-.01 1.93-.01 2.2 0 .21.15.46.55.38A8.013 8.013 0 0016 8c0-4.42-3.58-8-8-8z";

#[component]
fn SourceLink(link: StaticLink) -> impl IntoView {
    view! {
        <a
            class="header__source"
            href=link.url
            target="_blank"
            rel="noopener noreferrer"
            aria-label=link.label
        >
            <svg viewBox="0 0 16 16" width="24" height="24" fill="currentColor" aria-hidden="true">
                <path d=GITHUB_MARK></path>
            </svg>
        </a>
    }
}

/// Header for every page. Must be rendered under a `<Router>`.
#[component]
pub fn Header(#[prop(into)] model: Signal<HeaderModel>) -> impl IntoView {
    let navigator = use_router_navigator();

    let back = move || {
        let navigator = navigator.clone();
        model.with(|m| m.back).map(|control: BackControl| {
            view! {
                <button
                    class="header__back"
                    aria-label=BackControl::ARIA_LABEL
                    on:click=move |_| control.activate(&navigator)
                >
                    "‹"
                </button>
            }
        })
    };

    let trailing = model
        .with_untracked(|m| m.trailing.clone())
        .into_iter()
        .map(|item| match item {
            HeaderItem::SourceLink(link) => view! { <SourceLink link=link/> }.into_any(),
            HeaderItem::WalletControl => view! { <WalletConnect/> }.into_any(),
        })
        .collect_view();

    view! {
        <header
            class="header"
            style="display: flex; align-items: center; justify-content: space-between; padding: 0.5rem;"
        >
            <div class="header__left">{back}</div>
            <div
                class="header__right"
                style="display: flex; align-items: center; justify-content: flex-end; gap: 0.75rem; padding: 0.5rem;"
            >
                {trailing}
            </div>
        </header>
    }
}
