//! Home Page

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::wallet::use_wallet_context;

#[component]
pub fn HomePage() -> impl IntoView {
    let wallet = use_wallet_context();
    let address = move || {
        wallet
            .account()
            .map(|account| account.address().to_string())
            .unwrap_or_default()
    };

    view! {
        <section class="page page--home" style="display: flex; flex-direction: column; align-items: center; gap: 1rem; padding: 2rem;">
            <h1 class="page__title">"Welcome"</h1>
            <p class="page__subtitle">"Connected as"</p>
            <p class="page__address" style="font-family: monospace; word-break: break-all;">{address}</p>
            <A href="/dashboard">
                <span class="btn">"Open Dashboard"</span>
            </A>
        </section>
    }
}
