//! Wallet Shell Web App - Leptos Frontend

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    hooks::use_location,
    path,
};

use crate::components::PageContainer;
use crate::pages::{DashboardPage, HomePage};
use crate::state::log_context::{provide_log_context, use_log_context};
use crate::state::wallet::{provide_wallet_context, use_wallet_context};

#[component]
pub fn App() -> impl IntoView {
    let log = provide_log_context();
    let wallet = provide_wallet_context(log);
    wallet.restore();

    view! {
        <Router>
            <ShellRoutes/>
        </Router>
    }
}

/// Feeds the external signals into the shell and routes inside it.
#[component]
fn ShellRoutes() -> impl IntoView {
    let wallet = use_wallet_context();
    let log = use_log_context();
    let location = use_location();

    let connection = Signal::derive(move || Some(wallet.connection_signal()));
    let path = Signal::derive(move || location.pathname.get());
    let message = Signal::derive(move || log.current());

    view! {
        <PageContainer connection=connection path=path log=message>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=path!("/") view=HomePage/>
                <Route path=path!("/dashboard") view=DashboardPage/>
            </Routes>
        </PageContainer>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div style="display: flex; flex-direction: column; justify-content: center; align-items: center; gap: 1rem; padding: 2rem;">
            <h1>"404 - Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <A href="/">
                <span class="btn">"Go to Home"</span>
            </A>
        </div>
    }
}
