//! # Wallet Shell
//!
//! Page shell for a wallet-gated web application, built with Leptos (CSR).
//!
//! Every page is wrapped in [`components::PageContainer`], which
//!
//! - shows the routed content only while a wallet is connected, and a
//!   "Please connect with your wallet" prompt otherwise,
//! - renders a header with a back-to-home control and the wallet button,
//! - shows the latest status message below the content, with a spinner when
//!   the message ends in `"..."`,
//! - pins an attribution footer to the bottom of the viewport.
//!
//! The decisions behind all of this live in [`layout`] as pure projections
//! and are tested natively. [`components`] only renders them.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod config;
pub mod layout;
pub mod pages;
pub mod services;
pub mod state;
pub mod utils;

use app::App;

/// Id of the static splash element in `index.html`.
const LOADING_ELEMENT_ID: &str = "shell-loading";

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("wallet shell starting");

    if let Err(e) = config::project_info().validate() {
        log::warn!("project configuration: {e}");
    }

    if hide_loading_screen().is_none() {
        log::debug!("no #{LOADING_ELEMENT_ID} element to hide");
    }

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading screen once WASM has loaded.
fn hide_loading_screen() -> Option<()> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(LOADING_ELEMENT_ID)?;
    element.class_list().add_1("hidden").ok()?;
    element.set_attribute("style", "display: none !important;").ok()
}
