//! Wallet connect / account button shown in the header.

use leptos::prelude::*;

use crate::services::wallet::{detect_provider, WalletState};
use crate::state::wallet::use_wallet_context;
use crate::utils::format::truncate_address;

fn button_label(state: &WalletState) -> String {
    match state {
        WalletState::Connected(account) => truncate_address(account.address()),
        WalletState::Connecting => "Connecting...".to_string(),
        WalletState::Disconnected => "Connect Wallet".to_string(),
        WalletState::Error(_) => "Retry Connect".to_string(),
    }
}

fn button_title(state: &WalletState, provider: Option<&str>) -> String {
    match (state, provider) {
        (WalletState::Connected(account), _) => format!("{} (click to disconnect)", account.address()),
        (WalletState::Error(message), _) => format!("Wallet error: {message}. Click to retry"),
        (_, Some(name)) => format!("Connect with {name}"),
        (_, None) => "No injected wallet found".to_string(),
    }
}

#[component]
pub fn WalletConnect() -> impl IntoView {
    let wallet = use_wallet_context();
    let provider = detect_provider().map(|p| p.name);

    let label = move || wallet.wallet.with(button_label);
    let title = move || wallet.wallet.with(|state| button_title(state, provider.as_deref()));

    let on_click = move |_| {
        if wallet.is_connected() {
            wallet.disconnect();
        } else {
            wallet.connect();
        }
    };

    view! {
        <button
            class=move || {
                wallet.wallet.with(|state| match state {
                    WalletState::Connected(_) => "wallet-connect wallet-connect--connected",
                    WalletState::Error(_) => "wallet-connect wallet-connect--error",
                    _ => "wallet-connect",
                })
            }
            disabled=move || wallet.is_connecting()
            title=title
            on:click=on_click
        >
            {label}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::gate::AccountInfo;
    use crate::services::wallet::WalletError;

    #[test]
    fn test_button_label() {
        assert_eq!(button_label(&WalletState::Disconnected), "Connect Wallet");
        assert_eq!(button_label(&WalletState::Error("x".into())), "Retry Connect");
        assert_eq!(button_label(&WalletState::Connecting), "Connecting...");

        let account = AccountInfo::new("0x52908400098527886E0F7030069857D2E4169EE7");
        assert_eq!(button_label(&WalletState::Connected(account)), "0x5290...9EE7");
    }

    #[test]
    fn test_button_title() {
        assert_eq!(
            button_title(&WalletState::Disconnected, Some("MetaMask")),
            "Connect with MetaMask"
        );
        assert_eq!(
            button_title(&WalletState::Disconnected, None),
            "No injected wallet found"
        );
        let account = AccountInfo::new("0xabc");
        assert_eq!(
            button_title(&WalletState::Connected(account), None),
            "0xabc (click to disconnect)"
        );
    }

    #[test]
    fn test_error_is_visible_on_button() {
        let error = WalletError::Rejected("User denied account authorization".into());
        let state = WalletState::Error(error.to_string());

        assert_ne!(button_label(&state), button_label(&WalletState::Disconnected));
        assert_eq!(
            button_title(&state, Some("MetaMask")),
            "Wallet error: request rejected: User denied account authorization. Click to retry"
        );
        assert_eq!(
            button_title(&WalletState::Error(WalletError::ProviderMissing.to_string()), None),
            "Wallet error: no injected wallet found. Click to retry"
        );
    }
}
