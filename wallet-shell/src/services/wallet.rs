//! Injected Wallet Integration via wasm-bindgen
//!
//! JavaScript interop with an EIP-1193 provider (`window.ethereum`). This is the
//! only place that talks to the wallet. Everything above it sees a
//! [`WalletState`] and, through it, a [`ConnectionSignal`].

use js_sys::Reflect;
use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;

use crate::layout::gate::{AccountInfo, ConnectionSignal};

/// EIP-1193 error code for a request the user declined.
const USER_REJECTED_CODE: f64 = 4001.0;
/// Code thrown by `requestAccounts` below when `window.ethereum` is absent.
const PROVIDER_MISSING_CODE: f64 = -1.0;

// ============================================================================
// JAVASCRIPT INTEROP
// ============================================================================

#[wasm_bindgen(inline_js = "
export function detectProvider() {
    const eth = window.ethereum;
    if (!eth) {
        return null;
    }
    let name = 'Browser Wallet';
    if (eth.isMetaMask) {
        name = 'MetaMask';
    } else if (eth.isCoinbaseWallet) {
        name = 'Coinbase Wallet';
    } else if (eth.isRabby) {
        name = 'Rabby';
    }
    return { name: name };
}

export async function requestAccounts(method) {
    const eth = window.ethereum;
    if (!eth) {
        throw { code: -1, message: 'No injected wallet found' };
    }
    const accounts = await eth.request({ method: method });
    let chainId = null;
    try {
        chainId = await eth.request({ method: 'eth_chainId' });
    } catch (_) {
        chainId = null;
    }
    return { accounts: accounts, chainId: chainId };
}

export function onAccountsChanged(callback) {
    const eth = window.ethereum;
    if (eth && typeof eth.on === 'function') {
        eth.on('accountsChanged', callback);
        return true;
    }
    return false;
}
")]
extern "C" {
    #[wasm_bindgen(js_name = detectProvider)]
    fn detect_provider_js() -> JsValue;

    #[wasm_bindgen(js_name = requestAccounts, catch)]
    async fn request_accounts_js(method: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = onAccountsChanged)]
    fn on_accounts_changed_js(callback: &Closure<dyn FnMut(JsValue)>) -> bool;
}

// ============================================================================
// TYPES
// ============================================================================

/// Injected provider metadata.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProviderInfo {
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountsResponse {
    #[serde(default)]
    accounts: Vec<String>,
    chain_id: Option<String>,
}

impl AccountsResponse {
    /// The provider lists the active account first.
    fn into_account(self) -> Option<AccountInfo> {
        let address = self.accounts.into_iter().find(|a| !a.is_empty())?;
        let account = AccountInfo::new(address);
        Some(match self.chain_id {
            Some(chain_id) => account.with_chain_id(chain_id),
            None => account,
        })
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WalletError {
    #[error("no injected wallet found")]
    ProviderMissing,

    #[error("request rejected: {0}")]
    Rejected(String),

    #[error("wallet request failed: {0}")]
    Request(String),

    #[error("unexpected wallet response: {0}")]
    Decode(String),
}

impl WalletError {
    fn from_parts(code: Option<f64>, message: String) -> Self {
        match code {
            Some(code) if code == USER_REJECTED_CODE => WalletError::Rejected(message),
            Some(code) if code == PROVIDER_MISSING_CODE => WalletError::ProviderMissing,
            _ => WalletError::Request(message),
        }
    }
}

impl From<JsValue> for WalletError {
    fn from(value: JsValue) -> Self {
        let code = Reflect::get(&value, &JsValue::from_str("code"))
            .ok()
            .and_then(|c| c.as_f64());
        let message = Reflect::get(&value, &JsValue::from_str("message"))
            .ok()
            .and_then(|m| m.as_string())
            .or_else(|| value.as_string())
            .unwrap_or_else(|| format!("{value:?}"));
        WalletError::from_parts(code, message)
    }
}

/// Wallet connection state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum WalletState {
    #[default]
    Disconnected,
    Connecting,
    Connected(AccountInfo),
    Error(String),
}

impl WalletState {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletState::Connected(_))
    }

    pub fn is_connecting(&self) -> bool {
        matches!(self, WalletState::Connecting)
    }

    pub fn account(&self) -> Option<&AccountInfo> {
        match self {
            WalletState::Connected(account) => Some(account),
            _ => None,
        }
    }

    /// Project onto the gate's two-state signal. Only an established
    /// connection counts as connected.
    pub fn connection_signal(&self) -> ConnectionSignal {
        ConnectionSignal::from(self.account().cloned())
    }
}

// ============================================================================
// WALLET SERVICE
// ============================================================================

/// Injected provider, if the browser has one.
pub fn detect_provider() -> Option<ProviderInfo> {
    serde_wasm_bindgen::from_value::<Option<ProviderInfo>>(detect_provider_js())
        .ok()
        .flatten()
}

async fn accounts(method: &str) -> Result<Option<AccountInfo>, WalletError> {
    let response = request_accounts_js(method).await?;
    let response: AccountsResponse = serde_wasm_bindgen::from_value(response)
        .map_err(|e| WalletError::Decode(e.to_string()))?;
    Ok(response.into_account())
}

/// Ask the wallet to connect. May open the wallet's approval dialog.
pub async fn request_account() -> Result<Option<AccountInfo>, WalletError> {
    if detect_provider().is_none() {
        return Err(WalletError::ProviderMissing);
    }
    accounts("eth_requestAccounts").await
}

/// Account the site is already authorized for, without prompting.
pub async fn authorized_account() -> Result<Option<AccountInfo>, WalletError> {
    if detect_provider().is_none() {
        return Ok(None);
    }
    accounts("eth_accounts").await
}

/// Subscribe to account switches and disconnects made inside the wallet.
///
/// Returns `false` when there is no provider to subscribe to. The listener
/// lives as long as the page.
pub fn watch_accounts(mut on_change: impl FnMut(Option<AccountInfo>) + 'static) -> bool {
    let callback = Closure::<dyn FnMut(JsValue)>::new(move |accounts: JsValue| {
        let accounts: Vec<String> = serde_wasm_bindgen::from_value(accounts).unwrap_or_default();
        let response = AccountsResponse {
            accounts,
            chain_id: None,
        };
        on_change(response.into_account());
    });
    let subscribed = on_accounts_changed_js(&callback);
    callback.forget();
    subscribed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_account_is_active() {
        let response = AccountsResponse {
            accounts: vec!["0xaaa".into(), "0xbbb".into()],
            chain_id: Some("0x1".into()),
        };
        let account = response.into_account().unwrap();
        assert_eq!(account.address(), "0xaaa");
        assert_eq!(account.chain_id(), Some("0x1"));
    }

    #[test]
    fn test_empty_accounts_means_disconnected() {
        assert_eq!(AccountsResponse::default().into_account(), None);
        let blank = AccountsResponse {
            accounts: vec![String::new()],
            chain_id: None,
        };
        assert_eq!(blank.into_account(), None);
    }

    #[test]
    fn test_error_classification() {
        assert_eq!(
            WalletError::from_parts(Some(4001.0), "User rejected the request.".into()),
            WalletError::Rejected("User rejected the request.".into())
        );
        assert_eq!(
            WalletError::from_parts(Some(-1.0), "No injected wallet found".into()),
            WalletError::ProviderMissing
        );
        assert_eq!(
            WalletError::from_parts(Some(-32002.0), "Request already pending".into()),
            WalletError::Request("Request already pending".into())
        );
        assert_eq!(
            WalletError::from_parts(None, "boom".into()),
            WalletError::Request("boom".into())
        );
    }

    #[test]
    fn test_only_connected_state_opens_gate() {
        let account = AccountInfo::new("0xabc");
        assert!(WalletState::Connected(account.clone()).connection_signal().is_connected());
        for state in [
            WalletState::Disconnected,
            WalletState::Connecting,
            WalletState::Error("nope".into()),
        ] {
            assert_eq!(state.connection_signal(), ConnectionSignal::Disconnected);
        }
    }
}
