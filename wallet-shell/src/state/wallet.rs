//! Wallet state management

use leptos::prelude::*;

use crate::layout::gate::{AccountInfo, ConnectionSignal};
use crate::services::wallet::{self as wallet_service, WalletError, WalletState};
use crate::state::log_context::LogContext;

/// How long the connect confirmation stays in the status banner.
const NOTICE_TTL_MS: u32 = 3_000;

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub wallet: RwSignal<WalletState>,
    log: LogContext,
}

impl WalletContext {
    pub fn new(log: LogContext) -> Self {
        Self {
            wallet: RwSignal::new(WalletState::Disconnected),
            log,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.wallet.with(WalletState::is_connected)
    }

    pub fn is_connecting(&self) -> bool {
        self.wallet.with(WalletState::is_connecting)
    }

    pub fn account(&self) -> Option<AccountInfo> {
        self.wallet.with(|state| state.account().cloned())
    }

    /// Reactive two-state view consumed by the shell.
    pub fn connection_signal(&self) -> ConnectionSignal {
        self.wallet.with(WalletState::connection_signal)
    }

    pub fn set_connected(&self, account: AccountInfo) {
        log::info!("wallet connected: {}", account.address());
        self.wallet.set(WalletState::Connected(account));
    }

    pub fn set_error(&self, error: &WalletError) {
        log::warn!("wallet error: {error}");
        self.wallet.set(WalletState::Error(error.to_string()));
    }

    pub fn disconnect(&self) {
        log::info!("wallet disconnected");
        self.wallet.set(WalletState::Disconnected);
    }

    fn apply(&self, account: Option<AccountInfo>) {
        match account {
            Some(account) => self.set_connected(account),
            None => self.disconnect(),
        }
    }

    /// Prompt the wallet for an account. Ignored while a request is in flight.
    ///
    /// The gate is closed until this succeeds, so progress and failures are
    /// shown on the wallet button rather than in the status banner.
    pub fn connect(&self) {
        if self.is_connecting() {
            return;
        }
        self.wallet.set(WalletState::Connecting);

        let ctx = *self;
        leptos::task::spawn_local(async move {
            match wallet_service::request_account().await {
                Ok(Some(account)) => {
                    ctx.set_connected(account);
                    ctx.log.flash("Wallet connected", NOTICE_TTL_MS);
                }
                Ok(None) => ctx.disconnect(),
                Err(e) => ctx.set_error(&e),
            }
        });
    }

    /// Pick up an existing authorization and follow account changes made in
    /// the wallet itself.
    pub fn restore(&self) {
        let ctx = *self;
        if !wallet_service::watch_accounts(move |account| ctx.apply(account)) {
            log::info!("no injected wallet, skipping account subscription");
        }

        leptos::task::spawn_local(async move {
            match wallet_service::authorized_account().await {
                Ok(Some(account)) => ctx.set_connected(account),
                Ok(None) => {}
                Err(e) => log::warn!("could not restore wallet session: {e}"),
            }
        });
    }
}

pub fn provide_wallet_context(log: LogContext) -> WalletContext {
    let context = WalletContext::new(log);
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
