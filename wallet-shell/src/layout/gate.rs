//! Connection gate: chooses between protected content and the connect prompt.

/// Instruction shown in place of protected content while no wallet is connected.
pub const CONNECT_PROMPT: &str = "Please connect with your wallet";

/// Account descriptor supplied by the wallet provider.
///
/// The gate never looks inside it. Only the wallet control reads the fields
/// for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountInfo {
    address: String,
    chain_id: Option<String>,
}

impl AccountInfo {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            chain_id: None,
        }
    }

    pub fn with_chain_id(mut self, chain_id: impl Into<String>) -> Self {
        self.chain_id = Some(chain_id.into());
        self
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn chain_id(&self) -> Option<&str> {
        self.chain_id.as_deref()
    }
}

/// Latest connection status as seen by the shell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ConnectionSignal {
    Connected(AccountInfo),
    #[default]
    Disconnected,
}

impl ConnectionSignal {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionSignal::Connected(_))
    }
}

impl From<Option<AccountInfo>> for ConnectionSignal {
    fn from(account: Option<AccountInfo>) -> Self {
        match account {
            Some(account) => ConnectionSignal::Connected(account),
            None => ConnectionSignal::Disconnected,
        }
    }
}

/// The two mutually exclusive branches of the gate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateBranch<C> {
    /// Connected: children are passed through untouched.
    Content(C),
    /// Not connected: only [`CONNECT_PROMPT`] is shown.
    ConnectPrompt,
}

impl<C> GateBranch<C> {
    pub fn is_open(&self) -> bool {
        matches!(self, GateBranch::Content(_))
    }

    pub fn prompt(&self) -> Option<&'static str> {
        match self {
            GateBranch::Content(_) => None,
            GateBranch::ConnectPrompt => Some(CONNECT_PROMPT),
        }
    }
}

/// Select the render branch for `signal`.
///
/// A missing signal is treated as disconnected, so protected content is only
/// shown once a connection has been affirmatively reported.
pub fn gate<C>(signal: Option<&ConnectionSignal>, children: C) -> GateBranch<C> {
    match signal {
        Some(ConnectionSignal::Connected(_)) => GateBranch::Content(children),
        Some(ConnectionSignal::Disconnected) | None => GateBranch::ConnectPrompt,
    }
}
