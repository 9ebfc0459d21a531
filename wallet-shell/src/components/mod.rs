//! UI Components

pub mod connection_gate;
pub mod footer;
pub mod header;
pub mod page_container;
pub mod status_banner;
pub mod wallet_connect;

pub use connection_gate::{ConnectPrompt, ConnectionGate};
pub use footer::Footer;
pub use header::Header;
pub use page_container::{PageContainer, ShellContent};
pub use status_banner::{Spinner, StatusBanner, StatusRow};
pub use wallet_connect::WalletConnect;
