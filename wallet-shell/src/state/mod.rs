//! Application-wide reactive contexts.
//!
//! These are the external providers the shell reads from: the wallet
//! connection and the status log. The shell itself never writes to them.

pub mod log_context;
pub mod wallet;
