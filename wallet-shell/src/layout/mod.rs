//! # Page Layout Projections
//!
//! Pure functions that turn the shell's external inputs into plain render
//! models. The Leptos components in [`crate::components`] render these models
//! and nothing else decides what is shown.
//!
//! ## Modules
//!
//! - [`gate`] - protected content vs. connect prompt
//! - [`status`] - transient status line with inferred busy indicator
//! - [`header`] - back control, source link, wallet control, navigation command
//! - [`footer`] - attribution links
//! - [`shell`] - composition of all of the above from one input snapshot
//!
//! Nothing in here touches the DOM, the router or a reactive owner, so every
//! projection is tested natively with plain `#[test]` functions.

pub mod footer;
pub mod gate;
pub mod header;
pub mod shell;
pub mod status;

pub use footer::{FooterModel, StaticLink};
pub use gate::{gate, AccountInfo, ConnectionSignal, GateBranch, CONNECT_PROMPT};
pub use header::{is_home, BackControl, HeaderItem, HeaderModel, NavigationRequest, Navigator, HOME_PATH};
pub use shell::{ContentSlot, ShellModel, ShellSnapshot};
pub use status::{is_busy, status_line, StatusLine, BUSY_SUFFIX};
