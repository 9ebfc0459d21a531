//! Navigation header projection and the back-navigation command.

use crate::config::ProjectInfo;
use crate::layout::footer::StaticLink;

/// Root location of the application.
pub const HOME_PATH: &str = "/";

/// Whether `path` is the root location. Both `""` and `"/"` count.
pub fn is_home(path: &str) -> bool {
    path.is_empty() || path == HOME_PATH
}

/// Outbound request to move the router somewhere else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationRequest {
    path: String,
}

impl NavigationRequest {
    pub fn to(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn home() -> Self {
        Self::to(HOME_PATH)
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Anything that can carry out a [`NavigationRequest`].
///
/// Dispatch is fire-and-forget: failures belong to the implementation.
pub trait Navigator {
    fn dispatch(&self, request: NavigationRequest);
}

/// The back affordance in the header's left slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BackControl;

impl BackControl {
    pub const ARIA_LABEL: &'static str = "Back to Home";

    /// The request emitted on activation. Always the root location.
    pub fn request(&self) -> NavigationRequest {
        NavigationRequest::home()
    }

    /// Handle one user activation: exactly one dispatch per call.
    pub fn activate(&self, navigator: &impl Navigator) {
        let request = self.request();
        log::debug!("back control activated, navigating to {}", request.path());
        navigator.dispatch(request);
    }
}

/// Items of the right slot, in display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeaderItem {
    SourceLink(StaticLink),
    WalletControl,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderModel {
    /// Left slot. `None` on the home path.
    pub back: Option<BackControl>,
    /// Right slot, always source link then wallet control.
    pub trailing: [HeaderItem; 2],
}

impl HeaderModel {
    pub fn project(path: &str, info: &ProjectInfo) -> Self {
        Self {
            back: (!is_home(path)).then_some(BackControl),
            trailing: [
                HeaderItem::SourceLink(info.repository_link()),
                HeaderItem::WalletControl,
            ],
        }
    }
}
