//! Shell composition.
//!
//! ```text
//! +-------------------------------------------+
//! | [<]                        [src] [wallet] |  header
//! |-------------------------------------------|
//! |                                           |
//! |   children  |  "Please connect..."        |  gated content (flex: 1)
//! |                                           |
//! |   [spinner] status message                |  banner, only when open + log
//! |-------------------------------------------|
//! |   Made with ❤️ by ... | Capstone ...      |  footer (fixed)
//! +-------------------------------------------+
//! ```

use crate::config::ProjectInfo;
use crate::layout::footer::FooterModel;
use crate::layout::gate::{gate, ConnectionSignal, GateBranch};
use crate::layout::header::HeaderModel;
use crate::layout::status::{status_line, StatusLine};

/// All external inputs of one render, read together.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShellSnapshot {
    pub connection: Option<ConnectionSignal>,
    pub path: String,
    pub log: Option<String>,
}

impl ShellSnapshot {
    pub fn new(
        connection: Option<ConnectionSignal>,
        path: impl Into<String>,
        log: Option<String>,
    ) -> Self {
        Self {
            connection,
            path: path.into(),
            log,
        }
    }
}

/// The flexible middle region of the shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentSlot<C> {
    pub gate: GateBranch<C>,
    /// Rendered below the content. Always `None` while the gate is closed.
    pub banner: Option<StatusLine>,
}

impl<C> ContentSlot<C> {
    pub fn project(snapshot: &ShellSnapshot, children: C) -> Self {
        let gate = gate(snapshot.connection.as_ref(), children);
        let banner = if gate.is_open() {
            status_line(snapshot.log.as_deref())
        } else {
            None
        };
        Self { gate, banner }
    }
}

/// Full shell model: header, content slot, footer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellModel<C> {
    pub header: HeaderModel,
    pub content: ContentSlot<C>,
    pub footer: FooterModel,
}

impl<C> ShellModel<C> {
    pub fn project(snapshot: &ShellSnapshot, info: &ProjectInfo, children: C) -> Self {
        Self {
            header: HeaderModel::project(&snapshot.path, info),
            content: ContentSlot::project(snapshot, children),
            footer: FooterModel::project(info),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::gate::AccountInfo;

    fn connected() -> Option<ConnectionSignal> {
        Some(ConnectionSignal::Connected(AccountInfo::new("0xabc")))
    }

    #[test]
    fn test_connected_without_log_has_no_banner() {
        let snapshot = ShellSnapshot::new(connected(), "/", None);
        let slot = ContentSlot::project(&snapshot, "page");
        assert_eq!(slot.gate, GateBranch::Content("page"));
        assert_eq!(slot.banner, None);
    }

    #[test]
    fn test_connected_with_log_keeps_content() {
        let snapshot = ShellSnapshot::new(connected(), "/", Some("Saved".into()));
        let slot = ContentSlot::project(&snapshot, "page");
        assert_eq!(slot.gate, GateBranch::Content("page"));
        assert_eq!(
            slot.banner,
            Some(StatusLine {
                message: "Saved".into(),
                busy: false
            })
        );
    }

    #[test]
    fn test_closed_gate_suppresses_banner() {
        for connection in [None, Some(ConnectionSignal::Disconnected)] {
            let snapshot = ShellSnapshot::new(connection, "/dashboard", Some("Saving...".into()));
            let slot = ContentSlot::project(&snapshot, "page");
            assert_eq!(slot.gate, GateBranch::ConnectPrompt);
            assert_eq!(slot.banner, None);
        }
    }

    #[test]
    fn test_footer_and_header_always_present() {
        let info = ProjectInfo::default();
        let model = ShellModel::project(&ShellSnapshot::default(), &info, ());
        assert_eq!(model.footer, FooterModel::project(&info));
        assert_eq!(model.header.back, None);
    }
}
