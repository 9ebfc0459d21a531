//! Status line projection.
//!
//! Log producers mark an operation as in progress by ending the message with
//! [`BUSY_SUFFIX`]. The check is an exact suffix match: `"a...b"` is not busy.

/// Trailing marker that turns on the busy indicator.
pub const BUSY_SUFFIX: &str = "...";

/// One rendered status row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusLine {
    pub message: String,
    pub busy: bool,
}

/// Whether `message` denotes an operation still in progress.
pub fn is_busy(message: &str) -> bool {
    message.ends_with(BUSY_SUFFIX)
}

/// Project the current log message into a status row.
///
/// `None` means nothing is rendered at all, not an empty row.
pub fn status_line(log: Option<&str>) -> Option<StatusLine> {
    log.map(|message| StatusLine {
        message: message.to_string(),
        busy: is_busy(message),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_log_renders_nothing() {
        assert_eq!(status_line(None), None);
    }

    #[test]
    fn test_trailing_ellipsis_is_busy() {
        for message in ["Loading...", "Saving...", "...", "Waiting for signature...."] {
            let line = status_line(Some(message)).unwrap();
            assert!(line.busy, "{message:?} should be busy");
            assert_eq!(line.message, message);
        }
    }

    #[test]
    fn test_other_messages_are_idle() {
        for message in ["Saved", "Loading..", "a...b", "Done. ", "…", ""] {
            let line = status_line(Some(message)).unwrap();
            assert!(!line.busy, "{message:?} should not be busy");
            assert_eq!(line.message, message);
        }
    }

    #[test]
    fn test_unicode_ellipsis_is_not_the_marker() {
        assert!(!is_busy("Loading…"));
        assert!(is_busy("Chargement en cours..."));
    }
}
