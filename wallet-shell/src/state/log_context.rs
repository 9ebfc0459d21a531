//! Status log context
//!
//! Holds the one-line message shown by the status banner. Producers follow the
//! convention that a message ending in `"..."` is still in progress.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct LogContext {
    pub message: RwSignal<Option<String>>,
    /// Bumped on every write, so a pending flash only clears its own message.
    generation: RwSignal<u64>,
}

impl LogContext {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(None),
            generation: RwSignal::new(0),
        }
    }

    pub fn current(&self) -> Option<String> {
        self.message.get()
    }

    pub fn set(&self, message: impl Into<String>) {
        self.publish(Some(message.into()));
    }

    pub fn clear(&self) {
        self.publish(None);
    }

    /// Show `message` for `ttl_ms`, then clear it unless something else has
    /// been logged in the meantime.
    pub fn flash(&self, message: impl Into<String>, ttl_ms: u32) {
        let generation = self.publish(Some(message.into()));

        let ctx = *self;
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(ttl_ms).await;
            ctx.expire(generation);
        });
    }

    fn publish(&self, message: Option<String>) -> u64 {
        match &message {
            Some(message) => log::debug!("status: {message}"),
            None => log::debug!("status cleared"),
        }
        self.generation.update_untracked(|g| *g += 1);
        self.message.set(message);
        self.generation.get_untracked()
    }

    /// Clear the message written as `generation`, if nothing replaced it.
    fn expire(&self, generation: u64) {
        if self.generation.try_get_untracked() == Some(generation) {
            self.message.set(None);
        }
    }
}

impl Default for LogContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_log_context() -> LogContext {
    let context = LogContext::new();
    provide_context(context);
    context
}

pub fn use_log_context() -> LogContext {
    expect_context::<LogContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_clear() {
        Owner::new().with(|| {
            let log = LogContext::new();
            assert_eq!(log.current(), None);

            log.set("Saving snapshot...");
            assert_eq!(log.current().as_deref(), Some("Saving snapshot..."));

            log.set("Snapshot saved");
            assert_eq!(log.current().as_deref(), Some("Snapshot saved"));

            log.clear();
            assert_eq!(log.current(), None);
        });
    }

    #[test]
    fn test_expiry_clears_its_own_message() {
        Owner::new().with(|| {
            let log = LogContext::new();
            let generation = log.publish(Some("Snapshot saved".into()));
            log.expire(generation);
            assert_eq!(log.current(), None);
        });
    }

    #[test]
    fn test_expiry_keeps_repeated_message() {
        Owner::new().with(|| {
            let log = LogContext::new();
            let first = log.publish(Some("Snapshot saved".into()));
            let second = log.publish(Some("Snapshot saved".into()));
            assert_ne!(first, second);

            log.expire(first);
            assert_eq!(log.current().as_deref(), Some("Snapshot saved"));

            log.expire(second);
            assert_eq!(log.current(), None);
        });
    }

    #[test]
    fn test_expiry_keeps_newer_message() {
        Owner::new().with(|| {
            let log = LogContext::new();
            let flashed = log.publish(Some("Wallet connected".into()));
            log.set("Saving snapshot...");

            log.expire(flashed);
            assert_eq!(log.current().as_deref(), Some("Saving snapshot..."));
        });
    }
}
