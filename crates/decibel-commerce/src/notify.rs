//! Outcome notification surface.
//!
//! The engines report mutation outcomes (saves, validation problems,
//! persistence hiccups) through a [`Notifier`] — they decide the message
//! and severity, the host decides presentation. The CLI renders these to
//! the terminal; tests capture them with [`MemoryNotifier`].

use std::sync::Mutex;

/// How important a notification is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// A sink for user-facing messages.
pub trait Notifier {
    /// Deliver a message at the given severity.
    fn notify(&self, severity: Severity, message: &str);
}

/// A notifier that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _severity: Severity, _message: &str) {}
}

/// A notifier that records messages, for assertions in tests.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    messages: Mutex<Vec<(Severity, String)>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages delivered so far.
    pub fn messages(&self) -> Vec<(Severity, String)> {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Whether any message was delivered at `severity`.
    pub fn has(&self, severity: Severity) -> bool {
        self.messages().iter().any(|(s, _)| *s == severity)
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((severity, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_notifier_records_in_order() {
        let notifier = MemoryNotifier::new();
        notifier.notify(Severity::Success, "saved");
        notifier.notify(Severity::Warning, "could not persist");

        let messages = notifier.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], (Severity::Success, "saved".to_string()));
        assert!(notifier.has(Severity::Warning));
        assert!(!notifier.has(Severity::Error));
    }
}
