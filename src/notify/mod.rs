// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! User-facing notifications.
//!
//! The engine only knows the [`Notifier`] trait; how a message is shown is up
//! to the implementation.

use std::sync::{Mutex, MutexGuard, PoisonError};

use console::{style, Term};

use crate::cli::args::OutputFormat;

/// Receiver of the single message produced per submit attempt.
pub trait Notifier {
    /// Report a successful submission.
    fn notify_success(&self, message: &str);

    /// Report a failed submission.
    fn notify_error(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify_success(&self, message: &str) {
        (**self).notify_success(message)
    }

    fn notify_error(&self, message: &str) {
        (**self).notify_error(message)
    }
}

/// A recorded notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Error(String),
}

impl Notification {
    /// The message text.
    pub fn message(&self) -> &str {
        match self {
            Notification::Success(m) | Notification::Error(m) => m,
        }
    }

    /// Whether this is a success notification.
    pub fn is_success(&self) -> bool {
        matches!(self, Notification::Success(_))
    }

    /// "success" or "error".
    pub fn level(&self) -> &'static str {
        match self {
            Notification::Success(_) => "success",
            Notification::Error(_) => "error",
        }
    }

    /// Render as JSON.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "level": self.level(), "message": self.message() })
    }
}

/// Toast-style notifier for the terminal.
///
/// In JSON mode nothing is printed; the notification is kept so it can be
/// embedded in the single output document (see [`TerminalNotifier::last`]).
#[derive(Debug)]
pub struct TerminalNotifier {
    format: Option<OutputFormat>,
    emoji: bool,
    received: MemoryNotifier,
}

impl TerminalNotifier {
    /// Create a terminal notifier.
    pub fn new(format: Option<OutputFormat>, emoji: bool) -> Self {
        Self {
            format,
            emoji,
            received: MemoryNotifier::new(),
        }
    }

    /// The most recent notification.
    pub fn last(&self) -> Option<Notification> {
        self.received.last()
    }

    fn emit(&self, notification: Notification) {
        if self.format != Some(OutputFormat::Json) {
            let icon = match (notification.is_success(), self.emoji) {
                (true, true) => style("✓").green().bold(),
                (true, false) => style("OK").green().bold(),
                (false, true) => style("✗").red().bold(),
                (false, false) => style("ERROR").red().bold(),
            };

            let term = Term::stderr();
            if let Err(e) = term.write_line(&format!("\n{} {}", icon, notification.message())) {
                tracing::warn!("Failed to write notification: {}", e);
            }
        }

        self.received.record(notification);
    }
}

impl Notifier for TerminalNotifier {
    fn notify_success(&self, message: &str) {
        self.emit(Notification::Success(message.to_string()));
    }

    fn notify_error(&self, message: &str) {
        self.emit(Notification::Error(message.to_string()));
    }
}

/// Notifier that keeps every notification in memory.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl MemoryNotifier {
    /// Create an empty notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications received so far.
    pub fn notifications(&self) -> Vec<Notification> {
        self.lock().clone()
    }

    /// The most recent notification.
    pub fn last(&self) -> Option<Notification> {
        self.lock().last().cloned()
    }

    /// Forget all notifications.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn record(&self, notification: Notification) {
        self.lock().push(notification);
    }

    // A panic while holding the lock cannot leave the list half-written.
    fn lock(&self) -> MutexGuard<'_, Vec<Notification>> {
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Notifier for MemoryNotifier {
    fn notify_success(&self, message: &str) {
        self.record(Notification::Success(message.to_string()));
    }

    fn notify_error(&self, message: &str) {
        self.record(Notification::Error(message.to_string()));
    }
}

/// Notifier that emits `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify_success(&self, message: &str) {
        tracing::info!(target: "signup::notify", "{}", message);
    }

    fn notify_error(&self, message: &str) {
        tracing::warn!(target: "signup::notify", "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_notifier_records_in_order() {
        let notifier = MemoryNotifier::new();
        notifier.notify_error("first");
        notifier.notify_success("second");

        assert_eq!(
            notifier.notifications(),
            vec![
                Notification::Error("first".to_string()),
                Notification::Success("second".to_string()),
            ]
        );
        assert!(notifier.last().unwrap().is_success());

        notifier.clear();
        assert!(notifier.notifications().is_empty());
    }

    #[test]
    fn test_engine_with_tracing_notifier() {
        use crate::form::{FormState, FormValidationEngine};

        let engine = FormValidationEngine::with_defaults(TracingNotifier);
        assert!(!engine.submit(&FormState::new()).is_accepted());
    }

    #[test]
    fn test_memory_notifier_survives_poisoned_lock() {
        use std::sync::Arc;

        let notifier = Arc::new(MemoryNotifier::new());
        let poisoner = Arc::clone(&notifier);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.notifications.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        notifier.notify_error("after panic");
        assert_eq!(
            notifier.notifications(),
            vec![Notification::Error("after panic".to_string())]
        );
    }

    #[test]
    fn test_terminal_notifier_json_mode_keeps_notification() {
        let notifier = TerminalNotifier::new(Some(OutputFormat::Json), false);
        notifier.notify_error("first");
        notifier.notify_success("Signup Successful! Welcome to our platform!");

        let last = notifier.last().unwrap();
        assert_eq!(last.level(), "success");
        assert_eq!(
            last.to_json(),
            serde_json::json!({
                "level": "success",
                "message": "Signup Successful! Welcome to our platform!",
            })
        );
    }

    #[test]
    fn test_notifier_by_reference() {
        let notifier = MemoryNotifier::new();
        let by_ref = &notifier;
        by_ref.notify_success("done");
        assert_eq!(notifier.last().unwrap().message(), "done");
    }
}
