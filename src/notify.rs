//! Blocking user notifications (`alert` / `confirm`).

use std::sync::{Arc, Mutex};
use tracing::info;

pub trait Notifier {
    /// Show a message the user has to acknowledge.
    fn alert(&mut self, message: &str);

    /// Ask a yes/no question.
    fn confirm(&mut self, message: &str) -> bool;
}

/// Notifier for headless runs: writes to the log and auto-answers confirms.
#[derive(Debug, Clone)]
pub struct LogNotifier {
    confirm_answer: bool,
}

impl LogNotifier {
    pub fn new(confirm_answer: bool) -> Self {
        Self { confirm_answer }
    }
}

impl Notifier for LogNotifier {
    fn alert(&mut self, message: &str) {
        info!("[alert] {}", message);
    }

    fn confirm(&mut self, message: &str) -> bool {
        info!("[confirm] {} -> {}", message, self.confirm_answer);
        self.confirm_answer
    }
}

/// Notifier that records every message; the handle returned by
/// [`RecordingNotifier::messages`] stays readable after the notifier has
/// been moved into the application context.
#[derive(Debug, Clone)]
pub struct RecordingNotifier {
    confirm_answer: bool,
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn new(confirm_answer: bool) -> Self {
        Self {
            confirm_answer,
            messages: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn messages(&self) -> NotificationLog {
        NotificationLog {
            messages: Arc::clone(&self.messages),
        }
    }

    fn record(&self, message: String) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message);
        }
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&mut self, message: &str) {
        self.record(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.record(message.to_string());
        self.confirm_answer
    }
}

/// Shared view of the messages a [`RecordingNotifier`] has shown.
#[derive(Debug, Clone)]
pub struct NotificationLog {
    messages: Arc<Mutex<Vec<String>>>,
}

impl NotificationLog {
    pub fn all(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<String> {
        self.all().pop()
    }

    pub fn is_empty(&self) -> bool {
        self.all().is_empty()
    }
}
