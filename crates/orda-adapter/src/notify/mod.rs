/*
[INPUT]:  Title, message and severity of user feedback
[OUTPUT]: Fire-and-forget notifications (log lines, recorded toasts)
[POS]:    Notification layer - user feedback boundary
[UPDATE]: When adding notification sinks
*/

use std::sync::Mutex;

use tracing::{info, warn};

use crate::types::Notification;

/// Trait for transient user notifications.
///
/// Delivery is fire-and-forget: implementations must not fail the caller.
pub trait Notifier: Send + Sync {
    fn notify(&self, title: &str, message: &str, is_error: bool);
}

/// Notifier that emits tracing events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, title: &str, message: &str, is_error: bool) {
        if is_error {
            warn!(title, message, "notification");
        } else {
            info!(title, message, "notification");
        }
    }
}

/// Notifier that keeps every notification, for tests and transcripts
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications delivered so far, oldest first
    pub fn notifications(&self) -> Vec<Notification> {
        self.sent.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Most recent notification
    pub fn last(&self) -> Option<Notification> {
        self.sent
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, title: &str, message: &str, is_error: bool) {
        self.sent
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(Notification::new(title, message, is_error));
    }
}
