/*!
 * User notifications raised by the widget.
 *
 * Notifications replace modal alerts: the controller hands them to a
 * `Notifier` and never blocks. A notification with `requires_ack` set keeps
 * the widget from accepting further interaction until it is acknowledged.
 */

use log::{info, warn};
use parking_lot::Mutex;
use std::fmt::Debug;
use std::sync::Arc;

/// What a notification is about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// The source text was cut back to the word limit
    WordLimitReached,
    /// Source and target language are identical
    SameLanguage,
    /// The translation request failed
    RequestFailed,
}

/// A message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub requires_ack: bool,
}

impl Notification {
    /// Notification the user has to acknowledge before continuing
    pub fn blocking(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            requires_ack: true,
        }
    }

    /// Informational notification (toast)
    pub fn toast(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            requires_ack: false,
        }
    }
}

/// Sink for widget notifications
pub trait Notifier: Send + Sync + Debug {
    /// Present a notification to the user; must not block
    fn notify(&self, notification: &Notification);
}

/// Notifier that writes notifications to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: &Notification) {
        if notification.requires_ack {
            warn!("{}", notification.message);
        } else {
            info!("{}", notification.message);
        }
    }
}

/// Notifier that keeps every notification; clones share the same record
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the notifications received so far
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().clone()
    }

    /// Kinds of the notifications received so far, in order
    pub fn kinds(&self) -> Vec<NotificationKind> {
        self.notifications.lock().iter().map(|n| n.kind).collect()
    }

    pub fn clear(&self) {
        self.notifications.lock().clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) {
        self.notifications.lock().push(notification.clone());
    }
}
