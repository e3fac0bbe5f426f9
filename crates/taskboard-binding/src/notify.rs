//! User-facing notifications.

use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{error, info};

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A message for the user, e.g. a toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

/// Presents notifications to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Notifier that writes to the tracing log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success => info!(message = %notification.message, "Notification"),
            NotificationLevel::Error => error!(message = %notification.message, "Notification"),
        }
    }
}

/// Notifier that forwards every notification over a channel.
///
/// Useful for UIs that render toasts on their own loop, and for tests.
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotifier {
    /// Create a notifier and the receiver its notifications arrive on.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        // Receiver might be dropped
        self.tx.send(notification).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_channel_notifier_forwards() {
        let (notifier, mut rx) = ChannelNotifier::new();
        notifier.notify(Notification::success("saved"));
        notifier.notify(Notification::error("boom"));

        assert_eq!(rx.recv().await, Some(Notification::success("saved")));
        assert_eq!(rx.recv().await.map(|n| n.level), Some(NotificationLevel::Error));
    }

    #[test]
    fn test_channel_notifier_survives_dropped_receiver() {
        let (notifier, rx) = ChannelNotifier::new();
        drop(rx);
        notifier.notify(Notification::success("nobody listening"));
    }
}
