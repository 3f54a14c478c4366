//! Channel adapter delivering panel notifications to an async host task.

use serde::Serialize;
use tokio::sync::mpsc;

use super::event::{EventListener, OutboundEvent};
use super::toast::{Toast, ToastSink};

/// Anything the panel sends upward, merged into one stream.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Notification {
    Toast(Toast),
    Event(OutboundEvent),
}

/// Sender half; implements both notification ports.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Notification>,
}

/// Create a notifier plus the receiver the host drains.
pub fn channel() -> (ChannelNotifier, mpsc::UnboundedReceiver<Notification>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ChannelNotifier { tx }, rx)
}

impl ChannelNotifier {
    fn send(&self, notification: Notification) {
        if self.tx.send(notification).is_err() {
            tracing::trace!("Notification dropped (receiver gone)");
        }
    }
}

impl ToastSink for ChannelNotifier {
    fn show_toast(&self, toast: Toast) {
        self.send(Notification::Toast(toast));
    }
}

impl EventListener for ChannelNotifier {
    fn on_event(&self, event: &OutboundEvent) {
        self.send(Notification::Event(event.clone()));
    }
}
