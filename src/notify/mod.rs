//! Outbound notification ports.
//!
//! Two one-way channels leave the panel: toasts for the user and named
//! events for the host. Neither expects a reply.

mod channel;
mod event;
mod toast;

pub use channel::{channel, ChannelNotifier, Notification};
pub use event::{ActionKind, EventListener, OutboundEvent};
pub use toast::{NullToastSink, Toast, ToastMode, ToastVariant, ToastSink};

use std::sync::Arc;

/// Fans notifications out to one toast sink and any number of listeners.
///
/// Listeners run in registration order.
#[derive(Clone)]
pub struct Notifier {
    toasts: Arc<dyn ToastSink>,
    listeners: Vec<Arc<dyn EventListener>>,
}

impl Notifier {
    pub fn new(toasts: Arc<dyn ToastSink>) -> Self {
        Self {
            toasts,
            listeners: Vec::new(),
        }
    }

    /// Register a listener for outbound events.
    pub fn subscribe(mut self, listener: Arc<dyn EventListener>) -> Self {
        self.listeners.push(listener);
        self
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn toast(&self, toast: Toast) {
        self.toasts.show_toast(toast);
    }

    pub fn emit(&self, event: &OutboundEvent) {
        tracing::debug!(event = event.name(), listeners = self.listeners.len(), "Emitting event");
        for listener in &self.listeners {
            listener.on_event(event);
        }
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(Arc::new(NullToastSink))
    }
}

impl From<ChannelNotifier> for Notifier {
    fn from(channel: ChannelNotifier) -> Self {
        let shared = Arc::new(channel);
        Notifier::new(shared.clone()).subscribe(shared)
    }
}
