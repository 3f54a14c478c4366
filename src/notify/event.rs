//! Structured events the panel emits towards its host.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which action button produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Primary,
    Secondary,
}

/// Named outbound event.
///
/// Serializes as `{"name": "<event>", "detail": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", content = "detail", rename_all = "lowercase")]
pub enum OutboundEvent {
    /// Input text changed.
    #[serde(rename_all = "camelCase")]
    InputChange { value: String, is_valid: bool },

    /// Primary action accepted; a load is under way.
    PrimaryAction {
        action: ActionKind,
        value: String,
        timestamp: DateTime<Utc>,
    },

    /// Secondary action; the panel was reset.
    SecondaryAction {
        action: ActionKind,
        timestamp: DateTime<Utc>,
    },

    /// A failure went through the error handler.
    Error {
        message: String,
        error: String,
        timestamp: DateTime<Utc>,
    },
}

impl OutboundEvent {
    /// Event name as seen by the host.
    pub fn name(&self) -> &'static str {
        match self {
            OutboundEvent::InputChange { .. } => "inputchange",
            OutboundEvent::PrimaryAction { .. } => "primaryaction",
            OutboundEvent::SecondaryAction { .. } => "secondaryaction",
            OutboundEvent::Error { .. } => "error",
        }
    }

    pub fn primary(value: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        OutboundEvent::PrimaryAction {
            action: ActionKind::Primary,
            value: value.into(),
            timestamp,
        }
    }

    pub fn secondary(timestamp: DateTime<Utc>) -> Self {
        OutboundEvent::SecondaryAction {
            action: ActionKind::Secondary,
            timestamp,
        }
    }
}

/// Observer of outbound events.
///
/// Called synchronously from the emitting operation. Listeners must not
/// block; hand work off to a channel if it is slow.
pub trait EventListener: Send + Sync {
    fn on_event(&self, event: &OutboundEvent);
}

impl<F> EventListener for F
where
    F: Fn(&OutboundEvent) + Send + Sync,
{
    fn on_event(&self, event: &OutboundEvent) {
        self(event)
    }
}
