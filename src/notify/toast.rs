//! User-facing toast messages.

use serde::{Deserialize, Serialize};

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    Success,
    Error,
    Warning,
    Info,
}

/// How the host should dismiss a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastMode {
    /// Closes on user action or after a short timeout.
    #[default]
    Dismissable,
    /// Stays for a fixed time, cannot be closed early.
    Pester,
    /// Stays until the user closes it.
    Sticky,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub title: String,
    pub message: String,
    pub variant: ToastVariant,
    pub mode: ToastMode,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new("Success", message, ToastVariant::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new("Error", message, ToastVariant::Error)
    }

    fn new(title: &str, message: impl Into<String>, variant: ToastVariant) -> Self {
        Self {
            title: title.to_string(),
            message: message.into(),
            variant,
            mode: ToastMode::Dismissable,
        }
    }
}

/// Host-side receiver of toast requests.
///
/// Delivery is fire-and-forget; the panel never waits for an acknowledgment.
pub trait ToastSink: Send + Sync {
    fn show_toast(&self, toast: Toast);
}

/// Sink that drops every toast, for hosts without a notification area.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullToastSink;

impl ToastSink for NullToastSink {
    fn show_toast(&self, toast: Toast) {
        tracing::trace!(message = %toast.message, "Toast dropped (no sink)");
    }
}
