//! Failure taxonomy for the panel.

use thiserror::Error;

use crate::fetch::FetchError;

/// Failures routed through the panel's error handler.
///
/// Each variant maps to a fixed user-facing message; the Display text
/// carries the underlying cause for the `error` event and logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    /// Mount-time setup failed.
    #[error("initialization failed: {cause}")]
    Initialization { cause: String },

    /// The item source rejected or failed the fetch.
    #[error("load failed: {0}")]
    Load(#[from] FetchError),

    /// The host reported an error it caught while rendering the panel.
    #[error("render failed ({context}): {cause}")]
    Render { cause: String, context: String },
}

impl PanelError {
    /// User-friendly message for toasts and the error banner.
    pub fn user_message(&self) -> &'static str {
        match self {
            PanelError::Initialization { .. } => "Failed to initialize component",
            PanelError::Load(_) => "Failed to load data",
            PanelError::Render { .. } => "An unexpected error occurred",
        }
    }
}

/// Input rejected before any load starts. Handled inline, never funnelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Input value is required")]
    EmptyInput,
}
