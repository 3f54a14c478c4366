//! Intents for the item panel.

use chrono::{DateTime, Utc};

use crate::error::PanelError;
use crate::fetch::Item;
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the panel reducer.
#[derive(Debug, Clone)]
pub enum PanelIntent {
    /// Clear input, items and error. Loading is left alone.
    Reset,

    /// User typed into the input.
    InputChanged { value: String },

    /// A load began.
    LoadStarted,

    /// The current load resolved.
    LoadSucceeded { items: Vec<Item> },

    /// The current load finished, whatever the outcome.
    LoadSettled,

    /// A failure reached the error handler.
    Failed { error: PanelError, at: DateTime<Utc> },
}

impl Intent for PanelIntent {}
