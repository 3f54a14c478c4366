//! State for the item panel.
//!
//! # Access
//!
//! | Data                     | Written by                                  | Kind      |
//! |--------------------------|---------------------------------------------|-----------|
//! | `PanelConfig`            | host, via `Panel::set_config`               | input     |
//! | `is_loading`             | reducer: load start, load settle, failure   | private   |
//! | `error`                  | reducer: `Failed` sets, load start/reset clear | private |
//! | `input_value`            | reducer: input change, reset                | private   |
//! | `items`                  | reducer: load success, reset                | private   |
//! | `has_data`, `is_action_disabled`, `has_error`, `error_message` | nobody, computed on read | derived |
//!
//! Fields are only writable from the reducer module; everything else gets a
//! read-only view through the accessors.

use crate::error::ValidationError;
use crate::fetch::Item;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelState {
    pub(super) is_loading: bool,
    /// User-facing message of the last failure. `Some` iff the panel is in
    /// the error state, so the flag and the message cannot drift apart.
    pub(super) error: Option<String>,
    pub(super) input_value: String,
    pub(super) items: Vec<Item>,
}

impl UiState for PanelState {}

impl PanelState {
    /// True only while a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Empty when there is no error.
    pub fn error_message(&self) -> &str {
        self.error.as_deref().unwrap_or("")
    }

    pub fn input_value(&self) -> &str {
        &self.input_value
    }

    /// Result of the last successful load.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn has_data(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn is_action_disabled(&self) -> bool {
        self.is_loading || self.input_value.trim().is_empty()
    }

    /// Check the input before an action runs. Never mutates.
    pub fn check_input(&self) -> Result<(), ValidationError> {
        if self.input_value.trim().is_empty() {
            Err(ValidationError::EmptyInput)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty_and_idle() {
        let state = PanelState::default();
        assert!(!state.is_loading());
        assert!(!state.has_error());
        assert_eq!(state.error_message(), "");
        assert_eq!(state.input_value(), "");
        assert!(!state.has_data());
    }

    #[test]
    fn action_disabled_for_blank_input_or_loading() {
        let mut state = PanelState::default();
        assert!(state.is_action_disabled());

        state.input_value = "   ".into();
        assert!(state.is_action_disabled());

        state.input_value = "abc".into();
        assert!(!state.is_action_disabled());

        state.is_loading = true;
        assert!(state.is_action_disabled());
    }

    #[test]
    fn check_input_trims() {
        let mut state = PanelState::default();
        state.input_value = " \t".into();
        assert_eq!(state.check_input(), Err(ValidationError::EmptyInput));

        state.input_value = " a ".into();
        assert_eq!(state.check_input(), Ok(()));
    }

    #[test]
    fn has_data_follows_items() {
        let mut state = PanelState::default();
        state.items.push(Item::new("1", "Item 1", "d"));
        assert!(state.has_data());
    }
}
