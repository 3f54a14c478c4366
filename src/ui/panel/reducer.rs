//! Reducer for the item panel.

use crate::notify::{OutboundEvent, Toast};
use crate::ui::mvi::{Reducer, Transition};

use super::intent::PanelIntent;
use super::state::PanelState;

/// Notification produced by a panel transition.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelEffect {
    Toast(Toast),
    Emit(OutboundEvent),
}

/// Reducer for panel state transitions.
pub struct PanelReducer;

impl Reducer for PanelReducer {
    type State = PanelState;
    type Intent = PanelIntent;
    type Effect = PanelEffect;

    fn reduce(state: Self::State, intent: Self::Intent) -> Transition<PanelState, PanelEffect> {
        match intent {
            PanelIntent::Reset => Transition::quiet(PanelState {
                is_loading: state.is_loading,
                ..PanelState::default()
            }),

            PanelIntent::InputChanged { value } => {
                let event = OutboundEvent::InputChange {
                    is_valid: !value.trim().is_empty(),
                    value: value.clone(),
                };
                Transition::quiet(PanelState {
                    input_value: value,
                    ..state
                })
                .with(PanelEffect::Emit(event))
            }

            // Previous items stay visible while the new load runs.
            PanelIntent::LoadStarted => Transition::quiet(PanelState {
                is_loading: true,
                error: None,
                ..state
            }),

            PanelIntent::LoadSucceeded { items } => {
                Transition::quiet(PanelState { items, ..state })
                    .with(PanelEffect::Toast(Toast::success("Data loaded successfully")))
            }

            PanelIntent::LoadSettled => Transition::quiet(PanelState {
                is_loading: false,
                ..state
            }),

            PanelIntent::Failed { error, at } => {
                let message = error.user_message().to_string();
                let event = OutboundEvent::Error {
                    message: message.clone(),
                    error: error.to_string(),
                    timestamp: at,
                };
                Transition::quiet(PanelState {
                    is_loading: false,
                    error: Some(message.clone()),
                    ..state
                })
                .with(PanelEffect::Toast(Toast::error(message)))
                .with(PanelEffect::Emit(event))
            }
        }
    }
}
