//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Result of a single reduction: the next state and the effects to run.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<S, E> {
    pub state: S,
    pub effects: Vec<E>,
}

impl<S, E> Transition<S, E> {
    /// A transition with no outbound effects.
    pub fn quiet(state: S) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    /// Append an effect.
    pub fn with(mut self, effect: E) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> (State, Effects).
/// Effects are executed by the caller once it no longer holds the state.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Outbound side effect described by a transition.
    type Effect;

    /// Process an intent and return the new state with its effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Transition<Self::State, Self::Effect>;
}
