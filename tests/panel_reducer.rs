//! Reducer tests, including invariants over arbitrary intent sequences.

use chrono::Utc;
use itempanel::error::PanelError;
use itempanel::fetch::{canned_items, FetchError, Item};
use itempanel::notify::{OutboundEvent, Toast};
use itempanel::ui::mvi::Reducer;
use itempanel::ui::panel::{PanelEffect, PanelIntent, PanelReducer, PanelState};
use proptest::prelude::*;

fn reduce_all(intents: impl IntoIterator<Item = PanelIntent>) -> PanelState {
    intents
        .into_iter()
        .fold(PanelState::default(), |state, intent| {
            PanelReducer::reduce(state, intent).state
        })
}

fn load_failure() -> PanelIntent {
    PanelIntent::Failed {
        error: PanelError::Load(FetchError::Unavailable("timeout".into())),
        at: Utc::now(),
    }
}

#[test]
fn success_replaces_items_wholesale() {
    let state = reduce_all([
        PanelIntent::LoadSucceeded {
            items: canned_items(),
        },
        PanelIntent::LoadSucceeded {
            items: vec![Item::new("9", "Only", "one")],
        },
    ]);
    assert_eq!(state.items().len(), 1);
    assert_eq!(state.items()[0].id, "9");
}

#[test]
fn success_emits_only_a_toast() {
    let transition = PanelReducer::reduce(
        PanelState::default(),
        PanelIntent::LoadSucceeded {
            items: canned_items(),
        },
    );
    assert_eq!(
        transition.effects,
        vec![PanelEffect::Toast(Toast::success("Data loaded successfully"))]
    );
}

#[test]
fn failure_toast_precedes_error_event() {
    let transition = PanelReducer::reduce(PanelState::default(), load_failure());
    assert!(matches!(transition.effects[0], PanelEffect::Toast(_)));
    assert!(matches!(
        transition.effects[1],
        PanelEffect::Emit(OutboundEvent::Error { .. })
    ));
}

#[test]
fn settle_only_touches_loading() {
    let loading = reduce_all([
        PanelIntent::InputChanged {
            value: "abc".into(),
        },
        PanelIntent::LoadStarted,
    ]);
    let transition = PanelReducer::reduce(loading.clone(), PanelIntent::LoadSettled);

    assert!(transition.effects.is_empty());
    assert!(!transition.state.is_loading());
    assert_eq!(transition.state.input_value(), loading.input_value());
}

#[test]
fn reset_clears_error_and_message_together() {
    let state = reduce_all([load_failure(), PanelIntent::Reset]);
    assert!(!state.has_error());
    assert_eq!(state.error_message(), "");
}

// -- Properties -----------------------------------------------------------------

fn arb_error() -> impl Strategy<Value = PanelError> {
    prop_oneof![
        "[a-z ]{0,8}".prop_map(|cause| PanelError::Initialization { cause }),
        "[a-z ]{0,8}".prop_map(|reason| PanelError::Load(FetchError::Unavailable(reason))),
        ("[a-z]{0,8}", "[a-z]{0,8}")
            .prop_map(|(cause, context)| PanelError::Render { cause, context }),
    ]
}

fn arb_items() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(
        ("[0-9]{1,3}", "[A-Za-z ]{0,10}").prop_map(|(id, label)| Item::new(id, label, "")),
        0..4,
    )
}

fn arb_intent() -> impl Strategy<Value = PanelIntent> {
    prop_oneof![
        Just(PanelIntent::Reset),
        "[ a-c]{0,4}".prop_map(|value| PanelIntent::InputChanged { value }),
        Just(PanelIntent::LoadStarted),
        arb_items().prop_map(|items| PanelIntent::LoadSucceeded { items }),
        Just(PanelIntent::LoadSettled),
        arb_error().prop_map(|error| PanelIntent::Failed {
            error,
            at: Utc::now(),
        }),
    ]
}

proptest! {
    #[test]
    fn error_state_is_consistent(intents in prop::collection::vec(arb_intent(), 0..40)) {
        let mut state = PanelState::default();
        for intent in intents {
            state = PanelReducer::reduce(state, intent).state;
            if state.has_error() {
                prop_assert!(!state.error_message().is_empty());
                prop_assert!(!state.is_loading());
            } else {
                prop_assert_eq!(state.error_message(), "");
            }
            prop_assert_eq!(state.has_data(), !state.items().is_empty());
            prop_assert_eq!(
                state.is_action_disabled(),
                state.is_loading() || state.input_value().trim().is_empty()
            );
        }
    }

    #[test]
    fn reset_is_idempotent(intents in prop::collection::vec(arb_intent(), 0..20)) {
        let state = reduce_all(intents);
        let once = PanelReducer::reduce(state.clone(), PanelIntent::Reset).state;
        let twice = PanelReducer::reduce(once.clone(), PanelIntent::Reset).state;

        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once.input_value(), "");
        prop_assert!(once.items().is_empty());
        prop_assert!(!once.has_error());
        prop_assert_eq!(once.is_loading(), state.is_loading());
    }

    #[test]
    fn check_input_matches_trimmed_emptiness(value in "[ \ta-z]{0,6}") {
        let state = reduce_all([PanelIntent::InputChanged { value: value.clone() }]);
        prop_assert_eq!(state.check_input().is_err(), value.trim().is_empty());
    }
}
