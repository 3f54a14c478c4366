//! Item panel component.
//!
//! A widget that takes presentation config from its host, loads a list of
//! items for the current input and reports outcomes through toasts and
//! named events.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Panel state and derived fields
//! - `intent.rs` - User/host/async actions
//! - `reducer.rs` - State transitions and their notifications
//! - `liveness.rs` - Mount status and load generations
//! - `component.rs` - Shared handle and action pipeline
//! - `lifecycle.rs` - Hooks invoked by the host

mod component;
mod intent;
mod lifecycle;
mod liveness;
mod reducer;
mod state;

pub use component::{Panel, PanelBuilder, PendingLoad};
pub use intent::PanelIntent;
pub use lifecycle::Lifecycle;
pub use liveness::MountStatus;
pub use reducer::{PanelEffect, PanelReducer};
pub use state::PanelState;
