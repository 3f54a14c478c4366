//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow in the component layer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑          │
//!    │          └──→ Effects ──→ Host (toasts, events)
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Plain value describing everything the view needs
//! - **Intent**: User actions, host calls or async completions
//! - **Reducer**: Pure function producing the next state plus the
//!   outbound effects the transition implies

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::{Reducer, Transition};
pub use state::UiState;
