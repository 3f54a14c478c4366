//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents cover:
/// - User actions (typing, button presses)
/// - Host calls (reset, refresh)
/// - Async completions (fetch resolved or rejected)
///
/// Anything time-dependent travels inside the intent so reducers stay pure.
pub trait Intent: Send + 'static {}
