//! Base trait for UI state in MVI architecture.

/// Marker trait for component state objects.
///
/// States are cloned out for snapshots, compared to detect changes and
/// default-constructed when a component is created.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
