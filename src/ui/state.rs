//! Base trait for screen view state.

/// Marker trait for view state objects.
///
/// States should be:
/// - Plain values (Clone to hand out snapshots)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq so unchanged mutations do not trigger redraws)
pub trait UiState: Clone + PartialEq + Default + 'static {}
