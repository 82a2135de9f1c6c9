/// Marker trait for UI state objects.
///
/// States are cloned into new states rather than mutated, and compare with
/// `PartialEq` so tests can assert on whole states.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
