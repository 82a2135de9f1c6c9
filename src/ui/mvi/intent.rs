/// Marker trait for intent objects.
///
/// An intent is either a user action (a list selection, a button press) or a
/// system event such as a countdown tick.
pub trait Intent: Send + 'static {}
