//! Router messages.

use crate::history::Location;
use crate::href::RouteRef;

/// Inputs to the router's update cycle.
#[derive(Debug, Clone)]
pub enum Msg {
    /// Append a history entry for the referenced route.
    Push(RouteRef),
    /// Overwrite the current history entry with the referenced route.
    Replace(RouteRef),
    /// A navigation was observed; emitted internally by the history
    /// bridge.
    LocationChanged(Location),
}
