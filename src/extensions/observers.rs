use serde::{Deserialize, Serialize};

/// Event stream exposed to zoom observers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ZoomEvent {
    /// The scale factor changed and all ancestor panes were reconciled.
    ZoomChanged { factor: f64 },
    /// A zoomable element was bound to the coordinator.
    ElementBound,
}

/// Hook interface for embedders reacting to zoom-level changes.
///
/// Observers run after the coordinator has finished mutating the host, so
/// geometry reads from inside a hook see the reconciled state.
pub trait ZoomObserver {
    fn on_event(&mut self, event: ZoomEvent);
}
