use serde::{Deserialize, Serialize};

use crate::core::AnchorMode;

/// Coordinator tuning supplied at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomCoordinatorConfig {
    /// Viewport position pinned across scale changes.
    pub anchor_mode: AnchorMode,
    /// Scale factor the coordinator starts at. Must be finite and > 0.
    pub initial_zoom: f64,
}

impl Default for ZoomCoordinatorConfig {
    fn default() -> Self {
        Self {
            anchor_mode: AnchorMode::default(),
            initial_zoom: 1.0,
        }
    }
}

impl ZoomCoordinatorConfig {
    #[must_use]
    pub fn with_anchor_mode(mut self, anchor_mode: AnchorMode) -> Self {
        self.anchor_mode = anchor_mode;
        self
    }

    #[must_use]
    pub fn with_initial_zoom(mut self, initial_zoom: f64) -> Self {
        self.initial_zoom = initial_zoom;
        self
    }
}
