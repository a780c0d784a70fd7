mod fixture;

pub use fixture::{ContentRule, FixtureHost, PaneId, ZoomableId};

use crate::core::{Extent, ScrollOffset};

/// Contract implemented by any presentation backend that owns scroll panes.
///
/// The coordinator reads pane geometry and writes scroll offsets through
/// this trait so reconciliation logic stays isolated from any concrete
/// layout engine. Geometry reads reflect the backend's current layout:
/// after `apply_scale` (and after each offset write), subsequent reads must
/// return the updated extents.
pub trait ScrollHost {
    /// Handle to the zoomable content element.
    type Element: Clone;
    /// Handle to one scrollable ancestor pane.
    type Pane: Clone;

    /// Scrollable ancestors of `element`, innermost first. An element with
    /// no scrollable ancestors yields an empty chain.
    fn scroll_ancestors(&self, element: &Self::Element) -> Vec<Self::Pane>;

    fn scroll_offset(&self, pane: &Self::Pane) -> ScrollOffset;

    fn viewport_extent(&self, pane: &Self::Pane) -> Extent;

    fn content_extent(&self, pane: &Self::Pane) -> Extent;

    fn set_scroll_offset(&mut self, pane: &Self::Pane, offset: ScrollOffset);

    /// Applies `factor` as a top-left-origin scale to the zoomable element.
    fn apply_scale(&mut self, element: &Self::Element, factor: f64);
}
