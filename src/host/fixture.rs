//! In-memory [`ScrollHost`] with synchronous, exact layout physics.
//!
//! Stands in for a real presentation layer in tests and embedder
//! experiments: a pane's content extent tracks the zoomable element's
//! scaled extent immediately, and offset writes clamp the way a layout
//! engine clamps a scroll position.

use super::ScrollHost;
use crate::core::{Extent, ScrollOffset, clamp_offset};

/// Handle to a pane registered in a [`FixtureHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneId(usize);

/// Handle to the fixture's single zoomable element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZoomableId;

/// How a pane's content extent responds to the zoomable element's scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContentRule {
    /// Content extent is the element's base extent times the current scale.
    /// Nested panes relayout synchronously under this rule.
    TracksZoomable,
    /// Content extent is scripted and ignores the scale, like chrome that
    /// surrounds the editing surface without containing it.
    Fixed(Extent),
}

#[derive(Debug, Clone)]
struct FixturePane {
    viewport: Extent,
    rule: ContentRule,
    offset: ScrollOffset,
}

/// In-memory pane chain around one zoomable element.
#[derive(Debug, Clone)]
pub struct FixtureHost {
    element_base: Extent,
    scale: f64,
    panes: Vec<FixturePane>,
}

impl FixtureHost {
    /// Creates a host around a zoomable element of `element_base` unscaled
    /// extent, with no panes registered yet.
    #[must_use]
    pub fn new(element_base: Extent) -> Self {
        Self {
            element_base,
            scale: 1.0,
            panes: Vec::new(),
        }
    }

    /// Handle to the zoomable element.
    #[must_use]
    pub fn zoomable(&self) -> ZoomableId {
        ZoomableId
    }

    /// Registers the next enclosing scroll pane; call innermost first.
    /// Content tracks the zoomable element.
    pub fn add_pane(&mut self, viewport: Extent) -> PaneId {
        self.add_pane_with_rule(viewport, ContentRule::TracksZoomable)
    }

    /// Registers the next enclosing scroll pane with an explicit content
    /// rule; call innermost first.
    pub fn add_pane_with_rule(&mut self, viewport: Extent, rule: ContentRule) -> PaneId {
        self.panes.push(FixturePane {
            viewport,
            rule,
            offset: ScrollOffset::default(),
        });
        PaneId(self.panes.len() - 1)
    }

    /// Scrolls a pane directly, clamped like a user-initiated scroll.
    pub fn scroll_to(&mut self, pane: PaneId, offset: ScrollOffset) {
        let content = self.pane_content(&self.panes[pane.0]);
        let pane = &mut self.panes[pane.0];
        pane.offset = clamp_offset(offset, pane.viewport, content);
    }

    /// Current scroll offset of a pane.
    #[must_use]
    pub fn scroll(&self, pane: PaneId) -> ScrollOffset {
        self.panes[pane.0].offset
    }

    /// Current scale factor applied to the element.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Re-scripts a pane's viewport extent mid-scenario, e.g. a scrollbar
    /// appearing or the window resizing.
    pub fn resize_viewport(&mut self, pane: PaneId, viewport: Extent) {
        self.panes[pane.0].viewport = viewport;
    }

    /// Screen position of an unscaled content-space point.
    ///
    /// Assumes each pane's viewport sits at the origin of its parent's
    /// content, so the point scales with the element and every pane's
    /// scroll offset shifts it back.
    #[must_use]
    pub fn projected_position(&self, point: (f64, f64)) -> (f64, f64) {
        let mut x = point.0 * self.scale;
        let mut y = point.1 * self.scale;
        for pane in &self.panes {
            x -= pane.offset.x;
            y -= pane.offset.y;
        }
        (x, y)
    }

    fn pane_content(&self, pane: &FixturePane) -> Extent {
        match pane.rule {
            ContentRule::TracksZoomable => self.element_base.scaled(self.scale),
            ContentRule::Fixed(extent) => extent,
        }
    }
}

impl ScrollHost for FixtureHost {
    type Element = ZoomableId;
    type Pane = PaneId;

    fn scroll_ancestors(&self, _element: &ZoomableId) -> Vec<PaneId> {
        (0..self.panes.len()).map(PaneId).collect()
    }

    fn scroll_offset(&self, pane: &PaneId) -> ScrollOffset {
        self.panes[pane.0].offset
    }

    fn viewport_extent(&self, pane: &PaneId) -> Extent {
        self.panes[pane.0].viewport
    }

    fn content_extent(&self, pane: &PaneId) -> Extent {
        self.pane_content(&self.panes[pane.0])
    }

    fn set_scroll_offset(&mut self, pane: &PaneId, offset: ScrollOffset) {
        self.scroll_to(*pane, offset);
    }

    fn apply_scale(&mut self, _element: &ZoomableId, factor: f64) {
        self.scale = factor;
    }
}
