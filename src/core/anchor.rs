use serde::{Deserialize, Serialize};

use crate::core::geometry::{Extent, ScrollOffset, clamp_offset};

/// Where in a pane's viewport the visually-stable point sits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AnchorMode {
    /// Pin the content point at the viewport's top-left corner.
    ///
    /// This is the default: it keeps the first visible line of a document
    /// in place, and a pane resting at scroll (0, 0) stays at (0, 0).
    TopLeft,
    /// Pin the content point at the viewport's geometric center.
    Center,
    /// Pin the content point at an arbitrary viewport position, given as a
    /// fraction of the viewport extent per axis. Values outside `[0, 1]`
    /// are clamped.
    Fraction { x: f64, y: f64 },
}

impl Default for AnchorMode {
    fn default() -> Self {
        Self::TopLeft
    }
}

impl AnchorMode {
    /// Viewport bias per axis: the anchor position as a fraction of the
    /// viewport extent.
    #[must_use]
    pub fn bias(self) -> (f64, f64) {
        match self {
            Self::TopLeft => (0.0, 0.0),
            Self::Center => (0.5, 0.5),
            Self::Fraction { x, y } => (x.clamp(0.0, 1.0), y.clamp(0.0, 1.0)),
        }
    }
}

/// Per-axis fraction of a pane's content extent sitting at the anchor
/// position of its viewport. Captured before a scale change, resolved
/// against post-change geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorFraction {
    pub x: f64,
    pub y: f64,
}

/// Captures the anchor fraction of a pane from its pre-zoom geometry.
///
/// A degenerate axis (content extent of zero) captures fraction 0, which
/// later resolves to offset 0.
#[must_use]
pub fn capture_anchor(
    offset: ScrollOffset,
    viewport: Extent,
    content: Extent,
    mode: AnchorMode,
) -> AnchorFraction {
    let (bias_x, bias_y) = mode.bias();
    AnchorFraction {
        x: axis_fraction(offset.x, viewport.width, content.width, bias_x),
        y: axis_fraction(offset.y, viewport.height, content.height, bias_y),
    }
}

fn axis_fraction(offset: f64, viewport: f64, content: f64, bias: f64) -> f64 {
    if content <= 0.0 {
        return 0.0;
    }
    (offset + bias * viewport) / content
}

/// Resolves the post-zoom scroll offset that keeps the captured anchor at
/// the same viewport position, clamped into the pane's valid scroll range.
///
/// `viewport` and `content` must be the pane's post-scale geometry: a pane
/// that gained or lost a scrollbar reports a different viewport extent here
/// than it did at capture time.
#[must_use]
pub fn resolve_offset(
    anchor: AnchorFraction,
    viewport: Extent,
    content: Extent,
    mode: AnchorMode,
) -> ScrollOffset {
    let (bias_x, bias_y) = mode.bias();
    let target = ScrollOffset::new(
        anchor.x * content.width - bias_x * viewport.width,
        anchor.y * content.height - bias_y * viewport.height,
    );
    clamp_offset(target, viewport, content)
}
