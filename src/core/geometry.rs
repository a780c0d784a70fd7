use serde::{Deserialize, Serialize};

/// Width/height pair in pixels. Fractional values are legal because scaled
/// layouts produce sub-pixel extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

impl Extent {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The extent after applying a top-left-origin scale.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

/// Scroll offset of a pane, in pixels from the content origin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollOffset {
    pub x: f64,
    pub y: f64,
}

impl ScrollOffset {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Clamps a target offset into the scrollable range of one axis.
///
/// The range collapses to `[0, 0]` when content does not overflow the
/// viewport on that axis.
#[must_use]
pub fn clamp_axis(target: f64, viewport: f64, content: f64) -> f64 {
    let max = (content - viewport).max(0.0);
    target.clamp(0.0, max)
}

/// Clamps both axes of a target offset against pane geometry.
#[must_use]
pub fn clamp_offset(target: ScrollOffset, viewport: Extent, content: Extent) -> ScrollOffset {
    ScrollOffset {
        x: clamp_axis(target.x, viewport.width, content.width),
        y: clamp_axis(target.y, viewport.height, content.height),
    }
}
