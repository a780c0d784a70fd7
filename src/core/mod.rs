pub mod anchor;
pub mod geometry;

pub use anchor::{AnchorFraction, AnchorMode, capture_anchor, resolve_offset};
pub use geometry::{Extent, ScrollOffset, clamp_axis, clamp_offset};
