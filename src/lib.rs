//! zoompane-rs: viewport zoom coordination for scrollable editing surfaces.
//!
//! Given a content element whose visual scale can change, [`ZoomCoordinator`]
//! recomputes the scroll offsets of the element's ancestor scroll panes so
//! that a configured anchor point stays visually fixed across the change.
//! The presentation layer that owns panes and layout is abstracted behind
//! the [`host::ScrollHost`] trait.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod host;
pub mod telemetry;

pub use api::{SubscriptionId, ZoomCoordinator, ZoomCoordinatorConfig};
pub use error::{ZoomError, ZoomResult};
