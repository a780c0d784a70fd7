mod observers;

pub use observers::{ZoomEvent, ZoomObserver};
