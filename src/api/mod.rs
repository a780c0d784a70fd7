//! Public coordinator surface.

mod config;

pub use config::ZoomCoordinatorConfig;

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{AnchorFraction, capture_anchor, resolve_offset};
use crate::error::{ZoomError, ZoomResult};
use crate::extensions::{ZoomEvent, ZoomObserver};
use crate::host::ScrollHost;

/// Identifies a registered [`ZoomObserver`] for later removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

/// Keeps ancestor scroll panes visually stable across scale changes of a
/// bound zoomable element.
///
/// The coordinator owns its [`ScrollHost`] backend and holds at most one
/// element binding at a time. All operations are synchronous and run to
/// completion on the calling thread.
pub struct ZoomCoordinator<H: ScrollHost> {
    host: H,
    config: ZoomCoordinatorConfig,
    element: Option<H::Element>,
    zoom_factor: f64,
    observers: Vec<(SubscriptionId, Box<dyn ZoomObserver>)>,
    next_subscription: u64,
}

impl<H: ScrollHost> core::fmt::Debug for ZoomCoordinator<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ZoomCoordinator")
            .field("config", &self.config)
            .field("zoom_factor", &self.zoom_factor)
            .field("observers", &self.observers.len())
            .field("next_subscription", &self.next_subscription)
            .finish_non_exhaustive()
    }
}

impl<H: ScrollHost> ZoomCoordinator<H> {
    /// Creates a coordinator with default configuration: top-left anchor,
    /// zoom factor 1.0, no bound element.
    pub fn new(host: H) -> Self {
        Self {
            host,
            config: ZoomCoordinatorConfig::default(),
            element: None,
            zoom_factor: 1.0,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Creates a coordinator with explicit configuration.
    ///
    /// Fails with [`ZoomError::InvalidZoomFactor`] when `initial_zoom` is
    /// non-finite or not positive.
    pub fn with_config(host: H, config: ZoomCoordinatorConfig) -> ZoomResult<Self> {
        validate_zoom_factor(config.initial_zoom)?;
        Ok(Self {
            host,
            element: None,
            zoom_factor: config.initial_zoom,
            config,
            observers: Vec::new(),
            next_subscription: 0,
        })
    }

    /// Binds the coordinator to `element`, replacing any prior binding.
    ///
    /// Binding never adjusts scroll offsets by itself; an element without
    /// scrollable ancestors is a valid degenerate binding.
    pub fn set_zoomable_element(&mut self, element: H::Element) {
        self.element = Some(element);
        self.emit(ZoomEvent::ElementBound);
    }

    /// Current scale factor.
    #[must_use]
    pub fn zoom_level(&self) -> f64 {
        self.zoom_factor
    }

    #[must_use]
    pub fn config(&self) -> ZoomCoordinatorConfig {
        self.config
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Registers an observer for zoom events.
    pub fn subscribe(&mut self, observer: Box<dyn ZoomObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, observer));
        id
    }

    /// Removes a previously registered observer; unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.observers.retain(|(existing, _)| *existing != id);
    }

    /// Applies a new scale factor and reconciles every ancestor scroll pane
    /// so the configured anchor point stays visually fixed.
    ///
    /// Fails with [`ZoomError::InvalidZoomFactor`] before touching the host
    /// when `factor` is non-finite or not positive. A factor equal to the
    /// current one is a no-op. Without a bound element the factor is stored
    /// and observers are notified, but no geometry changes.
    pub fn set_zoom_level(&mut self, factor: f64) -> ZoomResult<()> {
        validate_zoom_factor(factor)?;
        if factor == self.zoom_factor {
            return Ok(());
        }

        let Some(element) = self.element.clone() else {
            debug!(factor, "zoom change with no bound element");
            self.zoom_factor = factor;
            self.emit(ZoomEvent::ZoomChanged { factor });
            return Ok(());
        };

        let panes = self.host.scroll_ancestors(&element);
        debug!(
            old_factor = self.zoom_factor,
            new_factor = factor,
            pane_count = panes.len(),
            "reconciling ancestor panes for zoom change"
        );

        let anchor_mode = self.config.anchor_mode;
        let mut anchors: SmallVec<[AnchorFraction; 4]> = SmallVec::with_capacity(panes.len());
        for pane in &panes {
            anchors.push(capture_anchor(
                self.host.scroll_offset(pane),
                self.host.viewport_extent(pane),
                self.host.content_extent(pane),
                anchor_mode,
            ));
        }

        self.host.apply_scale(&element, factor);

        // Inner panes first, re-reading geometry right before each write:
        // an inner offset write can change the extents the outer pane
        // reports, e.g. by revealing or hiding a scrollbar.
        for (pane, anchor) in panes.iter().zip(anchors.iter()) {
            let viewport = self.host.viewport_extent(pane);
            let content = self.host.content_extent(pane);
            let offset = resolve_offset(*anchor, viewport, content, anchor_mode);
            trace!(x = offset.x, y = offset.y, "pane reconciled");
            self.host.set_scroll_offset(pane, offset);
        }

        self.zoom_factor = factor;
        self.emit(ZoomEvent::ZoomChanged { factor });
        Ok(())
    }

    fn emit(&mut self, event: ZoomEvent) {
        for (_, observer) in &mut self.observers {
            observer.on_event(event);
        }
    }
}

fn validate_zoom_factor(factor: f64) -> ZoomResult<()> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(ZoomError::InvalidZoomFactor { factor });
    }
    Ok(())
}
