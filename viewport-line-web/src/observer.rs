use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use ::web_sys::Element;
use tracing::{debug, trace};
use viewport_line_core::{AttachError, CrossingFilter, ObserverAttributes, ViewportBand};

use crate::web_sys as backend;

/// Watches an element against a [`ViewportBand`] and dispatches an `intersect` event on it
/// whenever it starts or stops touching the band.
///
/// With the default band the event fires when the element's top edge scrolls past the top of the
/// viewport, and again when it scrolls back. Listeners receive a `CustomEvent` whose `detail` is
/// `{ isIntersecting: boolean }`; use [`intersect_detail()`](crate::intersect_detail) to read it
/// from Rust.
///
/// The observer stops on [`detach()`](Self::detach) or when dropped.
pub struct ViewportLineObserver {
    target: Element,
    band: ViewportBand,
    filter: Rc<Cell<CrossingFilter>>,
    handle: Option<backend::IntersectionObserverHandle>,
}

impl ViewportLineObserver {
    /// Starts observing `target` against [`ViewportBand::top_line()`].
    pub fn attach(target: &Element) -> Result<Self, AttachError> {
        Self::attach_with_attributes(target, ObserverAttributes::default())
    }

    /// Starts observing `target` with explicit [`ObserverAttributes`].
    ///
    /// Fails with [`AttachError::NotSupported`] if the host lacks `IntersectionObserver`, or with
    /// [`AttachError::Os`] if the host refuses to construct it.
    pub fn attach_with_attributes(
        target: &Element,
        attributes: ObserverAttributes,
    ) -> Result<Self, AttachError> {
        if !backend::has_intersection_observer() {
            return Err(AttachError::NotSupported);
        }

        let ObserverAttributes { band, report_initial } = attributes;
        let filter = Rc::new(Cell::new(CrossingFilter::new(report_initial)));
        let handle = Self::observe(target, &band, &filter)?;

        debug!(root_margin = %band.root_margin(), report_initial, "attached viewport observer");

        Ok(Self { target: target.clone(), band, filter, handle: Some(handle) })
    }

    /// Switches to a different band, re-attaching if detached.
    ///
    /// Listeners are not told again what they already know: the first report against the new band
    /// only produces an event if it differs from the last state dispatched, so an element that was
    /// announced as intersecting and is outside the new band gets `isIntersecting: false`.
    pub fn set_band(&mut self, band: ViewportBand) -> Result<(), AttachError> {
        let previous = self.filter.get();
        let filter = Rc::new(Cell::new(CrossingFilter::with_last(
            previous.report_initial(),
            previous.last(),
        )));
        let handle = Self::observe(&self.target, &band, &filter)?;

        // replacing drops, and thereby disconnects, the previous observer
        self.handle = Some(handle);
        self.filter = filter;
        self.band = band;
        debug!(root_margin = %band.root_margin(), "moved viewport observer to a new band");

        Ok(())
    }

    fn observe(
        target: &Element,
        band: &ViewportBand,
        filter: &Rc<Cell<CrossingFilter>>,
    ) -> Result<backend::IntersectionObserverHandle, AttachError> {
        backend::IntersectionObserverHandle::new(target, band, {
            let target = target.clone();
            let filter = Rc::clone(filter);
            move |is_intersecting| {
                trace!(is_intersecting, "intersection report");
                let mut state = filter.get();
                let detail = state.observe(is_intersecting);
                filter.set(state);

                if let Some(detail) = detail {
                    backend::dispatch_intersect(&target, detail);
                }
            }
        })
    }

    /// Stops observing. No `intersect` event is dispatched after this returns.
    ///
    /// Calling it again does nothing.
    pub fn detach(&mut self) {
        if let Some(handle) = self.handle.take() {
            drop(handle);
            debug!(root_margin = %self.band.root_margin(), "detached viewport observer");
        }
    }

    #[inline]
    pub fn is_attached(&self) -> bool {
        self.handle.is_some()
    }

    /// The observed element.
    #[inline]
    pub fn target(&self) -> &Element {
        &self.target
    }

    #[inline]
    pub fn band(&self) -> &ViewportBand {
        &self.band
    }

    /// The last state dispatched to listeners, if any.
    pub fn last_state(&self) -> Option<bool> {
        self.filter.get().last()
    }
}

impl fmt::Debug for ViewportLineObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportLineObserver")
            .field("target", &self.target)
            .field("band", &self.band)
            .field("attached", &self.is_attached())
            .field("last_state", &self.last_state())
            .finish()
    }
}

impl Drop for ViewportLineObserver {
    fn drop(&mut self) {
        self.detach();
    }
}
