//! viewport-line tells UI code when an element scrolls past a line at the top of the viewport.
//!
//! Attaching a [`ViewportLineObserver`] to an element makes it dispatch an `intersect`
//! [`CustomEvent`][custom_event] on that element every time the element starts or stops touching
//! the line. The event doesn't bubble and its `detail` is `{ isIntersecting: boolean }`. Typical
//! uses are showing a compact header once the page header scrolled away, or loading more content
//! when a sentinel reaches the top.
//!
//! ```no_run
//! # #[cfg(all(target_family = "wasm", target_os = "unknown"))]
//! # fn main() -> Result<(), viewport_line::AttachError> {
//! use viewport_line::ViewportLineObserver;
//!
//! let document = web_sys::window().unwrap().document().unwrap();
//! let header = document.get_element_by_id("header").unwrap();
//!
//! let mut observer = ViewportLineObserver::attach(&header)?;
//! // ... listen for `intersect` on `header` ...
//! observer.detach();
//! # Ok(())
//! # }
//! # #[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
//! # fn main() {}
//! ```
//!
//! # The band
//!
//! By default the line is the top edge of the viewport, expressed as the `IntersectionObserver`
//! root margin `0px 0px -100% 0px`. Other bands can be configured through [`ViewportBand`] and
//! [`ObserverAttributes`], using any root margin made of `px` and `%` values.
//!
//! Right after attaching, an element that is outside the band stays silent: the first event fires
//! on its first actual crossing. An element that starts inside the band fires
//! `isIntersecting: true` straight away. See [`ObserverAttributes::with_report_initial()`] to
//! change the former.
//!
//! # Lifecycle
//!
//! The observer owns the underlying `IntersectionObserver` and disconnects it on
//! [`ViewportLineObserver::detach()`] or when dropped. JS code gets the same lifecycle from the
//! exported `viewport(node, rootMargin?)` function, which returns an object with `update()` and
//! `destroy()`.
//!
//! # Cargo Features
//!
//! * `serde`: Enables serialization/deserialization of [`ObserverAttributes`], [`ViewportBand`] and
//!   [`IntersectDetail`] with [Serde](https://crates.io/crates/serde). Margins (de)serialize as
//!   their CSS strings.
//!
//! [custom_event]: https://developer.mozilla.org/en-US/docs/Web/API/CustomEvent

#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg_hide), doc(cfg_hide(doc, docsrs)))]
#![deny(rust_2018_idioms)]

pub use viewport_line_core::{
    attributes, band, crossing, error, event, AttachError, CrossingFilter, IntersectDetail, Length,
    ObserverAttributes, ParseBandError, RootMargin, ViewportBand, INTERSECT_EVENT, THRESHOLD,
};
#[cfg(web_platform)]
pub use viewport_line_web::{
    has_intersection_observer, intersect_detail, viewport, ViewportAction, ViewportLineObserver,
};
