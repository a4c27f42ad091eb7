//! # Web
//!
//! The browser side of viewport-line, compiled to WebAssembly with [`wasm-bindgen`][wasm_bindgen].
//!
//! [`ViewportLineObserver`] attaches an [`IntersectionObserver`][io] to an element and re-emits
//! its reports as `intersect` [`CustomEvent`][custom_event]s on that element. For JS callers,
//! [`viewport()`] wraps the same thing in the mount/destroy lifecycle used by element actions.
//!
//! The observer only ever runs on the main thread: the browser queues its callback as a task and
//! invokes it serially, so the crossing state lives inside the callback without any locking.
//!
//! [wasm_bindgen]: https://docs.rs/wasm-bindgen
//! [io]: https://developer.mozilla.org/en-US/docs/Web/API/IntersectionObserver
//! [custom_event]: https://developer.mozilla.org/en-US/docs/Web/API/CustomEvent

// Internals: `web_sys` holds the thin bindings (the observer handle, event construction and
// feature detection), `observer` holds the lifecycle on top of them and `action` exports that
// lifecycle to JS.

mod action;
mod observer;
pub(crate) mod web_sys;

pub use viewport_line_core::{
    AttachError, CrossingFilter, IntersectDetail, Length, ObserverAttributes, ParseBandError,
    RootMargin, ViewportBand, INTERSECT_EVENT, THRESHOLD,
};

pub use self::action::{viewport, ViewportAction};
pub use self::observer::ViewportLineObserver;
pub use self::web_sys::{has_intersection_observer, intersect_detail};
