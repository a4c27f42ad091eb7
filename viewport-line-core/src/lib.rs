//! # Core types for viewport-line
//!
//! Everything here is platform independent: the geometry of the intersection band, the payload of
//! the `intersect` notification, the filter that decides which observer reports become
//! notifications, and the error types. The browser glue lives in `viewport-line-web`.
//!
//! ## Cargo Features
//!
//! * `serde`: Enables serialization/deserialization of the configuration and payload types with
//!   [Serde](https://crates.io/crates/serde).

#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg_hide), doc(cfg_hide(doc, docsrs)))]
#![forbid(unsafe_code)]

pub mod attributes;
pub mod band;
pub mod crossing;
pub mod error;
pub mod event;

pub use self::attributes::ObserverAttributes;
pub use self::band::{Length, RootMargin, ViewportBand, THRESHOLD};
pub use self::crossing::CrossingFilter;
pub use self::error::{AttachError, ParseBandError};
pub use self::event::{IntersectDetail, INTERSECT_EVENT};
