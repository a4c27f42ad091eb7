//! The notification dispatched on observed elements.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Name of the event dispatched on the target whenever its crossing state changes.
///
/// The event is a `CustomEvent` that does not bubble.
pub const INTERSECT_EVENT: &str = "intersect";

/// The `detail` carried by an [`INTERSECT_EVENT`].
///
/// On the JS side this reads as `{ isIntersecting: boolean }`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct IntersectDetail {
    /// Whether the target currently touches the band.
    pub is_intersecting: bool,
}

impl IntersectDetail {
    /// Name of the `is_intersecting` field as seen from JS.
    pub const IS_INTERSECTING: &'static str = "isIntersecting";

    #[inline]
    pub const fn new(is_intersecting: bool) -> Self {
        Self { is_intersecting }
    }
}

impl From<bool> for IntersectDetail {
    fn from(is_intersecting: bool) -> Self {
        Self::new(is_intersecting)
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn detail_uses_js_field_name() {
        let json = serde_json::to_string(&IntersectDetail::new(true)).unwrap();
        assert_eq!(json, format!(r#"{{"{}":true}}"#, IntersectDetail::IS_INTERSECTING));

        let detail: IntersectDetail = serde_json::from_str(r#"{"isIntersecting":false}"#).unwrap();
        assert!(!detail.is_intersecting);
    }
}
