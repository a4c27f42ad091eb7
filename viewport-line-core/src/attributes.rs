use crate::band::ViewportBand;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration applied when attaching an observer.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ObserverAttributes {
    pub band: ViewportBand,
    pub report_initial: bool,
}

impl ObserverAttributes {
    /// Sets the band the element has to touch.
    ///
    /// The default is [`ViewportBand::top_line()`].
    pub fn with_band(mut self, band: ViewportBand) -> Self {
        self.band = band;
        self
    }

    /// Whether the report the browser produces right after attaching is dispatched even when the
    /// element is outside the band.
    ///
    /// Disabled by default: an element that starts outside stays silent until its first crossing.
    pub fn with_report_initial(mut self, report_initial: bool) -> Self {
        self.report_initial = report_initial;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder() {
        let attributes = ObserverAttributes::default();
        assert_eq!(attributes.band, ViewportBand::top_line());
        assert!(!attributes.report_initial);

        let attributes =
            attributes.with_band(ViewportBand::bottom_line()).with_report_initial(true);
        assert_eq!(attributes.band, ViewportBand::bottom_line());
        assert!(attributes.report_initial);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_fields_use_defaults() {
        let attributes: ObserverAttributes =
            serde_json::from_str(r#"{"report_initial":true}"#).unwrap();
        assert_eq!(attributes, ObserverAttributes::default().with_report_initial(true));
    }
}
