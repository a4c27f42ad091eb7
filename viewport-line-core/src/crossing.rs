//! Decides which observer reports turn into notifications.
//!
//! `IntersectionObserver` always reports once right after `observe()`, whatever the element's
//! position. An element that starts outside the band would then announce `false` without ever
//! having crossed anything, so that first report is swallowed unless asked for. After that only
//! actual changes of state get through.

use crate::event::IntersectDetail;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct CrossingFilter {
    last: Option<bool>,
    report_initial: bool,
}

impl CrossingFilter {
    /// With `report_initial` the very first report is delivered even when the element is outside
    /// the band.
    pub const fn new(report_initial: bool) -> Self {
        Self { last: None, report_initial }
    }

    /// Continues from a state listeners have already been told about.
    ///
    /// With `Some(last)` the first report is treated like any later one: it goes through only if
    /// it differs from `last`. With [`None`] this is the same as [`CrossingFilter::new()`].
    pub const fn with_last(report_initial: bool, last: Option<bool>) -> Self {
        Self { last, report_initial }
    }

    /// Feeds one observer report, returning the notification to dispatch, if any.
    pub fn observe(&mut self, is_intersecting: bool) -> Option<IntersectDetail> {
        let previous = self.last.replace(is_intersecting);

        match previous {
            Some(previous) if previous == is_intersecting => None,
            None if !is_intersecting && !self.report_initial => None,
            _ => Some(IntersectDetail::new(is_intersecting)),
        }
    }

    /// The state seen in the last report.
    #[inline]
    pub fn last(&self) -> Option<bool> {
        self.last
    }

    #[inline]
    pub fn report_initial(&self) -> bool {
        self.report_initial
    }

    /// Forgets the last report so the next one is treated as the first.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
