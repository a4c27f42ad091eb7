//! Geometry of the intersection band.
//!
//! The band is the viewport rectangle shrunk by a root margin, expressed the same way as the
//! `rootMargin` option of `IntersectionObserver`. Negative values shrink the rectangle, so
//! `0px 0px -100% 0px` collapses it to a zero-height line along the top edge of the viewport.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ParseBandError;

/// Overlap ratio at which the observer reports. Any contact with the band counts.
pub const THRESHOLD: f64 = 0.0;

/// One side of a [`RootMargin`].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum Length {
    /// CSS pixels.
    Px(f64),
    /// Percentage of the viewport's matching dimension.
    Percent(f64),
}

impl Length {
    pub const ZERO: Length = Length::Px(0.0);

    fn value(self) -> f64 {
        match self {
            Length::Px(value) | Length::Percent(value) => value,
        }
    }
}

impl Default for Length {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(value) => write!(f, "{value}px"),
            Length::Percent(value) => write!(f, "{value}%"),
        }
    }
}

impl FromStr for Length {
    type Err = ParseBandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (number, unit): (&str, fn(f64) -> Length) = match strip_unit(s, "px") {
            Some(number) => (number, Length::Px),
            None => match s.strip_suffix('%') {
                Some(number) => (number, Length::Percent),
                None => (s, Length::Px),
            },
        };

        let value: f64 = number.parse().map_err(|_| ParseBandError::InvalidLength(s.to_owned()))?;
        if !value.is_finite() {
            return Err(ParseBandError::InvalidLength(s.to_owned()));
        }

        // only zero may omit its unit
        if number.len() == s.len() && value != 0.0 {
            return Err(ParseBandError::MissingUnit(s.to_owned()));
        }

        Ok(unit(value))
    }
}

/// CSS units are ASCII case-insensitive.
fn strip_unit<'a>(s: &'a str, unit: &str) -> Option<&'a str> {
    let split = s.len().checked_sub(unit.len())?;
    let suffix = s.get(split..)?;
    suffix.eq_ignore_ascii_case(unit).then(|| &s[..split])
}

impl TryFrom<String> for Length {
    type Error = ParseBandError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Length> for String {
    fn from(value: Length) -> Self {
        value.to_string()
    }
}

/// Offsets applied to each side of the viewport before intersections are computed.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct RootMargin {
    pub top: Length,
    pub right: Length,
    pub bottom: Length,
    pub left: Length,
}

impl RootMargin {
    pub const ZERO: RootMargin =
        RootMargin::new(Length::ZERO, Length::ZERO, Length::ZERO, Length::ZERO);

    #[inline]
    pub const fn new(top: Length, right: Length, bottom: Length, left: Length) -> Self {
        Self { top, right, bottom, left }
    }

    fn is_finite(&self) -> bool {
        [self.top, self.right, self.bottom, self.left].iter().all(|side| side.value().is_finite())
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

impl FromStr for RootMargin {
    type Err = ParseBandError;

    /// Parses the CSS `margin` shorthand: one to four lengths.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s.split_whitespace().map(Length::from_str).collect::<Result<Vec<_>, _>>()?;

        let (top, right, bottom, left) = match *values.as_slice() {
            [all] => (all, all, all, all),
            [vertical, horizontal] => (vertical, horizontal, vertical, horizontal),
            [top, horizontal, bottom] => (top, horizontal, bottom, horizontal),
            [top, right, bottom, left] => (top, right, bottom, left),
            _ => return Err(ParseBandError::ValueCount(values.len())),
        };

        Ok(Self { top, right, bottom, left })
    }
}

impl TryFrom<String> for RootMargin {
    type Error = ParseBandError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RootMargin> for String {
    fn from(value: RootMargin) -> Self {
        value.to_string()
    }
}

/// The region of the viewport an element has to touch to count as intersecting.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ViewportBand {
    root_margin: RootMargin,
}

impl ViewportBand {
    /// A band described by an arbitrary root margin.
    ///
    /// Returns an error if any side is not a finite number, which the browser would reject when
    /// constructing the observer.
    pub fn new(root_margin: RootMargin) -> Result<Self, ParseBandError> {
        if !root_margin.is_finite() {
            return Err(ParseBandError::InvalidLength(root_margin.to_string()));
        }

        Ok(Self { root_margin })
    }

    /// The zero-height line along the top edge of the viewport.
    ///
    /// This is the default.
    pub const fn top_line() -> Self {
        Self {
            root_margin: RootMargin::new(
                Length::ZERO,
                Length::ZERO,
                Length::Percent(-100.0),
                Length::ZERO,
            ),
        }
    }

    /// The zero-height line along the bottom edge of the viewport.
    pub const fn bottom_line() -> Self {
        Self {
            root_margin: RootMargin::new(
                Length::Percent(-100.0),
                Length::ZERO,
                Length::ZERO,
                Length::ZERO,
            ),
        }
    }

    #[inline]
    pub fn root_margin(&self) -> RootMargin {
        self.root_margin
    }
}

impl Default for ViewportBand {
    fn default() -> Self {
        Self::top_line()
    }
}

impl FromStr for ViewportBand {
    type Err = ParseBandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.parse()?)
    }
}
