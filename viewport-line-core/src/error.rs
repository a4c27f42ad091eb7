//! Common error types.

use std::{error, fmt};

/// The error type for when a root margin can't be turned into a [`ViewportBand`].
///
/// [`ViewportBand`]: crate::band::ViewportBand
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBandError {
    /// The value is not a finite number followed by `px` or `%`.
    InvalidLength(String),
    /// A non-zero value without a unit.
    MissingUnit(String),
    /// The margin shorthand takes between one and four values.
    ValueCount(usize),
}

impl fmt::Display for ParseBandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            ParseBandError::InvalidLength(value) => {
                write!(f, "invalid length `{value}`, expected pixels or a percentage")
            },
            ParseBandError::MissingUnit(value) => {
                write!(f, "length `{value}` is missing a `px` or `%` unit")
            },
            ParseBandError::ValueCount(count) => {
                write!(f, "root margin takes one to four values, found {count}")
            },
        }
    }
}

impl error::Error for ParseBandError {}

/// An error that occurred while attaching an observer to an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachError {
    /// The target is not a DOM element.
    InvalidTarget,
    /// The host doesn't provide `IntersectionObserver`.
    NotSupported,
    /// The band couldn't be built from the given root margin.
    InvalidBand(ParseBandError),
    /// The host threw while setting up the observer.
    Os(String),
}

impl fmt::Display for AttachError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            AttachError::InvalidTarget => f.pad("the observed target is not an element"),
            AttachError::NotSupported => {
                f.pad("`IntersectionObserver` is not supported by this environment")
            },
            AttachError::InvalidBand(err) => write!(f, "invalid band: {err}"),
            AttachError::Os(message) => write!(f, "failed to create observer: {message}"),
        }
    }
}

impl error::Error for AttachError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            AttachError::InvalidBand(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseBandError> for AttachError {
    fn from(value: ParseBandError) -> Self {
        Self::InvalidBand(value)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn attach_error_messages() {
        assert_eq!(AttachError::InvalidTarget.to_string(), "the observed target is not an element");
        assert_eq!(
            AttachError::NotSupported.to_string(),
            "`IntersectionObserver` is not supported by this environment"
        );
        assert_eq!(
            AttachError::Os(String::from("SyntaxError: bad margin")).to_string(),
            "failed to create observer: SyntaxError: bad margin"
        );
        assert_eq!(
            ParseBandError::ValueCount(5).to_string(),
            "root margin takes one to four values, found 5"
        );
    }

    #[test]
    fn invalid_band_exposes_source() {
        let err = AttachError::from(ParseBandError::MissingUnit(String::from("10")));
        assert_eq!(err.to_string(), "invalid band: length `10` is missing a `px` or `%` unit");
        assert_eq!(
            err.source().map(ToString::to_string),
            Some(String::from("length `10` is missing a `px` or `%` unit"))
        );
        assert!(AttachError::InvalidTarget.source().is_none());
    }
}
