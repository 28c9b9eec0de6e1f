//! Supported locator lengths.

use crate::error::LocatorError;
use derive_try_from_primitive::TryFromPrimitive;
use std::convert::TryFrom;

/// How deep into the grid hierarchy a locator goes. The discriminant is the locator length.
#[derive(Debug, Clone, Copy, TryFromPrimitive, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Precision {
    Square = 4,    // e.g. "JN58"
    Subsquare = 6, // e.g. "JN58td"
}

impl Precision {
    /// Determine the precision of a locator from its length in characters.
    pub fn of(locator: &str) -> Result<Self, LocatorError> {
        let length = locator.chars().count();
        u8::try_from(length)
            .ok()
            .and_then(|n| Precision::try_from(n).ok())
            .ok_or(LocatorError::InvalidFormat(length))
    }

    /// Number of characters in a locator of this precision.
    pub fn length(self) -> usize {
        self as usize
    }

    /// Size of the cell named by a locator of this precision, as `(latitude, longitude)` in
    /// degrees.
    pub fn span(self) -> (f64, f64) {
        match self {
            Precision::Square => (1., 2.),
            Precision::Subsquare => (1. / 24., 2. / 24.),
        }
    }
}
