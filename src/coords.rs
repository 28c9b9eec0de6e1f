//! Geographic coordinates.

use crate::{encode, error::LocatorError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in decimal degrees.
///
/// Latitude is expected in -90 to 90 and longitude in -180 to 180. Neither is validated here;
/// the encoder reports coordinates it can't place on the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Coordinates {
            latitude,
            longitude,
        }
    }

    /// Encode these coordinates as a six character grid locator.
    pub fn to_locator(&self) -> Result<String, LocatorError> {
        encode::encode(self)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5} {:.5}", self.latitude, self.longitude)
    }
}
