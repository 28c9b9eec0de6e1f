//! Error types returned by the encoder and decoder.

use std::fmt;

/// The coordinate axis a locator character describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Latitude,
    Longitude,
}

/// The level of the grid hierarchy a locator character belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Field,     // 20° x 10°, letters
    Square,    // 2° x 1°, digits
    Subsquare, // 5' x 2.5', letters
}

/// Identifies one of the six characters of a locator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub axis: Axis,
    pub component: Component,
}

impl Position {
    pub const LONGITUDE_FIELD: Position = Position::new(Axis::Longitude, Component::Field);
    pub const LATITUDE_FIELD: Position = Position::new(Axis::Latitude, Component::Field);
    pub const LONGITUDE_SQUARE: Position = Position::new(Axis::Longitude, Component::Square);
    pub const LATITUDE_SQUARE: Position = Position::new(Axis::Latitude, Component::Square);
    pub const LONGITUDE_SUBSQUARE: Position =
        Position::new(Axis::Longitude, Component::Subsquare);
    pub const LATITUDE_SUBSQUARE: Position = Position::new(Axis::Latitude, Component::Subsquare);

    pub const fn new(axis: Axis, component: Component) -> Self {
        Position { axis, component }
    }

    /// A static label for this position, suitable for use as a parser context.
    pub fn label(self) -> &'static str {
        match (self.axis, self.component) {
            (Axis::Longitude, Component::Field) => "longitude field",
            (Axis::Latitude, Component::Field) => "latitude field",
            (Axis::Longitude, Component::Square) => "longitude square",
            (Axis::Latitude, Component::Square) => "latitude square",
            (Axis::Longitude, Component::Subsquare) => "longitude subsquare",
            (Axis::Latitude, Component::Subsquare) => "latitude subsquare",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A failure to map a single locator character or cell index.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ValueError {
    /// The character is not a letter in the range a-x (in either case).
    #[error("illegal character {0:?}")]
    InvalidCharacter(char),
    /// The character is not a decimal digit.
    #[error("{0:?} is not a decimal digit")]
    InvalidDigit(char),
    /// A computed cell index is negative, not finite, or past the end of the alphabet.
    #[error("number {0} out of bounds")]
    OutOfRange(f64),
}

impl ValueError {
    /// Attach the position the error occurred at.
    pub fn at(self, position: Position) -> LocatorError {
        LocatorError::Value {
            position,
            source: self,
        }
    }
}

/// Errors that can occur while converting to or from a grid locator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LocatorError {
    /// The locator is neither 4 nor 6 characters long. Holds the length in characters.
    #[error("grid location must be either 4 or 6 characters long, got {0}")]
    InvalidFormat(usize),
    #[error("{position} value: {source}")]
    Value {
        position: Position,
        #[source]
        source: ValueError,
    },
}

impl LocatorError {
    /// The position that failed, if the error concerns a single character.
    pub fn position(&self) -> Option<Position> {
        match self {
            LocatorError::InvalidFormat(_) => None,
            LocatorError::Value { position, .. } => Some(*position),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{LocatorError, Position, ValueError};

    #[test]
    fn test_error_messages_carry_position() {
        let err = ValueError::InvalidCharacter('Z').at(Position::LONGITUDE_FIELD);
        assert_eq!(
            err.to_string(),
            "longitude field value: illegal character 'Z'"
        );
        assert_eq!(err.position(), Some(Position::LONGITUDE_FIELD));

        let err = ValueError::InvalidDigit('x').at(Position::LATITUDE_SQUARE);
        assert_eq!(
            err.to_string(),
            "latitude square value: 'x' is not a decimal digit"
        );

        let err = ValueError::OutOfRange(24.0).at(Position::LATITUDE_SUBSQUARE);
        assert_eq!(
            err.to_string(),
            "latitude subsquare value: number 24 out of bounds"
        );
    }

    #[test]
    fn test_invalid_format_has_no_position() {
        let err = LocatorError::InvalidFormat(3);
        assert_eq!(err.position(), None);
        assert!(err.to_string().contains("either 4 or 6"));
    }
}
