//! Parsing of grid locators back into coordinates.

use crate::{
    coords::Coordinates,
    error::{LocatorError, Position, ValueError},
    letters,
    parse::{self, Input},
    precision::Precision,
};
use nom::{
    character::complete::anychar,
    combinator::{all_consuming, cond, map_res},
    error::context,
    sequence::pair,
};

/// Converts a 4 or 6 character grid locator into latitude and longitude.
///
/// Letters are accepted in either case. The result is the south-west corner of the named cell,
/// so a 4 character locator is only accurate to within one square.
pub fn decode(locator: &str) -> Result<Coordinates, LocatorError> {
    let precision = Precision::of(locator)?;

    let (_, cells) = all_consuming(GridCells::parser(precision))(locator)
        .map_err(|e| parse::into_locator_error(locator, e))?;
    let coordinates = cells.to_coordinates();

    log::trace!("decoded {} as {}", locator, coordinates);
    Ok(coordinates)
}

/// Cell indices read from a locator, as `(longitude, latitude)` pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GridCells {
    field: (u8, u8),
    square: (u8, u8),
    subsquare: (u8, u8),
}

impl GridCells {
    fn parser<'a>(precision: Precision) -> impl FnMut(Input<'a>) -> parse::Result<'a, Self> {
        move |i| Self::parse(i, precision)
    }

    fn parse(i: Input, precision: Precision) -> parse::Result<Self> {
        let (i, field) = context(
            "Field",
            pair(
                letter(Position::LONGITUDE_FIELD),
                letter(Position::LATITUDE_FIELD),
            ),
        )(i)?;
        let (i, square) = context(
            "Square",
            pair(
                digit(Position::LONGITUDE_SQUARE),
                digit(Position::LATITUDE_SQUARE),
            ),
        )(i)?;

        // A 4 character locator names the corner of the square
        let (i, subsquare) = context(
            "Subsquare",
            cond(
                precision == Precision::Subsquare,
                pair(
                    letter(Position::LONGITUDE_SUBSQUARE),
                    letter(Position::LATITUDE_SUBSQUARE),
                ),
            ),
        )(i)?;

        let cells = GridCells {
            field,
            square,
            subsquare: subsquare.unwrap_or((0, 0)),
        };
        Ok((i, cells))
    }

    fn to_coordinates(self) -> Coordinates {
        let longitude = f64::from(self.field.0) * 20.
            + f64::from(self.square.0) * 2.
            + f64::from(self.subsquare.0) / 12.
            - 180.;
        let latitude = f64::from(self.field.1) * 10.
            + f64::from(self.square.1)
            + f64::from(self.subsquare.1) / 24.
            - 90.;
        Coordinates::new(latitude, longitude)
    }
}

/// Parse a single field or subsquare letter.
fn letter<'a>(position: Position) -> impl FnMut(Input<'a>) -> parse::Result<'a, u8> {
    context(
        position.label(),
        map_res(anychar, move |c| {
            letters::letter_to_number(c).map_err(|e| e.at(position))
        }),
    )
}

/// Parse a single square digit.
fn digit<'a>(position: Position) -> impl FnMut(Input<'a>) -> parse::Result<'a, u8> {
    context(
        position.label(),
        map_res(anychar, move |c: char| match c.to_digit(10) {
            // to_digit(10) never returns more than 9
            Some(d) => Ok(d as u8),
            None => Err(ValueError::InvalidDigit(c).at(position)),
        }),
    )
}
