//! Conversion from coordinates to a grid locator.

use crate::{
    coords::Coordinates,
    error::{LocatorError, Position, ValueError},
    letters,
    precision::Precision,
};

/// Converts the specified latitude and longitude into the six character Maidenhead grid locator.
///
/// Characters are emitted longitude first at each level: field letters (uppercase), square
/// digits, then subsquare letters (lowercase). Coordinates outside the valid range aren't
/// rejected up front; they fail with `ValueError::OutOfRange` at the first position whose cell
/// index can't be represented.
pub fn encode(coordinates: &Coordinates) -> Result<String, LocatorError> {
    let mut locator = String::with_capacity(Precision::Subsquare.length());

    // Field: 20° of longitude by 10° of latitude
    let lat = (coordinates.latitude + 90.) / 10.;
    let lng = (coordinates.longitude + 180.) / 20.;
    locator.push(letter(lng, Position::LONGITUDE_FIELD, true)?);
    locator.push(letter(lat, Position::LATITUDE_FIELD, true)?);

    // Square: tenths of a field
    let lat = 10. * remainder(lat);
    let lng = 10. * remainder(lng);
    locator.push(digit(lng, Position::LONGITUDE_SQUARE)?);
    locator.push(digit(lat, Position::LATITUDE_SQUARE)?);

    // Subsquare: 24ths of a square
    let lat = 24. * remainder(lat);
    let lng = 24. * remainder(lng);
    locator.push(letter(lng, Position::LONGITUDE_SUBSQUARE, false)?);
    locator.push(letter(lat, Position::LATITUDE_SUBSQUARE, false)?);

    log::trace!("encoded {} as {}", coordinates, locator);
    Ok(locator)
}

fn remainder(x: f64) -> f64 {
    x - x.floor()
}

/// Floor a scaled coordinate into a cell index. Fails on negative and non-finite values.
fn index(value: f64, position: Position) -> Result<u32, LocatorError> {
    let floor = value.floor();
    if floor >= 0. && floor <= f64::from(u32::MAX) {
        Ok(floor as u32)
    } else {
        Err(ValueError::OutOfRange(floor).at(position))
    }
}

fn letter(value: f64, position: Position, uppercase: bool) -> Result<char, LocatorError> {
    let n = index(value, position)?;
    letters::number_to_letter(n, uppercase).map_err(|e| e.at(position))
}

fn digit(value: f64, position: Position) -> Result<char, LocatorError> {
    let n = index(value, position)?;
    std::char::from_digit(n, 10).ok_or_else(|| ValueError::OutOfRange(f64::from(n)).at(position))
}

#[cfg(test)]
mod test {
    use super::encode;
    use crate::{
        coords::Coordinates,
        error::{LocatorError, Position, ValueError},
    };

    #[test]
    fn test_reference_locations() {
        let run_test = |lat: f64, lng: f64, expected: &str| {
            let result = encode(&Coordinates::new(lat, lng));
            assert_eq!(result.as_deref(), Ok(expected), "{} {}", lat, lng);
        };

        run_test(0., 0., "JJ00aa");
        run_test(48.146666666666667, 11.608333333333333, "JN58td"); // Munich
        run_test(-34.91, -56.211666666666667, "GF15vc"); // Montevideo
        run_test(38.92, -77.065, "FM18lw"); // Washington, D.C.
        run_test(-41.283333333333333, 174.745, "RE78ir"); // Wellington
    }

    #[test]
    fn test_output_shape() {
        let mut lat = -89.95;
        while lat < 90. {
            let mut lng = -179.95;
            while lng < 180. {
                let locator = encode(&Coordinates::new(lat, lng)).unwrap();
                let chars: Vec<char> = locator.chars().collect();
                assert_eq!(chars.len(), 6, "{}", locator);
                assert!(chars[..2].iter().all(|c| ('A'..='R').contains(c)), "{}", locator);
                assert!(chars[2..4].iter().all(|c| c.is_ascii_digit()), "{}", locator);
                assert!(chars[4..].iter().all(|c| ('a'..='x').contains(c)), "{}", locator);
                lng += 3.7;
            }
            lat += 1.3;
        }
    }

    #[test]
    fn test_lower_corner() {
        assert_eq!(encode(&Coordinates::new(-90., -180.)).unwrap(), "AA00aa");
    }

    #[test]
    fn test_latitude_out_of_range() {
        assert_eq!(
            encode(&Coordinates::new(150., 0.)),
            Err(ValueError::OutOfRange(24.).at(Position::LATITUDE_FIELD))
        );
        assert_eq!(
            encode(&Coordinates::new(-100., 0.)),
            Err(ValueError::OutOfRange(-1.).at(Position::LATITUDE_FIELD))
        );
    }

    #[test]
    fn test_longitude_out_of_range() {
        assert_eq!(
            encode(&Coordinates::new(0., 300.)),
            Err(ValueError::OutOfRange(24.).at(Position::LONGITUDE_FIELD))
        );
        assert_eq!(
            encode(&Coordinates::new(0., -200.)),
            Err(ValueError::OutOfRange(-1.).at(Position::LONGITUDE_FIELD))
        );
    }

    #[test]
    fn test_non_finite_coordinates() {
        let result = encode(&Coordinates::new(0., f64::NAN));
        assert!(matches!(
            result,
            Err(LocatorError::Value {
                position: Position::LONGITUDE_FIELD,
                source: ValueError::OutOfRange(_),
            })
        ));

        let result = encode(&Coordinates::new(f64::INFINITY, 0.));
        assert_eq!(result.unwrap_err().position(), Some(Position::LATITUDE_FIELD));
    }
}
