//! Mapping between cell indices and the letters used for field and subsquare characters.
//!
//! Both fields and subsquares use the 24-letter alphabet a-x, so index `n` is written as the
//! letter `'a' + n`. Fields are conventionally uppercase and subsquares lowercase.

use crate::error::ValueError;

/// Number of letters in the locator alphabet (a-x).
pub const ALPHABET_LEN: u32 = 24;

/// Convert an index in the range 0-23 into a letter in the range a-x, uppercased if requested.
pub fn number_to_letter(number: u32, uppercase: bool) -> Result<char, ValueError> {
    if number >= ALPHABET_LEN {
        return Err(ValueError::OutOfRange(f64::from(number)));
    }

    // number < 24, so the narrowing is lossless
    let letter = char::from(b'a' + number as u8);
    if uppercase {
        Ok(letter.to_ascii_uppercase())
    } else {
        Ok(letter)
    }
}

/// Convert a letter in the range a-x (case insensitive) into its index 0-23.
pub fn letter_to_number(letter: char) -> Result<u8, ValueError> {
    match letter.to_ascii_lowercase() {
        c @ 'a'..='x' => Ok(c as u8 - b'a'),
        _ => Err(ValueError::InvalidCharacter(letter)),
    }
}
