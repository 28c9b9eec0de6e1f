#![forbid(unsafe_code)]

//! Conversion between geographic coordinates and Maidenhead grid locators.
//!
//! ```
//! use gridlocator::{decode, encode, Coordinates};
//!
//! let munich = Coordinates::new(48.146666666666667, 11.608333333333333);
//! assert_eq!(encode(&munich).unwrap(), "JN58td");
//!
//! let corner = decode("JN58td").unwrap();
//! assert!((corner.latitude - munich.latitude).abs() < 0.1);
//! ```

pub mod coords;
pub mod decode;
pub mod encode;
pub mod error;
pub mod letters;
mod parse;
pub mod precision;
pub mod version;

pub use coords::Coordinates;
pub use decode::decode;
pub use encode::encode;
pub use error::{Axis, Component, LocatorError, Position, ValueError};
pub use precision::Precision;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
