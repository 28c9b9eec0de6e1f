//! WebAssembly bindings for the `gridlocator` crate.

use crate::{Coordinates, LocatorError};
use wasm_bindgen::prelude::*;

fn to_js_error(e: LocatorError) -> JsValue {
    let msg = format!("Unable to convert grid location: Error: {}", e);
    JsValue::from_str(&msg)
}

/// Convert a latitude and longitude into a six character grid locator.
#[wasm_bindgen]
pub fn encode_locator(latitude: f64, longitude: f64) -> Result<String, JsValue> {
    crate::encode(&Coordinates::new(latitude, longitude)).map_err(to_js_error)
}

/// Convert a 4 or 6 character grid locator into a `{latitude, longitude}` object.
#[wasm_bindgen]
pub fn decode_locator(locator: &str) -> Result<JsValue, JsValue> {
    let coordinates = crate::decode(locator).map_err(to_js_error)?;
    match JsValue::from_serde(&coordinates) {
        Ok(v) => Ok(v),
        Err(_) => Err(JsValue::from_str("Unable to convert result to JSON!")),
    }
}
