//! Helpers shared by the per-module WASM bindings.

use serde::de::DeserializeOwned;
use serde_wasm_bindgen::from_value;
use wasm_bindgen::prelude::*;

use crate::error::UtilError;

/// Reads an optional strategy name, falling back to the default.
pub(crate) fn strategy_from_js<T>(value: JsValue) -> Result<T, JsValue>
where
    T: DeserializeOwned + Default,
{
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    Ok(from_value(value)?)
}

// =============================================================================
// ERROR CONVERSION
// =============================================================================

impl From<UtilError> for JsValue {
    fn from(err: UtilError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}
