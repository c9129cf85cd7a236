//! WASM bindings for the math module.

use js_sys::BigInt;
use wasm_bindgen::prelude::*;

use super::factorial::{factorial_with, FactorialStrategy};
use crate::wasm::strategy_from_js;

/// `n!` as a `BigInt`. Throws for negative `n` or `n > 34`.
///
/// # Example (JavaScript)
/// ```js
/// factorial(4);               // 24n
/// factorial(4, "recursive");  // 24n
/// ```
#[wasm_bindgen]
pub fn factorial(n: i32, strategy: JsValue) -> Result<BigInt, JsValue> {
    let strategy: FactorialStrategy = strategy_from_js(strategy)?;
    let value = factorial_with(i64::from(n), strategy)?;
    BigInt::new(&JsValue::from_str(&value.to_string())).map_err(JsValue::from)
}
