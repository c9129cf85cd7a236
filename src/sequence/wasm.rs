//! WASM bindings for the sequence module.
//!
//! JavaScript numbers arrive as `f64`. Strategy arguments are optional
//! strings (`"hash-set"`, `"linear-scan"`, `"modulus"`, `"last-digit"`);
//! `undefined` selects the default.

use std::collections::HashSet;

use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;

use crate::wasm::strategy_from_js;
use super::dedup::{deduplicate_by_scan, DedupStrategy};
use super::extrema::{maximum as max_of, minimum as min_of};
use super::parity::{filter_even_with, filter_odd_with, ParityCheck};

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&Serializer::new())
}

// =============================================================================
// DEDUPLICATION
// =============================================================================

/// Hash-set dedup over floats with the same result as the linear scan:
/// `0.0` and `-0.0` are one value, and NaN never matches anything.
fn dedup_f64_hashed(values: &[f64]) -> Vec<f64> {
    let mut seen = HashSet::with_capacity(values.len());
    values
        .iter()
        .copied()
        .filter(|v| v.is_nan() || seen.insert(if *v == 0.0 { 0u64 } else { v.to_bits() }))
        .collect()
}

/// Removes repeated numbers, keeping first occurrences in order.
///
/// # Example (JavaScript)
/// ```js
/// deduplicate([1, 2, 2, 3, 1]);                 // [1, 2, 3]
/// deduplicate([1, 2, 2, 3, 1], "linear-scan");  // [1, 2, 3]
/// ```
#[wasm_bindgen]
pub fn deduplicate(values: JsValue, strategy: JsValue) -> Result<JsValue, JsValue> {
    let values: Vec<f64> = from_value(values)?;
    let out = match strategy_from_js(strategy)? {
        DedupStrategy::HashSet => dedup_f64_hashed(&values),
        DedupStrategy::LinearScan => deduplicate_by_scan(&values),
    };
    Ok(to_js_value(&out)?)
}

// =============================================================================
// PARITY
// =============================================================================

/// Keeps even numbers.
///
/// # Example (JavaScript)
/// ```js
/// filterEven([1, 2, 3, 4]);                // [2, 4]
/// filterEven([100000990], "last-digit");   // [100000990]
/// ```
#[wasm_bindgen(js_name = filterEven)]
pub fn filter_even(values: JsValue, check: JsValue) -> Result<JsValue, JsValue> {
    let values: Vec<f64> = from_value(values)?;
    let check: ParityCheck = strategy_from_js(check)?;
    Ok(to_js_value(&filter_even_with(&values, check))?)
}

/// Keeps odd numbers.
#[wasm_bindgen(js_name = filterOdd)]
pub fn filter_odd(values: JsValue, check: JsValue) -> Result<JsValue, JsValue> {
    let values: Vec<f64> = from_value(values)?;
    let check: ParityCheck = strategy_from_js(check)?;
    Ok(to_js_value(&filter_odd_with(&values, check))?)
}

// =============================================================================
// EXTREMA
// =============================================================================

/// Largest number. Throws on an empty array.
///
/// # Example (JavaScript)
/// ```js
/// maximum([-5, -2, -9]); // -2
/// ```
#[wasm_bindgen]
pub fn maximum(values: JsValue) -> Result<f64, JsValue> {
    let values: Vec<f64> = from_value(values)?;
    Ok(max_of(&values)?)
}

/// Smallest number. Throws on an empty array.
#[wasm_bindgen]
pub fn minimum(values: JsValue) -> Result<f64, JsValue> {
    let values: Vec<f64> = from_value(values)?;
    Ok(min_of(&values)?)
}
