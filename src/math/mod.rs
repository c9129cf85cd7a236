//! Integer math helpers.

pub mod factorial;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use factorial::{factorial, factorial_with, FactorialStrategy, MAX_FACTORIAL_INPUT};
