//! Sequence module.
//!
//! Pure functions over slices: deduplication, parity filters and extrema.
//! Every function borrows its input and returns a new value.

pub mod dedup;
pub mod extrema;
pub mod parity;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-exports for convenience
pub use dedup::{deduplicate, deduplicate_by_scan, deduplicate_with, DedupStrategy};
pub use extrema::{maximum, minimum};
pub use parity::{
    filter_even, filter_even_with, filter_odd, filter_odd_with, is_even_by_last_digit, Parity,
    ParityCheck,
};
