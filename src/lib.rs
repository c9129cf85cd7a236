//! seqkit - small pure-function utilities over sequences and strings.
//!
//! Every operation borrows its input, returns a fresh value and touches no
//! shared state, so all of them are safe to call from any thread:
//!
//! - **Sequences**: order-preserving deduplication, even/odd filters,
//!   maximum/minimum
//! - **Text**: palindrome check, longest word
//! - **Math**: factorial (iterative or recursive)
//!
//! Diagnostics go through `tracing`; install a subscriber to see them.
//!
//! # Example
//!
//! ```rust
//! use seqkit::{deduplicate, factorial, filter_even, is_palindrome, longest_word, maximum};
//!
//! assert_eq!(deduplicate(&[1, 2, 2, 3, 1]), vec![1, 2, 3]);
//! assert_eq!(filter_even(&[1, 2, 3, 4]), vec![2, 4]);
//! assert!(is_palindrome("madam"));
//! assert_eq!(factorial(4)?, 24);
//! assert_eq!(longest_word("hi baby i love you"), "baby");
//! assert_eq!(maximum(&[-5, -2, -9])?, -2);
//! # Ok::<(), seqkit::UtilError>(())
//! ```

pub mod error;

pub mod math;
pub mod sequence;
pub mod text;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for convenience
pub use error::{UtilError, UtilResult};
pub use math::{factorial, factorial_with, FactorialStrategy};
pub use sequence::{
    deduplicate, deduplicate_by_scan, deduplicate_with, filter_even, filter_even_with,
    filter_odd, filter_odd_with, is_even_by_last_digit, maximum, minimum, DedupStrategy, Parity,
    ParityCheck,
};
pub use text::{is_palindrome, longest_word};
