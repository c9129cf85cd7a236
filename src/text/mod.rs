//! Text module.
//!
//! Character-level helpers over `&str`.

pub mod palindrome;
pub mod words;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use palindrome::is_palindrome;
pub use words::longest_word;
