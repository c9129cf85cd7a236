//! WASM bindings for the text module.

use wasm_bindgen::prelude::*;

use super::{palindrome, words};

/// Whether `text` reads the same in both directions.
///
/// # Example (JavaScript)
/// ```js
/// isPalindrome("madam"); // true
/// ```
#[wasm_bindgen(js_name = isPalindrome)]
pub fn is_palindrome(text: &str) -> bool {
    palindrome::is_palindrome(text)
}

/// First longest whitespace-separated word, or `""`.
///
/// # Example (JavaScript)
/// ```js
/// longestWord("hi baby i love you"); // "baby"
/// ```
#[wasm_bindgen(js_name = longestWord)]
pub fn longest_word(text: &str) -> String {
    words::longest_word(text).to_string()
}
