//! Palindrome check.

use tracing::trace;

/// Returns true if `text` reads the same forwards and backwards.
///
/// Compares characters at mirrored positions `i` and `len - 1 - i` for
/// `i < len / 2`; the middle character of an odd-length string is never
/// compared. Case and whitespace are significant.
///
/// ```
/// use seqkit::is_palindrome;
///
/// assert!(is_palindrome("madam"));
/// assert!(!is_palindrome("hello"));
/// ```
pub fn is_palindrome(text: &str) -> bool {
    let half = text.chars().count() / 2;
    let result = text
        .chars()
        .zip(text.chars().rev())
        .take(half)
        .all(|(front, back)| front == back);
    trace!(len = text.len(), result, "is_palindrome");
    result
}
