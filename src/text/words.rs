//! Word-level helpers.

use tracing::trace;

/// Returns the first whitespace-separated token of maximal character count.
///
/// A later token only replaces the current one if it is strictly longer, so
/// ties go to the earliest word. Empty or all-whitespace text gives `""`.
/// Punctuation is part of the token it is attached to.
///
/// ```
/// use seqkit::longest_word;
///
/// assert_eq!(longest_word("hi baby i love you"), "baby");
/// ```
pub fn longest_word(text: &str) -> &str {
    let mut longest = "";
    let mut longest_len = 0;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        if len > longest_len {
            longest = word;
            longest_len = len;
        }
    }
    trace!(len = text.len(), longest_len, "longest_word");
    longest
}
