//! String relations compared by Unicode scalar value.
//!
//! No case folding, whitespace stripping or normalization is applied:
//! `"Racecar"` is not a palindrome and `"Arc"` is not an anagram of `"car"`.

use std::collections::HashMap;

/// True if `text` reads the same forward and backward.
///
/// ```rust
/// use fixture_core::text::is_palindrome;
///
/// assert!(is_palindrome("racecar"));
/// assert!(!is_palindrome("hello"));
/// assert!(is_palindrome(""));
/// ```
pub fn is_palindrome(text: &str) -> bool {
    text.chars().eq(text.chars().rev())
}

/// True if both strings contain the same characters with the same counts.
///
/// ```rust
/// use fixture_core::text::is_anagram;
///
/// assert!(is_anagram("arc", "car"));
/// assert!(!is_anagram("cat", "dog"));
/// ```
pub fn is_anagram(a: &str, b: &str) -> bool {
    if a.chars().count() != b.chars().count() {
        return false;
    }
    char_counts(a) == char_counts(b)
}

fn char_counts(text: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for c in text.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}
