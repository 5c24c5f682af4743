//! Public palindrome queries built on the radius table.

use crate::radius::palindrome_radii;
use crate::span::PalindromeSpan;

/// Span of the longest palindromic run of `input`.
///
/// Ties go to the palindrome that starts first. The empty input yields the
/// empty span at `0`.
pub fn longest_palindrome_span<T: PartialEq>(input: &[T]) -> PalindromeSpan {
    palindrome_radii(input).best()
}

/// Longest palindromic contiguous run of `input`, borrowed from it.
pub fn longest_palindrome<T: PartialEq>(input: &[T]) -> &[T] {
    longest_palindrome_span(input).slice(input)
}

/// Longest palindromic substring of `text`, scanning one `char` at a time.
pub fn longest_palindrome_str(text: &str) -> &str {
    let symbols: Vec<char> = text.chars().collect();
    let span = longest_palindrome_span(&symbols);
    let (start, end) = byte_range(text, span);
    &text[start..end]
}

/// Longest palindromic run of raw bytes.
pub fn longest_palindrome_bytes(bytes: &[u8]) -> &[u8] {
    longest_palindrome(bytes)
}

/// Maps a `char`-indexed span of `text` onto byte offsets.
pub fn byte_range(text: &str, span: PalindromeSpan) -> (usize, usize) {
    let mut start = text.len();
    let mut end = text.len();
    for (idx, (offset, _)) in text.char_indices().enumerate() {
        if idx == span.start {
            start = offset;
        }
        if idx == span.end() {
            end = offset;
            break;
        }
    }
    (start, end)
}

/// Counts the `(start, end)` pairs whose run is a non-empty palindrome.
pub fn count_palindromic_substrings<T: PartialEq>(input: &[T]) -> u64 {
    palindrome_radii(input).palindrome_count()
}

/// The maximal palindrome around every symbol and every inner gap, in centre
/// order. Gaps whose neighbours differ contribute nothing.
pub fn maximal_palindromes<T: PartialEq>(input: &[T]) -> Vec<PalindromeSpan> {
    let table = palindrome_radii(input);
    table
        .centers()
        .filter_map(|center| table.span_at(center))
        .filter(|span| !span.is_empty())
        .collect()
}

/// Whether `input` reads the same forwards and backwards.
pub fn is_palindrome<T: PartialEq>(input: &[T]) -> bool {
    input.iter().eq(input.iter().rev())
}
