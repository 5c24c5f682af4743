//! Quadratic expand-around-centre reference search.
//!
//! Used as the oracle in property tests and as the baseline in benchmarks.

use crate::span::PalindromeSpan;

/// Longest palindromic run by expanding around each of the `2m - 1` centres.
///
/// Same tie-break as the linear scan: the first strictly longer palindrome
/// wins, which is the one with the earliest start.
pub fn longest_palindrome_naive<T: PartialEq>(input: &[T]) -> PalindromeSpan {
    let mut best = PalindromeSpan::default();
    let len = input.len();
    for center in 0..len.saturating_mul(2).saturating_sub(1) {
        // even centres sit on symbol center/2, odd ones between two symbols
        let mut left = center / 2;
        let mut right = left + center % 2;
        if right >= len || input[left] != input[right] {
            continue;
        }
        while left > 0 && right + 1 < len && input[left - 1] == input[right + 1] {
            left -= 1;
            right += 1;
        }
        let found = right - left + 1;
        if found > best.len {
            best = PalindromeSpan::new(left, found);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_odd_and_even_palindromes() {
        assert_eq!(longest_palindrome_naive(b"xabay"), PalindromeSpan::new(1, 3));
        assert_eq!(longest_palindrome_naive(b"xabbay"), PalindromeSpan::new(1, 4));
        assert_eq!(longest_palindrome_naive::<u8>(&[]), PalindromeSpan::new(0, 0));
    }
}
