//! Seeded text generators for benchmarks, property tests and the CLI.

use pal_core::{ErrorInfo, PalError, RngHandle};

/// Uniformly random text of `len` symbols drawn from `alphabet`.
pub fn random_text(len: usize, alphabet: &[char], rng: &mut RngHandle) -> Result<String, PalError> {
    if alphabet.is_empty() && len > 0 {
        return Err(PalError::Input(
            ErrorInfo::new("empty-alphabet", "cannot draw symbols from an empty alphabet")
                .with_context("len", len.to_string()),
        ));
    }
    Ok((0..len).map(|_| alphabet[rng.pick(alphabet.len())]).collect())
}

/// `len` copies of `symbol`, the worst case for naive centre expansion.
pub fn repeated_text(symbol: char, len: usize) -> String {
    std::iter::repeat(symbol).take(len).collect()
}

/// Random half followed by its reverse: a single palindrome spanning the text.
pub fn mirrored_text(
    half_len: usize,
    alphabet: &[char],
    rng: &mut RngHandle,
) -> Result<String, PalError> {
    let half = random_text(half_len, alphabet, rng)?;
    let mut text = half.clone();
    text.extend(half.chars().rev());
    Ok(text)
}
