//! Interleaved transformed sequence with out-of-band sentinels.

/// One position of the transformed sequence.
///
/// Sentinels and separators live outside the input alphabet, so no input
/// symbol can ever collide with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker<T> {
    /// Left sentinel at position `0`.
    Start,
    /// Right sentinel at the last position.
    End,
    /// Gap marker placed between (and around) input symbols.
    Separator,
    /// An input symbol.
    Symbol(T),
}

impl<T: PartialEq> Marker<T> {
    /// Equality used while expanding a palindrome.
    ///
    /// Sentinels match nothing, not even themselves, which stops every
    /// expansion at the sequence ends without bounds checks.
    pub fn mirrors(&self, other: &Self) -> bool {
        match (self, other) {
            (Marker::Symbol(a), Marker::Symbol(b)) => a == b,
            (Marker::Separator, Marker::Separator) => true,
            _ => false,
        }
    }
}

/// Builds the `2m + 3` transformed sequence for `input`.
pub fn transform<T>(input: &[T]) -> Vec<Marker<&T>> {
    let mut out = Vec::with_capacity(transformed_len(input.len()));
    out.push(Marker::Start);
    for symbol in input {
        out.push(Marker::Separator);
        out.push(Marker::Symbol(symbol));
    }
    out.push(Marker::Separator);
    out.push(Marker::End);
    out
}

/// Length of the transformed sequence for an input of `input_len` symbols.
pub const fn transformed_len(input_len: usize) -> usize {
    2 * input_len + 3
}
