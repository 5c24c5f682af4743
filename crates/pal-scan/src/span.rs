use serde::{Deserialize, Serialize};

/// Half-open range `start..start + len` of the original input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PalindromeSpan {
    /// Index of the first symbol.
    pub start: usize,
    /// Number of symbols.
    pub len: usize,
}

impl PalindromeSpan {
    /// Creates a span from its start index and length.
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Recovers the original-sequence span of a transformed-space palindrome.
    pub(crate) fn from_transformed(center: usize, radius: usize) -> Self {
        Self {
            start: (center - radius) / 2,
            len: radius,
        }
    }

    /// Exclusive end index.
    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    /// Whether the span covers no symbols.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Borrows the covered symbols of `input`.
    ///
    /// Panics if the span does not lie within `input`; spans returned by this
    /// crate always lie within the input they were computed from.
    pub fn slice<'a, T>(&self, input: &'a [T]) -> &'a [T] {
        &input[self.start..self.end()]
    }
}
