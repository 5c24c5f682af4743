//! Palindrome radius scan over the transformed sequence.

use pal_core::errors::{ErrorInfo, PalError};
use serde::{Deserialize, Serialize};

use crate::span::PalindromeSpan;
use crate::transform::{transform, Marker};

/// Radius of the largest palindrome centred at every transformed position.
///
/// Position `0` and the last position hold the sentinels and always have
/// radius `0`. Symbol `k` of the input sits at position `2k + 2`; the gap
/// before it sits at `2k + 1`.
///
/// Decoding re-checks the layout, so a deserialized table upholds the same
/// invariants as a scanned one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRadiusTable")]
pub struct RadiusTable {
    radii: Box<[usize]>,
    max_center: usize,
    max_radius: usize,
    expansion_steps: usize,
}

/// Unchecked wire form of [`RadiusTable`].
#[derive(Deserialize)]
struct RawRadiusTable {
    radii: Box<[usize]>,
    max_center: usize,
    max_radius: usize,
    expansion_steps: usize,
}

fn invalid_table(message: &str) -> ErrorInfo {
    ErrorInfo::new("invalid-radius-table", message)
}

impl TryFrom<RawRadiusTable> for RadiusTable {
    type Error = PalError;

    fn try_from(raw: RawRadiusTable) -> Result<Self, PalError> {
        let len = raw.radii.len();
        if len < 3 || len % 2 == 0 {
            return Err(PalError::Serde(
                invalid_table("table length must be odd and at least 3")
                    .with_context("len", len.to_string()),
            ));
        }

        let mut best = (0, 0);
        for (i, &radius) in raw.radii.iter().enumerate() {
            // a palindrome never reaches a sentinel
            let reach = i.min(len - 1 - i).saturating_sub(1);
            let misaligned = i > 0 && i + 1 < len && (i - radius.min(i)) % 2 == 0;
            if radius > reach || misaligned {
                return Err(PalError::Serde(
                    invalid_table("radius does not fit its position")
                        .with_context("index", i.to_string())
                        .with_context("radius", radius.to_string()),
                ));
            }
            if radius > best.1 {
                best = (i, radius);
            }
        }
        if best != (raw.max_center, raw.max_radius) {
            return Err(PalError::Serde(
                invalid_table("stored best palindrome disagrees with the radii")
                    .with_context("max_center", raw.max_center.to_string())
                    .with_context("max_radius", raw.max_radius.to_string()),
            ));
        }
        if raw.expansion_steps > len {
            return Err(PalError::Serde(
                invalid_table("expansion steps exceed the table length")
                    .with_context("expansion_steps", raw.expansion_steps.to_string()),
            ));
        }

        Ok(Self {
            radii: raw.radii,
            max_center: raw.max_center,
            max_radius: raw.max_radius,
            expansion_steps: raw.expansion_steps,
        })
    }
}

/// Rightmost-reaching palindrome seen so far. `right` never decreases.
#[derive(Debug, Clone, Copy, Default)]
struct Frontier {
    center: usize,
    right: usize,
}

impl RadiusTable {
    /// Scans a transformed sequence built by [`transform`].
    ///
    /// The sequence must start with [`Marker::Start`] and end with
    /// [`Marker::End`].
    pub fn scan<T: PartialEq>(transformed: &[Marker<T>]) -> Self {
        let len = transformed.len();
        debug_assert!(len >= 3);
        let mut radii = vec![0usize; len].into_boxed_slice();
        let mut frontier = Frontier::default();
        let mut max_center = 0;
        let mut max_radius = 0;
        let mut expansion_steps = 0;

        for i in 1..len - 1 {
            if i < frontier.right {
                let mirror = 2 * frontier.center - i;
                radii[i] = (frontier.right - i).min(radii[mirror]);
            }

            let mut radius = radii[i];
            while transformed[i + 1 + radius].mirrors(&transformed[i - 1 - radius]) {
                radius += 1;
                expansion_steps += 1;
            }
            radii[i] = radius;

            if i + radius > frontier.right {
                frontier = Frontier {
                    center: i,
                    right: i + radius,
                };
            }
            // strictly greater: the earliest centre keeps ties
            if radius > max_radius {
                max_radius = radius;
                max_center = i;
            }
        }

        Self {
            radii,
            max_center,
            max_radius,
            expansion_steps,
        }
    }

    /// Number of transformed positions, `2m + 3` for an input of `m` symbols.
    pub fn len(&self) -> usize {
        self.radii.len()
    }

    /// Always false: even the empty input has three transformed positions,
    /// and decoding rejects anything shorter.
    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }

    /// Length of the input the table was computed from.
    pub fn input_len(&self) -> usize {
        (self.radii.len() - 3) / 2
    }

    /// Radius at transformed position `i`, `None` when out of range.
    pub fn radius(&self, i: usize) -> Option<usize> {
        self.radii.get(i).copied()
    }

    /// Raw radius table.
    pub fn as_slice(&self) -> &[usize] {
        &self.radii
    }

    /// Number of successful expansion comparisons performed by the scan.
    ///
    /// Bounded by [`RadiusTable::len`], whatever the input.
    pub fn expansion_steps(&self) -> usize {
        self.expansion_steps
    }

    /// Number of non-empty palindromic runs of the input.
    ///
    /// A centre of radius `r` contributes the palindromes of radius
    /// `r, r - 2, ...` down to `1` or `2`.
    pub fn palindrome_count(&self) -> u64 {
        self.radii.iter().map(|&radius| ((radius + 1) / 2) as u64).sum()
    }

    /// Longest palindrome, earliest start on ties.
    pub fn best(&self) -> PalindromeSpan {
        PalindromeSpan::from_transformed(self.max_center, self.max_radius)
    }

    /// Original-sequence span of the palindrome centred at transformed
    /// position `i`.
    pub fn span_at(&self, i: usize) -> Option<PalindromeSpan> {
        if i == 0 || i + 1 >= self.radii.len() {
            return None;
        }
        Some(PalindromeSpan::from_transformed(i, self.radii[i]))
    }

    /// Interior centres that lie on a symbol or between two symbols.
    ///
    /// Excludes the sentinels and the outer separators, whose palindromes are
    /// always empty.
    pub fn centers(&self) -> impl Iterator<Item = usize> + '_ {
        let upper = self.radii.len().saturating_sub(2);
        2..upper
    }
}

/// Transforms `input` and returns its full radius table.
pub fn palindrome_radii<T: PartialEq>(input: &[T]) -> RadiusTable {
    RadiusTable::scan(&transform(input))
}
