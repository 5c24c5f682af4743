//! Fibonacci numbers with `F(0) = 0`, `F(1) = 1`.

use std::collections::HashMap;

use pal_core::errors::{ErrorInfo, PalError};

/// Largest index whose Fibonacci number fits in a `u128`.
pub const MAX_FIB_INDEX: i64 = 186;

fn check_index(n: i64) -> Result<u64, PalError> {
    if n < 0 {
        return Err(PalError::Corpus(
            ErrorInfo::new("negative-index", "fibonacci is undefined for negative indices")
                .with_context("n", n.to_string()),
        ));
    }
    if n > MAX_FIB_INDEX {
        return Err(PalError::Corpus(
            ErrorInfo::new("overflow", "fibonacci number does not fit in 128 bits")
                .with_context("n", n.to_string())
                .with_context("max", MAX_FIB_INDEX.to_string()),
        ));
    }
    Ok(n as u64)
}

/// `F(n)`, computed iteratively.
pub fn fibonacci(n: i64) -> Result<u128, PalError> {
    let n = check_index(n)?;
    if n == 0 {
        return Ok(0);
    }
    // stops at F(n) so F(MAX_FIB_INDEX + 1) is never formed
    let (mut previous, mut current) = (0u128, 1u128);
    for _ in 1..n {
        let next = previous + current;
        previous = current;
        current = next;
    }
    Ok(current)
}

/// Memo table owned by the caller and passed to each lookup.
#[derive(Debug, Clone, Default)]
pub struct FibMemo {
    cache: HashMap<u64, u128>,
}

impl FibMemo {
    /// Creates an empty memo table.
    pub fn new() -> Self {
        Self::default()
    }

    /// `F(n)` via the doubling identities, reusing cached values.
    pub fn get(&mut self, n: i64) -> Result<u128, PalError> {
        let n = check_index(n)?;
        Ok(self.lookup(n))
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    fn lookup(&mut self, n: u64) -> u128 {
        if n < 2 {
            return n as u128;
        }
        if let Some(&value) = self.cache.get(&n) {
            return value;
        }
        let half = n / 2;
        let a = self.lookup(half);
        let b = self.lookup(half + 1);
        // F(2k) = F(k) * (2F(k+1) - F(k)),  F(2k+1) = F(k)^2 + F(k+1)^2
        let value = if n % 2 == 0 {
            a * (2 * b - a)
        } else {
            a * a + b * b
        };
        self.cache.insert(n, value);
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values() {
        let expected = [0u128, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55];
        for (n, value) in expected.iter().enumerate() {
            assert_eq!(fibonacci(n as i64).unwrap(), *value);
        }
    }

    #[test]
    fn memo_agrees_with_iteration() {
        let mut memo = FibMemo::new();
        assert!(memo.is_empty());
        for n in 0..=MAX_FIB_INDEX {
            assert_eq!(memo.get(n).unwrap(), fibonacci(n).unwrap(), "n = {n}");
        }
        assert!(!memo.is_empty());
    }

    #[test]
    fn rejects_negative_and_overflowing_indices() {
        assert_eq!(fibonacci(-1).unwrap_err().info().code, "negative-index");
        assert_eq!(fibonacci(187).unwrap_err().info().code, "overflow");
        assert_eq!(FibMemo::new().get(-3).unwrap_err().info().code, "negative-index");
        assert_eq!(
            fibonacci(MAX_FIB_INDEX).unwrap(),
            332_825_110_087_067_562_321_196_029_789_634_457_848
        );
    }
}
