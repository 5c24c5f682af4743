#![deny(missing_docs)]

//! Linear-time longest palindromic substring search.
//!
//! The input is interleaved with separator markers and bracketed by two
//! sentinels (see [`transform`]), so every palindrome of the transformed
//! sequence has odd length. [`RadiusTable::scan`] then computes, left to
//! right, the radius of the largest palindrome centred at each position,
//! seeding each radius from its mirror across the rightmost-reaching
//! palindrome found so far. That right edge only moves forward, which bounds
//! the total expansion work by the transformed length.

mod batch;
mod config;
mod hash;
mod naive;
mod radius;
mod report;
mod search;
mod serde;
mod span;
mod transform;
pub mod workload;

pub use batch::{run_batch, BatchReport};
pub use config::{BatchConfig, BatchInput, ScanConfig, SymbolUnit};
pub use hash::{input_hash, stable_hash_string};
pub use naive::longest_palindrome_naive;
pub use radius::{palindrome_radii, RadiusTable};
pub use report::{scan_text, ScanReport};
pub use search::{
    byte_range, count_palindromic_substrings, is_palindrome, longest_palindrome,
    longest_palindrome_bytes, longest_palindrome_span, longest_palindrome_str,
    maximal_palindromes,
};
pub use span::PalindromeSpan;
pub use transform::{transform, transformed_len, Marker};

pub use crate::serde::{
    from_json_slice, from_yaml_slice, radii_from_bytes, radii_to_bytes, to_canonical_json_bytes,
    to_yaml_string,
};
