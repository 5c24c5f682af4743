use pal_core::errors::PalError;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::serde::to_canonical_json_bytes;

/// Stable hexadecimal SHA-256 of the canonical JSON encoding of `value`.
pub fn stable_hash_string<T: Serialize>(value: &T) -> Result<String, PalError> {
    let bytes = to_canonical_json_bytes(value)?;
    Ok(format!("{:x}", Sha256::digest(bytes)))
}

/// Hexadecimal SHA-256 of raw input bytes.
pub fn input_hash(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}
