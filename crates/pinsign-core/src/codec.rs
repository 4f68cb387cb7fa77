//! Hex encoding helpers with strict validation.
//!
//! All hex produced by this crate is lowercase and exactly `2 * len` chars,
//! so leading zero bytes survive a round-trip (a big-integer-based encoder
//! would drop them).

use crate::error::EncodingError;

/// Encode bytes as lowercase hex, zero-padded to `2 * bytes.len()` chars.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode a hex string into bytes.
///
/// The input must have even length and contain only `0-9a-fA-F`.
pub fn from_hex(s: &str) -> Result<Vec<u8>, EncodingError> {
    hex::decode(s).map_err(EncodingError::from)
}
