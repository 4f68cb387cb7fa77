//! PIN to symmetric key stretching.
//!
//! A user PIN is stretched into a 256-bit AES key with two chained
//! PBKDF2-HMAC-SHA256 rounds. The hex text of the 16-byte round-1 output
//! (not its raw bytes) is the password for round 2. This two-round layout
//! is part of the wire contract with already-issued encrypted seeds and
//! must not be collapsed into a single PBKDF2 call.

use pbkdf2::pbkdf2_hmac_array;
use sha2::Sha256;
use zeroize::Zeroize;

use crate::codec;

/// PBKDF2 iteration count per round.
pub const DEFAULT_ITERATIONS: u32 = 1024;

/// Round-1 derived key length in bytes.
const ROUND1_LEN: usize = 16;

/// Final symmetric key length in bytes.
pub const KEY_LEN: usize = 32;

/// Derive a 256-bit symmetric key from a PIN with default parameters
/// (1024 iterations, empty salt).
pub fn derive_key(pin: &str) -> [u8; KEY_LEN] {
    derive_key_with(pin, DEFAULT_ITERATIONS, "")
}

/// Derive a 256-bit symmetric key with explicit iterations and salt.
///
/// Callers never vary the salt in normal operation; the parameters exist
/// for forward compatibility with the service's key-stretching settings.
pub fn derive_key_with(pin: &str, iterations: u32, salt: &str) -> [u8; KEY_LEN] {
    let round1 =
        pbkdf2_hmac_array::<Sha256, ROUND1_LEN>(pin.as_bytes(), salt.as_bytes(), iterations);

    let mut intermediate = codec::to_hex(&round1);
    let key =
        pbkdf2_hmac_array::<Sha256, KEY_LEN>(intermediate.as_bytes(), salt.as_bytes(), iterations);
    intermediate.zeroize();
    key
}
