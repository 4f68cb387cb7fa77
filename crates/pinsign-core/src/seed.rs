//! Server-held encrypted seeds.
//!
//! An [`EncryptedSeed`] is the AES ciphertext of an ASCII-hex seed string,
//! encrypted under a PIN-derived key. The hosting service stores and
//! transports it as base64; it never sees the PIN or the plaintext seed.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use zeroize::Zeroize;

use crate::error::{CryptoError, EncodingError};
use crate::keys::ECKeyPair;
use crate::{cipher, codec, pin};

/// Opaque ciphertext of a PIN-encrypted key-derivation seed.
///
/// Equality against raw bytes is byte-exact ciphertext comparison; two
/// seeds encrypting the same plaintext under the same PIN compare equal
/// because the cipher mode is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedSeed {
    ciphertext: Vec<u8>,
}

impl EncryptedSeed {
    /// Wrap raw ciphertext bytes.
    pub fn from_bytes(ciphertext: Vec<u8>) -> Self {
        Self { ciphertext }
    }

    /// Decode a standard-alphabet base64 ciphertext string.
    pub fn from_base64(b64: &str) -> Result<Self, EncodingError> {
        let ciphertext = STANDARD
            .decode(b64)
            .map_err(|e| EncodingError::InvalidBase64(e.to_string()))?;
        Ok(Self { ciphertext })
    }

    /// Encrypt a plaintext seed under a key derived from `pin`.
    pub fn encrypt(plaintext: &[u8], pin_str: &str) -> Self {
        let mut key = pin::derive_key(pin_str);
        let ciphertext = cipher::encrypt(&key, plaintext);
        key.zeroize();
        Self { ciphertext }
    }

    /// The ciphertext as standard-alphabet base64.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.ciphertext)
    }

    /// The raw ciphertext bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.ciphertext
    }

    /// Byte-exact comparison against an arbitrary ciphertext buffer.
    pub fn matches_bytes(&self, bytes: &[u8]) -> bool {
        self.ciphertext == bytes
    }

    /// Decrypt the seed with a PIN-derived key and build the keypair.
    ///
    /// The decrypted plaintext must be the UTF-8 hex encoding of the seed
    /// bytes, which feed [`ECKeyPair::from_passphrase`]. A UTF-8 or hex
    /// failure after a structurally valid decryption is the strongest
    /// available wrong-PIN signal; this function never retries or guesses.
    pub fn decrypt_to_keypair(&self, pin_str: &str) -> Result<ECKeyPair, CryptoError> {
        let mut key = pin::derive_key(pin_str);
        let decrypted = cipher::decrypt(&key, &self.ciphertext);
        key.zeroize();
        let mut plaintext = decrypted?;

        let hex_seed = match String::from_utf8(plaintext.clone()) {
            Ok(s) => s,
            Err(_) => {
                plaintext.zeroize();
                return Err(CryptoError::NonUtf8Seed);
            }
        };
        plaintext.zeroize();

        let mut passphrase = codec::from_hex(&hex_seed).map_err(CryptoError::from)?;
        let keypair = ECKeyPair::from_passphrase(&passphrase);
        passphrase.zeroize();
        keypair
    }
}
