//! Error types for the signing primitives.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("odd-length hex string")] OddHexLength,
    #[error("invalid hex character {c:?} at index {index}")] InvalidHexCharacter { c: char, index: usize },
    #[error("invalid base64: {0}")] InvalidBase64(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("ciphertext length {0} is not a positive multiple of the block size")] InvalidCiphertextLength(usize),
    #[error("invalid block padding")] InvalidPadding,
}

/// Umbrella error for the decrypt-then-derive-keypair pipeline.
///
/// A `NonUtf8Seed` or transparent `Encoding` failure after a structurally
/// successful decryption is the strongest available signal of a wrong PIN.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    #[error(transparent)] Encoding(#[from] EncodingError),
    #[error(transparent)] Cipher(#[from] CipherError),
    #[error("decrypted seed is not valid UTF-8")] NonUtf8Seed,
    #[error("invalid private key scalar")] InvalidPrivateKey,
    #[error("signing failed: {0}")] Signing(String),
}

impl From<hex::FromHexError> for EncodingError {
    fn from(e: hex::FromHexError) -> Self {
        match e {
            hex::FromHexError::OddLength => EncodingError::OddHexLength,
            hex::FromHexError::InvalidHexCharacter { c, index } => {
                EncodingError::InvalidHexCharacter { c, index }
            }
            // hex::decode never reports this variant; it only applies to
            // decode_to_slice with a mismatched output buffer.
            hex::FromHexError::InvalidStringLength => EncodingError::OddHexLength,
        }
    }
}
