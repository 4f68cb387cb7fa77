//! Withdrawal signing error types.

use pinsign_core::{CryptoError, EncodingError};
use thiserror::Error;

/// Errors surfaced while filling in a signing request.
///
/// A signer whose public key never matches the local keypair is NOT an
/// error; partially filled requests are the steady state of multi-party
/// signing. Callers should map [`WithdrawError::Crypto`] to a
/// "wrong PIN or corrupted data" message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WithdrawError {
    /// Seed decryption or keypair reconstruction failed.
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// A hex or base64 field in the request document is malformed.
    #[error(transparent)]
    Encoding(#[from] EncodingError),
}
