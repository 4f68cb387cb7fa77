//! AES-256 in raw block mode with PKCS#7 padding.
//!
//! Each 16-byte block is enciphered independently: no IV, no chaining.
//! Identical plaintext blocks therefore encrypt identically, which is a
//! recognized weakness. The mode is kept as-is for interoperability with
//! already-issued encrypted seeds; changing it silently would break every
//! ciphertext the service currently stores. See DESIGN.md before touching
//! this.
//!
//! Decrypting with the wrong key does not fail reliably: it may return a
//! padding error or garbage bytes of plausible length. Callers must treat
//! successful decryption as necessary but not sufficient evidence that the
//! key was correct.

use aes::Aes256;
use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};

use crate::error::CipherError;

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Encrypt a buffer of any length under a 256-bit key.
///
/// The plaintext is PKCS#7-padded up to the next block boundary, so the
/// output is always a non-empty multiple of 16 bytes (a full padding block
/// is appended when the input is already block-aligned).
pub fn encrypt(key: &[u8; 32], plaintext: &[u8]) -> Vec<u8> {
    let cipher = Aes256::new(GenericArray::from_slice(key));

    let pad_len = BLOCK_SIZE - plaintext.len() % BLOCK_SIZE;
    let mut buf = Vec::with_capacity(plaintext.len() + pad_len);
    buf.extend_from_slice(plaintext);
    buf.resize(plaintext.len() + pad_len, pad_len as u8);

    for chunk in buf.chunks_exact_mut(BLOCK_SIZE) {
        cipher.encrypt_block(GenericArray::from_mut_slice(chunk));
    }
    buf
}

/// Decrypt a buffer produced by [`encrypt`] and strip the padding.
pub fn decrypt(key: &[u8; 32], ciphertext: &[u8]) -> Result<Vec<u8>, CipherError> {
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(CipherError::InvalidCiphertextLength(ciphertext.len()));
    }

    let cipher = Aes256::new(GenericArray::from_slice(key));
    let mut buf = ciphertext.to_vec();
    for chunk in buf.chunks_exact_mut(BLOCK_SIZE) {
        cipher.decrypt_block(GenericArray::from_mut_slice(chunk));
    }

    let pad_len = *buf.last().ok_or(CipherError::InvalidPadding)? as usize;
    if pad_len == 0 || pad_len > BLOCK_SIZE || pad_len > buf.len() {
        return Err(CipherError::InvalidPadding);
    }
    if !buf[buf.len() - pad_len..].iter().all(|&b| b as usize == pad_len) {
        return Err(CipherError::InvalidPadding);
    }

    buf.truncate(buf.len() - pad_len);
    Ok(buf)
}
