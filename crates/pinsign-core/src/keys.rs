//! secp256k1 keypair with deterministic low-S DER signing.
//!
//! Wraps a k256 `SigningKey`. Curve parameters (generator, order, field)
//! live inside k256 as immutable constants shared by every keypair, so
//! concurrent signing needs no locking.
//!
//! Signatures use RFC 6979 deterministic nonces: the same (scalar, digest)
//! pair always yields byte-identical output. S is normalized to the lower
//! half of the group order and the result is minimal DER
//! `SEQUENCE(INTEGER r, INTEGER s)`, the form downstream validation rules
//! require.

use std::fmt;

use k256::ecdsa::signature::hazmat::PrehashSigner;
use k256::ecdsa::{Signature, SigningKey};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::elliptic_curve::subtle::ConstantTimeEq;
use sha2::{Digest, Sha256};

use crate::error::CryptoError;

/// A secp256k1 private scalar with a lazily-derived compressed public key.
pub struct ECKeyPair {
    signing_key: SigningKey,
}

impl ECKeyPair {
    /// Create a keypair directly from a 32-byte big-endian private scalar.
    pub fn from_private_key(bytes: &[u8; 32]) -> Result<Self, CryptoError> {
        let signing_key =
            SigningKey::from_slice(bytes).map_err(|_| CryptoError::InvalidPrivateKey)?;
        Ok(Self { signing_key })
    }

    /// Derive a keypair deterministically from an arbitrary-length passphrase.
    ///
    /// The private scalar is the SHA-256 digest of the passphrase. For
    /// secp256k1 a 256-bit digest is below the group order for all but a
    /// negligible fraction of inputs; the residual out-of-range case is
    /// rejected rather than reduced.
    pub fn from_passphrase(passphrase: &[u8]) -> Result<Self, CryptoError> {
        let digest = Sha256::digest(passphrase);
        let signing_key =
            SigningKey::from_slice(&digest).map_err(|_| CryptoError::InvalidPrivateKey)?;
        Ok(Self { signing_key })
    }

    /// The compressed SEC1 public key (1 prefix byte + 32-byte x-coordinate).
    pub fn public_key(&self) -> Vec<u8> {
        self.signing_key
            .verifying_key()
            .to_encoded_point(true)
            .as_bytes()
            .to_vec()
    }

    /// The raw 32-byte big-endian private scalar. Handle with care.
    pub fn private_key_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out.copy_from_slice(&self.signing_key.to_bytes());
        out
    }

    /// Sign a digest, returning the DER-encoded low-S signature.
    ///
    /// Deterministic per RFC 6979 (HMAC-SHA256 nonce derivation). Digests
    /// shorter than 32 bytes are left-padded, longer ones truncated, per
    /// the standard bits2octets conversion.
    pub fn sign(&self, digest: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let sig: Signature = self
            .signing_key
            .sign_prehash(digest)
            .map_err(|e| CryptoError::Signing(e.to_string()))?;
        // Low-S: if s > n/2, replace s with n - s
        let sig = sig.normalize_s().unwrap_or(sig);
        Ok(sig.to_der().as_bytes().to_vec())
    }

    /// Constant-time comparison of `bytes` against the raw private scalar.
    ///
    /// Diagnostics and tests only; never an authorization decision.
    pub fn equals_raw_key(&self, bytes: &[u8]) -> bool {
        let ours = self.signing_key.to_bytes();
        bytes.len() == ours.len() && bool::from(ours.as_slice().ct_eq(bytes))
    }
}

impl Clone for ECKeyPair {
    fn clone(&self) -> Self {
        Self {
            signing_key: self.signing_key.clone(),
        }
    }
}

impl fmt::Debug for ECKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ECKeyPair")
            .field("public_key", &hex::encode(self.public_key()))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;

    const PRIV_HEX: &str = "7a01628988d23fae697fa05fcdae5a82fe4f749aa9f24d35d23f81bee917dfc3";
    const PUB_HEX: &str = "03359ac0aa241b1a40fcab68486f8a4b546ad3301d201c3645487093578592ec8f";
    const DIGEST_HEX: &str = "695369676e65645468697344617461546861744973323536426974734c6f6e67";
    const SIG_HEX: &str = "304402205587dfc87c3227ad37b021c08c873ca4b1faada1a83f666d483711edb2f4f743022004ee40d9fe8dd03e6d42bfc7d0e53f75286125a591ed14b39265978ebf3eea36";

    fn keypair_from_hex(priv_hex: &str) -> ECKeyPair {
        let bytes: [u8; 32] = codec::from_hex(priv_hex).unwrap().try_into().unwrap();
        ECKeyPair::from_private_key(&bytes).unwrap()
    }

    #[test]
    fn passphrase_derives_known_scalar() {
        let kp = ECKeyPair::from_passphrase(b"block.io").unwrap();
        assert_eq!(codec::to_hex(&kp.private_key_bytes()), PRIV_HEX);
        assert!(kp.equals_raw_key(&codec::from_hex(PRIV_HEX).unwrap()));
    }

    #[test]
    fn compressed_public_key_vector() {
        let kp = ECKeyPair::from_passphrase(b"block.io").unwrap();
        assert_eq!(codec::to_hex(&kp.public_key()), PUB_HEX);
        assert_eq!(kp.public_key().len(), 33);
    }

    #[test]
    fn deterministic_signing_vector() {
        let kp = keypair_from_hex(PRIV_HEX);
        let digest = codec::from_hex(DIGEST_HEX).unwrap();
        let sig = kp.sign(&digest).unwrap();
        assert_eq!(codec::to_hex(&sig), SIG_HEX);
    }

    #[test]
    fn signing_is_repeatable() {
        let kp = keypair_from_hex(PRIV_HEX);
        let digest = codec::from_hex(DIGEST_HEX).unwrap();
        assert_eq!(kp.sign(&digest).unwrap(), kp.sign(&digest).unwrap());
    }

    #[test]
    fn signatures_are_low_s() {
        let kp = ECKeyPair::from_passphrase(b"low-s check").unwrap();
        for i in 0u8..16 {
            let digest = Sha256::digest([i]);
            let der = kp.sign(&digest).unwrap();
            let parsed = Signature::from_der(&der).unwrap();
            assert!(
                parsed.normalize_s().is_none(),
                "signature over digest {i} is not low-S"
            );
        }
    }

    #[test]
    fn zero_scalar_rejected() {
        let err = ECKeyPair::from_private_key(&[0u8; 32]).unwrap_err();
        assert_eq!(err, CryptoError::InvalidPrivateKey);
    }

    #[test]
    fn scalar_above_order_rejected() {
        let err = ECKeyPair::from_private_key(&[0xFF; 32]).unwrap_err();
        assert_eq!(err, CryptoError::InvalidPrivateKey);
    }

    #[test]
    fn equals_raw_key_rejects_other_lengths_and_keys() {
        let kp = keypair_from_hex(PRIV_HEX);
        assert!(!kp.equals_raw_key(&[0u8; 31]));
        assert!(!kp.equals_raw_key(&[0u8; 32]));
    }

    #[test]
    fn clone_preserves_key() {
        let kp = keypair_from_hex(PRIV_HEX);
        let cloned = kp.clone();
        assert_eq!(kp.private_key_bytes(), cloned.private_key_bytes());
    }

    #[test]
    fn debug_hides_private_scalar() {
        let kp = keypair_from_hex(PRIV_HEX);
        let debug = format!("{kp:?}");
        assert!(debug.contains("public_key"));
        assert!(!debug.contains(PRIV_HEX));
    }
}
