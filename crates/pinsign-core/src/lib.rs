//! # pinsign-core — PIN-based seed decryption and secp256k1 signing.
//!
//! Primitives for approving a withdrawal without the hosting service ever
//! seeing the raw private key: the service stores a PIN-encrypted seed,
//! and this crate derives the key from the PIN, decrypts the seed, and
//! produces deterministic low-S DER signatures.
//!
//! # Modules
//!
//! - [`error`] — `EncodingError`, `CipherError`, `CryptoError`
//! - [`codec`] — strict lowercase hex
//! - [`pin`] — two-round PBKDF2 PIN stretching
//! - [`cipher`] — AES-256 raw block mode with PKCS#7 (compatibility mode)
//! - [`seed`] — `EncryptedSeed` ciphertext value object
//! - [`keys`] — `ECKeyPair`, RFC 6979 signing
//!
//! Everything is synchronous and CPU-bound; all values are created per
//! operation and safe to use from any thread.

pub mod cipher;
pub mod codec;
pub mod error;
pub mod keys;
pub mod pin;
pub mod seed;

// Re-exports for convenient access
pub use error::{CipherError, CryptoError, EncodingError};
pub use keys::ECKeyPair;
pub use seed::EncryptedSeed;
