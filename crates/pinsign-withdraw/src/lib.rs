//! # pinsign-withdraw — withdrawal co-signing orchestration.
//!
//! Consumes a signing-request document from the transport layer, rebuilds
//! the local keypair from the request's PIN-encrypted passphrase, signs
//! the slots that belong to the local key, and hands the augmented
//! document back for onward transmission. HTTP, retries, and response
//! mapping are the transport layer's problem, not this crate's.
//!
//! # Modules
//!
//! - [`error`] — `WithdrawError` enum
//! - [`request`] — serde model of the signing-request document
//! - [`signer`] — keypair reconstruction and slot filling

pub mod error;
pub mod request;
pub mod signer;

// Re-exports for convenient access
pub use error::WithdrawError;
pub use request::{EncryptedPassphrase, SignInput, Signer, WithdrawSignRequest};
pub use signer::{sign_withdrawal_request, sign_withdrawal_request_with_key};
