//! Withdrawal request signing.
//!
//! Reconstructs the local keypair from the request's encrypted passphrase
//! and the user's PIN, then fills the `signed_data` slot of every signer
//! whose declared public key matches the reconstructed one. Signers that
//! belong to other parties are left untouched; in a threshold scheme each
//! keyholder runs this independently and the service merges the results.

use tracing::debug;

use pinsign_core::codec;
use pinsign_core::{ECKeyPair, EncryptedSeed};

use crate::error::WithdrawError;
use crate::request::WithdrawSignRequest;

/// Sign all matching slots of `request` with the keypair reconstructed
/// from its encrypted passphrase and `pin`.
///
/// Takes the document by value and returns the transformed document.
/// Exactly one keypair is reconstructed per call and applied uniformly
/// across all inputs.
pub fn sign_withdrawal_request(
    request: WithdrawSignRequest,
    pin: &str,
) -> Result<WithdrawSignRequest, WithdrawError> {
    let seed = EncryptedSeed::from_base64(&request.encrypted_passphrase.passphrase)?;
    let keypair = seed.decrypt_to_keypair(pin)?;
    sign_withdrawal_request_with_key(request, &keypair)
}

/// Sign all matching slots of `request` with an already-reconstructed
/// keypair.
pub fn sign_withdrawal_request_with_key(
    mut request: WithdrawSignRequest,
    keypair: &ECKeyPair,
) -> Result<WithdrawSignRequest, WithdrawError> {
    let public_key = keypair.public_key();

    let mut signed = 0usize;
    for input in &mut request.inputs {
        let digest = codec::from_hex(&input.data_to_sign)?;
        for signer in &mut input.signers {
            if codec::from_hex(&signer.signer_public_key)? != public_key {
                continue;
            }
            let signature = keypair.sign(&digest).map_err(WithdrawError::Crypto)?;
            signer.signed_data = Some(codec::to_hex(&signature));
            signed += 1;
        }
    }

    debug!(
        inputs = request.inputs.len(),
        slots_signed = signed,
        "filled signature slots for the local keypair"
    );
    Ok(request)
}
