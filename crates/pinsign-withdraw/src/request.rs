//! Withdrawal signing-request document model.
//!
//! Mirrors the JSON document the hosting service hands to the client for
//! approval. The transport layer (HTTP, endpoint routing) lives outside
//! this crate; it supplies a parsed document and transmits the augmented
//! one onward. Field names follow the service's snake_case wire format;
//! absent optional fields are omitted when serializing, matching what the
//! service emits.

use serde::{Deserialize, Serialize};

/// A signing request covering one withdrawal: an encrypted passphrase
/// reference plus an ordered list of inputs to sign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawSignRequest {
    /// Server-side correlation id, echoed back unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,

    /// The PIN-encrypted seed this request's signatures derive from.
    pub encrypted_passphrase: EncryptedPassphrase,

    /// Transaction inputs awaiting signatures.
    pub inputs: Vec<SignInput>,
}

/// Reference to the server-held encrypted seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedPassphrase {
    /// Public key the service expects this passphrase to reconstruct.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signer_public_key: Option<String>,

    /// Base64 AES ciphertext of the hex-encoded seed.
    pub passphrase: String,
}

/// One transaction input and the signers expected to endorse it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInput {
    /// Position of this input within the transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_no: Option<u32>,

    /// How many of the listed signers must sign before the service
    /// accepts the withdrawal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signatures_needed: Option<u32>,

    /// Hex-encoded digest to sign.
    pub data_to_sign: String,

    /// Parties expected to co-sign this input.
    pub signers: Vec<Signer>,
}

/// A single signature slot within an input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signer {
    /// Service-side address of this signer, echoed back unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signer_address: Option<String>,

    /// Hex compressed SEC1 public key this slot belongs to.
    pub signer_public_key: String,

    /// Hex DER signature; `None` until the matching party has signed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signed_data: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "reference_id": "w-1234",
            "encrypted_passphrase": {
                "signer_public_key": "03aa",
                "passphrase": "AAECAw=="
            },
            "inputs": [
                {
                    "input_no": 0,
                    "signatures_needed": 2,
                    "data_to_sign": "00ff",
                    "signers": [
                        { "signer_public_key": "03aa" },
                        { "signer_public_key": "02bb", "signed_data": "3044" }
                    ]
                }
            ]
        }"#
    }

    #[test]
    fn deserializes_wire_document() {
        let req: WithdrawSignRequest = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(req.reference_id.as_deref(), Some("w-1234"));
        assert_eq!(req.encrypted_passphrase.passphrase, "AAECAw==");
        assert_eq!(req.inputs.len(), 1);
        assert_eq!(req.inputs[0].signers[0].signed_data, None);
        assert_eq!(req.inputs[0].signers[1].signed_data.as_deref(), Some("3044"));
    }

    #[test]
    fn absent_signed_data_stays_absent_on_serialize() {
        let req: WithdrawSignRequest = serde_json::from_str(sample_json()).unwrap();
        let json = serde_json::to_string(&req).unwrap();
        // The unsigned slot must not serialize a null signed_data field
        assert_eq!(json.matches("signed_data").count(), 1);
    }

    #[test]
    fn serde_roundtrip() {
        let req: WithdrawSignRequest = serde_json::from_str(sample_json()).unwrap();
        let json = serde_json::to_string(&req).unwrap();
        let back: WithdrawSignRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(req, back);
    }

    #[test]
    fn minimal_document_parses() {
        let json = r#"{
            "encrypted_passphrase": { "passphrase": "AAECAw==" },
            "inputs": []
        }"#;
        let req: WithdrawSignRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.reference_id, None);
        assert!(req.inputs.is_empty());
    }
}
