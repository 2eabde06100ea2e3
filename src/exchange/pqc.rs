//! ML-KEM-768 key encapsulation.
//!
//! The client publishes an encapsulation key, the simulated server
//! encapsulates against it and the first 32 bytes of the shared secret
//! become the AES key. Decapsulation would yield the same secret, so the
//! trace shows the encapsulated value for both sides.

use crate::comparison::{Artifacts, Profile};
use crate::credentials::Credentials;
use crate::crypto::kem::{self, KemKeypair};
use crate::error::CryptoError;
use crate::trace::{self, preview, preview_hex, StepRecord, PROCESSING};

use super::{truncate_key, Agreement, KeyExchangeAlgorithm, KeyPair, Pipeline};

pub const PROFILE: Profile = Profile {
    algo: "ML-KEM (Kyber-768) + AES",
    payload: "Encapsulation",
    quantum_safe: "YES (Lattice-Based)",
};

const LABELS: [&str; trace::STEP_COUNT] = [
    "Capture Credentials",
    "Generate Kyber public/private keys",
    "Encapsulate shared secret",
    "Decapsulate shared secret",
    "Protect credentials using derived secret",
    "Recover credentials",
    "Validate credentials",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct PqcExchange;

impl KeyExchangeAlgorithm for PqcExchange {
    fn pipeline(&self) -> Pipeline {
        Pipeline::PostQuantum
    }

    fn profile(&self) -> Profile {
        PROFILE
    }

    fn generate_key_pair(&self) -> Result<KeyPair, CryptoError> {
        Ok(KemKeypair::keygen().into())
    }

    fn establish(&self, key_pair: &KeyPair) -> Result<Agreement, CryptoError> {
        let (ciphertext, shared_secret) = kem::encapsulate(&key_pair.public_key)?;
        let key = truncate_key(&shared_secret)?;

        Ok(Agreement {
            key,
            shared_secret,
            ciphertext,
        })
    }

    fn sizes(&self, key_pair: &KeyPair, agreement: &Agreement, _blob: &[u8]) -> Artifacts {
        Artifacts {
            public_key_len: key_pair.public_key.len(),
            ciphertext_len: agreement.ciphertext.len(),
        }
    }

    fn trace(
        &self,
        credentials: &Credentials,
        key_pair: &KeyPair,
        agreement: &Agreement,
        blob: &str,
    ) -> Vec<StepRecord> {
        trace::steps(
            self.pipeline().step_prefix(),
            &LABELS,
            [
                format!("User: {}", credentials.username()),
                format!("PK: {}", preview(&key_pair.public_key)),
                format!("CT: {}", preview(&agreement.ciphertext)),
                format!("Secret: {}", preview(&agreement.shared_secret)),
                format!("Cipher: {}", preview_hex(blob)),
                PROCESSING.to_string(),
                "PQC Validation Success".to_string(),
            ],
        )
    }
}
