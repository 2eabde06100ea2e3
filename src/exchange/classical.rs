//! ECDH over P-256 with an HKDF-SHA256 session key.
//!
//! Both handshake roles run in-process:
//! 1. Client and server each generate an ephemeral P-256 keypair
//! 2. The client combines its secret with the server's public key
//! 3. HKDF-SHA256 (no salt, `"handshake data"`) turns the raw value into
//!    a 32-byte AES key

use crate::comparison::{Artifacts, Profile};
use crate::credentials::Credentials;
use crate::crypto::ecdh::{self, EcdhKeypair};
use crate::crypto::hkdf::{derive_key, HANDSHAKE_INFO};
use crate::error::CryptoError;
use crate::trace::{self, preview, preview_hex, StepRecord, PROCESSING, SECRET_PLACEHOLDER};

use super::{Agreement, KeyExchangeAlgorithm, KeyPair, Pipeline, PrivateKey};

pub const PROFILE: Profile = Profile {
    algo: "ECDH (SECP256R1) + AES",
    payload: "Encrypted Payload",
    quantum_safe: "NO (Shor's Algorithm)",
};

const LABELS: [&str; trace::STEP_COUNT] = [
    "Capture Credentials",
    "Generate ECDH key pair",
    "Exchange public keys",
    "Derive shared secret",
    "Encrypt credentials using AES",
    "Decrypt credentials",
    "Validate credentials",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicalExchange;

impl KeyExchangeAlgorithm for ClassicalExchange {
    fn pipeline(&self) -> Pipeline {
        Pipeline::Classical
    }

    fn profile(&self) -> Profile {
        PROFILE
    }

    fn generate_key_pair(&self) -> Result<KeyPair, CryptoError> {
        Ok(EcdhKeypair::keygen().into())
    }

    fn establish(&self, key_pair: &KeyPair) -> Result<Agreement, CryptoError> {
        let PrivateKey::Ecdh(client_sk) = key_pair.private_key() else {
            return Err(CryptoError::KeyMismatch);
        };

        // Simulated server side
        let server = EcdhKeypair::keygen();

        let raw = ecdh::shared_secret(client_sk, &server.pk);
        let key = derive_key(raw.raw_secret_bytes(), None, HANDSHAKE_INFO)?;

        Ok(Agreement {
            key,
            shared_secret: key.to_vec(),
            ciphertext: Vec::new(),
        })
    }

    fn sizes(&self, key_pair: &KeyPair, _agreement: &Agreement, blob: &[u8]) -> Artifacts {
        Artifacts {
            public_key_len: key_pair.public_key.len(),
            ciphertext_len: blob.len(),
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
                format!("Priv: {SECRET_PLACEHOLDER}"),
                format!("Pub: {}", preview(&key_pair.public_key)),
                format!("Secret: {}", preview(&agreement.shared_secret)),
                format!("Cipher: {}", preview_hex(blob)),
                PROCESSING.to_string(),
                "Classical Validation Success".to_string(),
            ],
        )
    }
}
