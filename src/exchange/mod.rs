//! Key exchange pipelines.
//!
//! Each pipeline establishes a 32-byte AES key between a simulated client
//! and server, encrypts the credentials with it and reports a fixed
//! seven-step trace. The two implementations are
//! [`classical::ClassicalExchange`] (ECDH P-256 + HKDF) and
//! [`pqc::PqcExchange`] (ML-KEM-768).

pub mod classical;
pub mod pqc;

use std::fmt;

use tracing::debug;

use crate::comparison::{Artifacts, Profile};
use crate::credentials::Credentials;
use crate::crypto::{cipher, ecdh, hkdf::Key, kem};
use crate::error::CryptoError;
use crate::trace::StepRecord;

pub use classical::ClassicalExchange;
pub use pqc::PqcExchange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pipeline {
    Classical,
    PostQuantum,
}

impl Pipeline {
    /// Prefix of this pipeline's step ids
    pub fn step_prefix(&self) -> char {
        match self {
            Pipeline::Classical => 'c',
            Pipeline::PostQuantum => 'p',
        }
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pipeline::Classical => write!(f, "classical"),
            Pipeline::PostQuantum => write!(f, "pqc"),
        }
    }
}

/// Opaque private key handle
pub enum PrivateKey {
    Ecdh(p256::ecdh::EphemeralSecret),
    MlKem(Box<kem::DecapsulationKey>),
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(crate::trace::SECRET_PLACEHOLDER)
    }
}

/// The initiator's ephemeral keypair
#[derive(Debug)]
pub struct KeyPair {
    pub public_key: Vec<u8>,
    private_key: PrivateKey,
}

impl KeyPair {
    pub fn new(public_key: Vec<u8>, private_key: PrivateKey) -> Self {
        Self {
            public_key,
            private_key,
        }
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }
}

impl From<ecdh::EcdhKeypair> for KeyPair {
    fn from(kp: ecdh::EcdhKeypair) -> Self {
        let public_key = kp.public_bytes();
        Self::new(public_key, PrivateKey::Ecdh(kp.sk))
    }
}

impl From<kem::KemKeypair> for KeyPair {
    fn from(kp: kem::KemKeypair) -> Self {
        let public_key = kp.public_bytes();
        Self::new(public_key, PrivateKey::MlKem(Box::new(kp.dk)))
    }
}

/// Outcome of agreeing on a secret with the simulated peer
pub struct Agreement {
    /// AES-256 key used for the credentials
    pub key: Key,
    /// Pipeline-native shared secret (the derived key for ECDH)
    pub shared_secret: Vec<u8>,
    /// KEM ciphertext sent back by the responder. Empty for Diffie-Hellman,
    /// where the responder's public key is consumed inside `establish`.
    pub ciphertext: Vec<u8>,
}

/// Take the first 32 bytes of a shared secret as an AES-256 key
pub fn truncate_key(secret: &[u8]) -> Result<Key, CryptoError> {
    secret
        .get(..32)
        .and_then(|s| s.try_into().ok())
        .ok_or(CryptoError::InvalidKeyLength(secret.len()))
}

/// A key establishment scheme the demo can run end to end
pub trait KeyExchangeAlgorithm: Send + Sync {
    fn pipeline(&self) -> Pipeline;

    /// Fixed names and labels used in the comparison table
    fn profile(&self) -> Profile;

    /// Generate the initiator's ephemeral keypair
    fn generate_key_pair(&self) -> Result<KeyPair, CryptoError>;

    /// Derive or encapsulate a shared secret against `key_pair`
    fn establish(&self, key_pair: &KeyPair) -> Result<Agreement, CryptoError>;

    /// Report the sizes shown in the comparison table
    fn sizes(&self, key_pair: &KeyPair, agreement: &Agreement, blob: &[u8]) -> Artifacts;

    /// Build the seven display steps for one run
    fn trace(
        &self,
        credentials: &Credentials,
        key_pair: &KeyPair,
        agreement: &Agreement,
        blob: &str,
    ) -> Vec<StepRecord>;
}

/// Everything kept from a pipeline run. Key material is not retained.
#[derive(Debug, Clone)]
pub struct PipelineRun {
    pub pipeline: Pipeline,
    pub steps: Vec<StepRecord>,
    pub profile: Profile,
    pub artifacts: Artifacts,
    /// The CipherBlob, hex(IV || ciphertext), previewed in the trace
    pub blob: String,
}

/// Run one algorithm over the credentials
pub fn run(
    algorithm: &dyn KeyExchangeAlgorithm,
    credentials: &Credentials,
) -> Result<PipelineRun, CryptoError> {
    let (run, _key) = execute(algorithm, credentials)?;
    Ok(run)
}

/// Like [`run`], also handing back the AES key the blob was sealed with
pub(crate) fn execute(
    algorithm: &dyn KeyExchangeAlgorithm,
    credentials: &Credentials,
) -> Result<(PipelineRun, Key), CryptoError> {
    let pipeline = algorithm.pipeline();

    let key_pair = algorithm.generate_key_pair()?;
    let agreement = algorithm.establish(&key_pair)?;
    let blob = cipher::seal(&agreement.key, &credentials.plaintext())?;

    let artifacts = algorithm.sizes(&key_pair, &agreement, &blob);
    let blob = hex::encode(&blob);
    let steps = algorithm.trace(credentials, &key_pair, &agreement, &blob);

    debug!(
        %pipeline,
        steps = steps.len(),
        public_key_len = artifacts.public_key_len,
        ciphertext_len = artifacts.ciphertext_len,
        "pipeline completed"
    );

    let run = PipelineRun {
        pipeline,
        steps,
        profile: algorithm.profile(),
        artifacts,
        blob,
    };
    Ok((run, agreement.key))
}
