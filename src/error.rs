use thiserror::Error;

use crate::exchange::Pipeline;

/// Failures inside key generation, derivation, encapsulation or the cipher
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Random number generator failure")]
    Rng,
    #[error("Key derivation failed")]
    KeyDerivation,
    #[error("Encapsulation failed")]
    Encapsulation,
    #[error("Invalid public key")]
    InvalidPublicKey,
    #[error("Invalid key length: {0} bytes")]
    InvalidKeyLength(usize),
    #[error("Private key does not belong to this algorithm")]
    KeyMismatch,
}

/// Failures while turning a hex cipher blob back into plaintext
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Malformed hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("Blob too short: {len} bytes, need at least 16")]
    Truncated { len: usize },
    #[error("Plaintext is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("Cipher error: {0}")]
    Cipher(#[from] CryptoError),
}

/// Errors returned by [`crate::Demo::simulate`]
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("Missing credentials")]
    Validation,
    /// The inner error is kept for logging only and never rendered.
    #[error("Cryptographic operation failed")]
    Crypto(#[source] CryptoError),
    #[error("The {0} pipeline did not run")]
    Incomplete(Pipeline),
}

impl From<CryptoError> for DemoError {
    fn from(err: CryptoError) -> Self {
        DemoError::Crypto(err)
    }
}
