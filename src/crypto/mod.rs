//! Thin wrappers over the RustCrypto primitives used by both pipelines.

pub mod cipher;
pub mod ecdh;
pub mod hkdf;
pub mod kem;

use rand::{rngs::OsRng, RngCore};

use crate::error::CryptoError;

/// Generate random bytes from the operating system RNG
pub fn random_bytes<const N: usize>() -> Result<[u8; N], CryptoError> {
    let mut bytes = [0u8; N];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|_| CryptoError::Rng)?;
    Ok(bytes)
}
