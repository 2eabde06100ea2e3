use hkdf::Hkdf;
use sha2::Sha256;

use crate::error::CryptoError;

/// Context label bound into the classical session key
pub const HANDSHAKE_INFO: &[u8] = b"handshake data";

pub type Key = [u8; 32];

/// Derive a 32-byte AES key from a shared secret using HKDF-SHA256
pub fn derive_key(ikm: &[u8], salt: Option<&[u8]>, info: &[u8]) -> Result<Key, CryptoError> {
    let hk = Hkdf::<Sha256>::new(salt, ikm);
    let mut okm = [0u8; 32];
    hk.expand(info, &mut okm)
        .map_err(|_| CryptoError::KeyDerivation)?;
    Ok(okm)
}
