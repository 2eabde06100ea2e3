//! ML-KEM-768 (NIST security category 3).

use ml_kem::{
    kem::{Decapsulate, Encapsulate},
    Encoded, EncodedSizeUser, KemCore, MlKem768,
};
use rand::rngs::OsRng;

use crate::error::CryptoError;

pub type EncapsulationKey = <MlKem768 as KemCore>::EncapsulationKey;
pub type DecapsulationKey = <MlKem768 as KemCore>::DecapsulationKey;

pub const PUBLIC_KEY_LEN: usize = 1184;
pub const SECRET_KEY_LEN: usize = 2400;
pub const CIPHERTEXT_LEN: usize = 1088;
pub const SHARED_SECRET_LEN: usize = 32;

pub struct KemKeypair {
    pub dk: DecapsulationKey,
    pub ek: EncapsulationKey,
}

impl KemKeypair {
    pub fn keygen() -> Self {
        let (dk, ek) = MlKem768::generate(&mut OsRng);
        Self { dk, ek }
    }

    pub fn public_bytes(&self) -> Vec<u8> {
        self.ek.as_bytes().to_vec()
    }
}

/// Encapsulate against an encoded public key.
/// Returns `(ciphertext, shared_secret)`.
pub fn encapsulate(public_key: &[u8]) -> Result<(Vec<u8>, Vec<u8>), CryptoError> {
    let encoded: Encoded<EncapsulationKey> = public_key
        .try_into()
        .map_err(|_| CryptoError::InvalidPublicKey)?;
    let ek = EncapsulationKey::from_bytes(&encoded);

    let (ct, ss) = ek
        .encapsulate(&mut OsRng)
        .map_err(|_| CryptoError::Encapsulation)?;
    Ok((ct.to_vec(), ss.to_vec()))
}

/// Recover the shared secret from a ciphertext
pub fn decapsulate(dk: &DecapsulationKey, ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let ct: ml_kem::Ciphertext<MlKem768> = ciphertext
        .try_into()
        .map_err(|_| CryptoError::Encapsulation)?;
    let ss = dk
        .decapsulate(&ct)
        .map_err(|_| CryptoError::Encapsulation)?;
    Ok(ss.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_sizes() {
        let kp = KemKeypair::keygen();
        assert_eq!(kp.public_bytes().len(), PUBLIC_KEY_LEN);
        assert_eq!(kp.dk.as_bytes().len(), SECRET_KEY_LEN);

        let (ct, ss) = encapsulate(&kp.public_bytes()).unwrap();
        assert_eq!(ct.len(), CIPHERTEXT_LEN);
        assert_eq!(ss.len(), SHARED_SECRET_LEN);
    }

    #[test]
    fn test_encapsulate_decapsulate_roundtrip() {
        let kp = KemKeypair::keygen();
        let (ct, ss_enc) = encapsulate(&kp.public_bytes()).unwrap();
        let ss_dec = decapsulate(&kp.dk, &ct).unwrap();
        assert_eq!(ss_enc, ss_dec);
    }

    #[test]
    fn test_different_encapsulations_different_secrets() {
        let kp = KemKeypair::keygen();
        let (ct1, ss1) = encapsulate(&kp.public_bytes()).unwrap();
        let (ct2, ss2) = encapsulate(&kp.public_bytes()).unwrap();
        assert_ne!(ct1, ct2);
        assert_ne!(ss1, ss2);
    }

    #[test]
    fn test_wrong_size_public_key_rejected() {
        assert!(matches!(
            encapsulate(&[0u8; 32]),
            Err(CryptoError::InvalidPublicKey)
        ));
    }

    #[test]
    fn test_wrong_size_ciphertext_rejected() {
        let kp = KemKeypair::keygen();
        assert!(decapsulate(&kp.dk, &[0u8; 10]).is_err());
    }
}
