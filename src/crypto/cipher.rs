//! AES-CFB over UTF-8 strings.
//!
//! The blob format is `hex(IV || ciphertext)` with a 16-byte random IV.
//! There is no authentication tag: flipped ciphertext bits decrypt to
//! garbage without any error.

use aes::{Aes128, Aes192, Aes256};
use cfb_mode::cipher::{AsyncStreamCipher, KeyIvInit};
use cfb_mode::{Decryptor, Encryptor};

use super::random_bytes;
use crate::error::{CryptoError, DecodeError};

pub const IV_LEN: usize = 16;

/// Encrypt `plaintext` under `key` and return hex(IV || ciphertext)
///
/// The key length picks the variant: 16, 24 or 32 bytes for AES-128/192/256.
pub fn encrypt(key: &[u8], plaintext: &str) -> Result<String, CryptoError> {
    Ok(hex::encode(seal(key, plaintext)?))
}

/// Same as [`encrypt`] without the hex encoding
pub fn seal(key: &[u8], plaintext: &str) -> Result<Vec<u8>, CryptoError> {
    let iv = random_bytes::<IV_LEN>()?;
    let mut buf = plaintext.as_bytes().to_vec();
    encrypt_in_place(key, &iv, &mut buf)?;

    let mut blob = Vec::with_capacity(IV_LEN + buf.len());
    blob.extend_from_slice(&iv);
    blob.extend_from_slice(&buf);
    Ok(blob)
}

/// Decrypt a hex blob produced by [`encrypt`]
pub fn decrypt(key: &[u8], blob: &str) -> Result<String, DecodeError> {
    let data = hex::decode(blob)?;
    if data.len() < IV_LEN {
        return Err(DecodeError::Truncated { len: data.len() });
    }

    let (iv, ciphertext) = data.split_at(IV_LEN);
    let mut buf = ciphertext.to_vec();
    decrypt_in_place(key, iv, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

fn encrypt_in_place(key: &[u8], iv: &[u8], buf: &mut [u8]) -> Result<(), CryptoError> {
    let bad_key = |_| CryptoError::InvalidKeyLength(key.len());
    match key.len() {
        16 => Encryptor::<Aes128>::new_from_slices(key, iv).map_err(bad_key)?.encrypt(buf),
        24 => Encryptor::<Aes192>::new_from_slices(key, iv).map_err(bad_key)?.encrypt(buf),
        32 => Encryptor::<Aes256>::new_from_slices(key, iv).map_err(bad_key)?.encrypt(buf),
        n => return Err(CryptoError::InvalidKeyLength(n)),
    }
    Ok(())
}

fn decrypt_in_place(key: &[u8], iv: &[u8], buf: &mut [u8]) -> Result<(), CryptoError> {
    let bad_key = |_| CryptoError::InvalidKeyLength(key.len());
    match key.len() {
        16 => Decryptor::<Aes128>::new_from_slices(key, iv).map_err(bad_key)?.decrypt(buf),
        24 => Decryptor::<Aes192>::new_from_slices(key, iv).map_err(bad_key)?.decrypt(buf),
        32 => Decryptor::<Aes256>::new_from_slices(key, iv).map_err(bad_key)?.decrypt(buf),
        n => return Err(CryptoError::InvalidKeyLength(n)),
    }
    Ok(())
}
