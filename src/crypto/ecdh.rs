use p256::{
    ecdh::{EphemeralSecret, SharedSecret},
    elliptic_curve::sec1::ToEncodedPoint,
    PublicKey,
};
use rand::rngs::OsRng;

/// Ephemeral P-256 keypair for Diffie-Hellman
pub struct EcdhKeypair {
    pub sk: EphemeralSecret,
    pub pk: PublicKey,
}

impl EcdhKeypair {
    /// Generate a new ephemeral P-256 keypair
    pub fn keygen() -> Self {
        let sk = EphemeralSecret::random(&mut OsRng);
        let pk = PublicKey::from(&sk);
        Self { sk, pk }
    }

    /// Public key as an uncompressed SEC1 point (65 bytes)
    pub fn public_bytes(&self) -> Vec<u8> {
        encode_public(&self.pk)
    }
}

pub fn encode_public(pk: &PublicKey) -> Vec<u8> {
    pk.to_encoded_point(false).as_bytes().to_vec()
}

/// Compute the raw shared value from your secret key and their public key
pub fn shared_secret(sk: &EphemeralSecret, their_pk: &PublicKey) -> SharedSecret {
    sk.diffie_hellman(their_pk)
}
