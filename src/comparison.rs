//! Size and security comparison between the pipelines.
//!
//! Everything here is a pure function of sizes the exchanges report; no
//! randomness or cryptography happens in this module.

use serde::Serialize;

/// Fixed, human-readable description of one pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub algo: &'static str,
    /// What the reported ciphertext size measures
    pub payload: &'static str,
    pub quantum_safe: &'static str,
}

/// Byte counts produced by one run of a pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Artifacts {
    pub public_key_len: usize,
    pub ciphertext_len: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metrics {
    pub algo: String,
    pub pk_size: String,
    pub ct_size: String,
    pub quantum_safe: String,
}

impl Metrics {
    pub fn describe(profile: &Profile, artifacts: &Artifacts) -> Self {
        Self {
            algo: profile.algo.to_string(),
            pk_size: format!("{} Bytes", artifacts.public_key_len),
            ct_size: format!("{} Bytes ({})", artifacts.ciphertext_len, profile.payload),
            quantum_safe: profile.quantum_safe.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub classical: Metrics,
    pub pqc: Metrics,
}

impl Comparison {
    pub fn report(
        classical: (&Profile, &Artifacts),
        pqc: (&Profile, &Artifacts),
    ) -> Self {
        Self {
            classical: Metrics::describe(classical.0, classical.1),
            pqc: Metrics::describe(pqc.0, pqc.1),
        }
    }
}
