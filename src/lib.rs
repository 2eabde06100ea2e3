//! # kex-compare: Classical vs Post-Quantum Key Exchange
//!
//! Protects one credential pair twice and traces every step:
//! - **ECDH (P-256) + HKDF-SHA256 + AES-CFB**, vulnerable to Shor's algorithm
//! - **ML-KEM-768 + AES-CFB**, lattice-based and believed quantum resistant
//!
//! Both sides of each handshake are simulated in-process. The result is a
//! fixed seven-step trace per pipeline plus a size/security comparison,
//! ready to serialize as JSON.
//!
//! ## Example
//!
//! ```rust,no_run
//! use kex_compare::Demo;
//!
//! let demo = Demo::new();
//! let result = demo.simulate("alice", "secret123").unwrap();
//!
//! assert_eq!(result.classical.len(), 7);
//! assert_eq!(result.comparison.pqc.quantum_safe, "YES (Lattice-Based)");
//! ```

pub mod comparison;
pub mod config;
pub mod credentials;
pub mod crypto;
pub mod demo;
pub mod error;
pub mod exchange;
pub mod trace;
pub mod web;

pub use comparison::{Comparison, Metrics};
pub use config::Config;
pub use credentials::Credentials;
pub use demo::{Demo, DemoResult};
pub use error::{CryptoError, DecodeError, DemoError};
pub use exchange::{ClassicalExchange, KeyExchangeAlgorithm, Pipeline, PqcExchange};
pub use trace::StepRecord;
