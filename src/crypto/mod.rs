//! Cryptographic primitives for PassVault.
//!
//! This module provides:
//! - Key file lifecycle (`keys`)
//! - The nonce + ciphertext envelope encoding (`envelope`)
//! - AES-256-GCM encryption behind the `CryptoService` trait (`encryption`)

pub mod encryption;
pub mod envelope;
pub mod keys;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{AesGcmCrypto, CryptoService, KeyManager};
pub use encryption::{AesGcmCrypto, CryptoService, NONCE_LEN};
pub use envelope::Envelope;
pub use keys::{KeyManager, VaultKey, KEY_LEN};
