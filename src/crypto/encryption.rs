//! AES-256-GCM authenticated encryption of opaque byte buffers.
//!
//! Each call to `encrypt` loads the key from disk, generates a fresh
//! random 12-byte nonce, and wraps nonce + ciphertext in an `Envelope`.
//! No associated data is bound.

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Key, Nonce};
use tracing::debug;
use zeroize::Zeroizing;

use crate::config::VaultConfig;
use crate::errors::{PassVaultError, Result};

use super::envelope::Envelope;
use super::keys::{KeyManager, VaultKey};

/// Size of the AES-256-GCM nonce in bytes.
pub const NONCE_LEN: usize = 12;

/// Authenticated encryption over opaque buffers, plus first-run key setup.
///
/// `FileVaultRepository` only talks to this trait, so tests can swap in
/// a double without touching the filesystem key.
pub trait CryptoService {
    /// Encrypt `plaintext` into serialized envelope bytes.
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Decrypt envelope bytes produced by `encrypt`.
    ///
    /// Wrong keys and tampered data both fail with `AuthenticationFailed`.
    fn decrypt(&self, envelope: &[u8]) -> Result<Zeroizing<Vec<u8>>>;

    /// Generate and persist a new key (overwrites an existing one).
    fn initialize_key(&self) -> Result<()>;

    fn key_exists(&self) -> bool;
}

/// `CryptoService` backed by AES-256-GCM and a `KeyManager`.
#[derive(Debug, Clone)]
pub struct AesGcmCrypto {
    keys: KeyManager,
}

impl AesGcmCrypto {
    pub fn new(keys: KeyManager) -> Self {
        Self { keys }
    }

    pub fn from_config(config: VaultConfig) -> Self {
        Self::new(KeyManager::new(config))
    }

    pub fn key_manager(&self) -> &KeyManager {
        &self.keys
    }

    fn cipher(key: &VaultKey) -> Aes256Gcm {
        Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()))
    }
}

impl CryptoService for AesGcmCrypto {
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let key = self.keys.load_key()?;
        let cipher = Self::cipher(&key);

        // A fresh random nonce per call; never reused under this key.
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

        let ciphertext = cipher
            .encrypt(&nonce, plaintext)
            .map_err(|e| PassVaultError::EncryptionFailed(format!("encryption error: {e}")))?;

        let envelope = Envelope {
            nonce: nonce.to_vec(),
            ciphertext,
        };
        let bytes = envelope.to_bytes()?;

        debug!(
            plaintext_len = plaintext.len(),
            envelope_len = bytes.len(),
            "encrypted buffer"
        );
        Ok(bytes)
    }

    fn decrypt(&self, data: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        let envelope = Envelope::from_bytes(data)?;
        if envelope.nonce.len() != NONCE_LEN {
            return Err(PassVaultError::MalformedEnvelope(format!(
                "nonce must be {NONCE_LEN} bytes, got {}",
                envelope.nonce.len()
            )));
        }

        let key = self.keys.load_key()?;
        let cipher = Self::cipher(&key);
        let nonce = Nonce::from_slice(&envelope.nonce);

        // Decrypt and verify the auth tag; a wrong key looks the same as tampering.
        let plaintext = cipher
            .decrypt(nonce, envelope.ciphertext.as_slice())
            .map_err(|_| PassVaultError::AuthenticationFailed)?;

        debug!(plaintext_len = plaintext.len(), "decrypted buffer");
        Ok(Zeroizing::new(plaintext))
    }

    fn initialize_key(&self) -> Result<()> {
        self.keys.initialize_key()
    }

    fn key_exists(&self) -> bool {
        self.keys.key_exists()
    }
}
