//! Lifecycle of the single vault encryption key.
//!
//! The key is 32 random bytes stored raw in `<base_dir>/key.bin` with
//! owner-only permissions.  It is read fresh from disk on every
//! encrypt/decrypt call and never cached in the process.

use std::fs;
use std::path::{Path, PathBuf};

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::OsRng;
use tracing::{debug, info};
use zeroize::{Zeroize, Zeroizing};

use crate::config::VaultConfig;
use crate::errors::{PassVaultError, Result};
use crate::secure_fs;

/// Length of the AES-256 key in bytes.
pub const KEY_LEN: usize = 32;

/// A 32-byte key that zeroes its memory when dropped.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct VaultKey {
    bytes: [u8; KEY_LEN],
}

impl VaultKey {
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

/// Generates, persists, and loads the key file.
#[derive(Debug, Clone)]
pub struct KeyManager {
    key_path: PathBuf,
}

impl KeyManager {
    pub fn new(config: VaultConfig) -> Self {
        Self {
            key_path: config.key_path(),
        }
    }

    pub fn key_path(&self) -> &Path {
        &self.key_path
    }

    /// Generate a fresh random key and write it to the key file.
    ///
    /// Overwrites an existing key — callers must gate this on
    /// `key_exists` or every vault encrypted with the old key is lost.
    pub fn initialize_key(&self) -> Result<()> {
        let mut bytes = Zeroizing::new([0u8; KEY_LEN]);
        OsRng
            .try_fill_bytes(&mut bytes[..])
            .map_err(|e| PassVaultError::EncryptionFailed(format!("random source: {e}")))?;

        secure_fs::write_private_atomic(&self.key_path, &bytes[..])?;

        info!(path = %self.key_path.display(), "generated new encryption key");
        Ok(())
    }

    /// `true` if the key file can be stat'ed; any error counts as absent.
    pub fn key_exists(&self) -> bool {
        fs::metadata(&self.key_path).is_ok()
    }

    /// Read the key file and validate its length.
    pub fn load_key(&self) -> Result<VaultKey> {
        if !self.key_exists() {
            return Err(PassVaultError::KeyNotFound(self.key_path.clone()));
        }

        let data = Zeroizing::new(
            fs::read(&self.key_path)
                .map_err(PassVaultError::io(format!("read {}", self.key_path.display())))?,
        );

        let bytes: [u8; KEY_LEN] = data
            .as_slice()
            .try_into()
            .map_err(|_| PassVaultError::InvalidKeySize {
                expected: KEY_LEN,
                actual: data.len(),
            })?;

        debug!(path = %self.key_path.display(), "loaded encryption key");
        Ok(VaultKey::new(bytes))
    }
}
