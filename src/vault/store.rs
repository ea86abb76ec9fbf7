//! Durable vault storage.
//!
//! `FileVaultRepository` translates between the plaintext `Vault` and
//! the encrypted `vault.json.enc` file:
//!
//! - load: read bytes → `CryptoService::decrypt` → `format::decode`
//! - save: `format::encode` → `CryptoService::encrypt` → atomic write
//!
//! There is no locking; two concurrent saves are last-writer-wins.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::VaultConfig;
use crate::crypto::CryptoService;
use crate::errors::{PassVaultError, Result};
use crate::secure_fs;

use super::format;
use super::model::Vault;

/// The durable CRUD boundary consumed by `VaultService`.
pub trait VaultRepository {
    /// `true` if a vault file is present.
    fn exists(&self) -> bool;

    /// Read and decrypt the stored vault.
    fn load(&self) -> Result<Vault>;

    /// Encrypt and persist `vault`, fully replacing the previous contents.
    fn save(&self, vault: &Vault) -> Result<()>;
}

/// `VaultRepository` storing one encrypted document on disk.
#[derive(Debug, Clone)]
pub struct FileVaultRepository<C> {
    vault_path: PathBuf,
    crypto: C,
}

impl<C: CryptoService> FileVaultRepository<C> {
    pub fn new(config: VaultConfig, crypto: C) -> Self {
        Self {
            vault_path: config.vault_path(),
            crypto,
        }
    }

    pub fn path(&self) -> &Path {
        &self.vault_path
    }

    /// The crypto service, e.g. to run first-run key setup.
    pub fn crypto(&self) -> &C {
        &self.crypto
    }
}

impl<C: CryptoService> VaultRepository for FileVaultRepository<C> {
    fn exists(&self) -> bool {
        fs::metadata(&self.vault_path).is_ok()
    }

    fn load(&self) -> Result<Vault> {
        if !self.exists() {
            return Err(PassVaultError::VaultNotFound(self.vault_path.clone()));
        }

        let encrypted = fs::read(&self.vault_path)
            .map_err(PassVaultError::io(format!("read {}", self.vault_path.display())))?;
        let plaintext = self.crypto.decrypt(&encrypted)?;
        let vault = format::decode(&plaintext)?;

        debug!(
            path = %self.vault_path.display(),
            entries = vault.len(),
            version = vault.version(),
            "loaded vault"
        );
        Ok(vault)
    }

    fn save(&self, vault: &Vault) -> Result<()> {
        let plaintext = format::encode(vault)?;
        let encrypted = self.crypto.encrypt(&plaintext)?;

        secure_fs::write_private_atomic(&self.vault_path, &encrypted)?;

        info!(
            path = %self.vault_path.display(),
            entries = vault.len(),
            bytes = encrypted.len(),
            "saved vault"
        );
        Ok(())
    }
}
