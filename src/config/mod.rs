//! Configuration for PassVault.
//!
//! - `VaultConfig`: where the key, vault, and settings files live.
//! - `Settings`: user preferences loaded from `config.toml` (`settings`).

pub mod settings;

use std::path::{Path, PathBuf};

pub use settings::Settings;

/// File name of the raw symmetric key.
pub const KEY_FILE_NAME: &str = "key.bin";

/// File name of the encrypted vault document.
pub const VAULT_FILE_NAME: &str = "vault.json.enc";

/// File name of the optional settings file.
pub const SETTINGS_FILE_NAME: &str = "config.toml";

/// Directory used under `$HOME` when no base directory is given.
pub const DEFAULT_DIR_NAME: &str = ".passvault";

/// Locates every file PassVault owns under one base directory.
///
/// Passed by value into `KeyManager`, `AesGcmCrypto`, and
/// `FileVaultRepository` — there is no process-wide state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultConfig {
    base_dir: PathBuf,
}

impl VaultConfig {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// `$HOME/.passvault`, or `None` if the home directory is unknown.
    pub fn in_home_dir() -> Option<Self> {
        dirs::home_dir().map(|home| Self::new(home.join(DEFAULT_DIR_NAME)))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn key_path(&self) -> PathBuf {
        self.base_dir.join(KEY_FILE_NAME)
    }

    pub fn vault_path(&self) -> PathBuf {
        self.base_dir.join(VAULT_FILE_NAME)
    }

    pub fn settings_path(&self) -> PathBuf {
        self.base_dir.join(SETTINGS_FILE_NAME)
    }
}
