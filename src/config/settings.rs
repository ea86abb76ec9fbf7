use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{PassVaultError, Result};
use crate::generator::PasswordOptions;
use crate::vault::SortOrder;

/// User preferences, loaded from `<base_dir>/config.toml`.
///
/// Every field has a sensible default so PassVault works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// How `list` orders entries (title, created, updated, viewed).
    #[serde(default)]
    pub sort_order: SortOrder,

    /// Length of generated passwords.
    #[serde(default = "default_password_length")]
    pub password_length: usize,

    /// Whether generated passwords include symbols.
    #[serde(default)]
    pub password_symbols: bool,

    /// Mask passwords in `show` unless `--reveal` is given.
    #[serde(default = "default_mask_passwords")]
    pub mask_passwords: bool,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_password_length() -> usize {
    16
}

fn default_mask_passwords() -> bool {
    true
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            sort_order: SortOrder::default(),
            password_length: default_password_length(),
            password_symbols: false,
            mask_passwords: default_mask_passwords(),
        }
    }
}

impl Settings {
    /// Load settings from `path`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(PassVaultError::io(format!("read {}", path.display())))?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            PassVaultError::ConfigError(format!("Failed to parse {}: {e}", path.display()))
        })?;

        Ok(settings)
    }

    /// Generator options seeded from these settings.
    pub fn password_options(&self) -> PasswordOptions {
        PasswordOptions {
            length: self.password_length,
            symbols: self.password_symbols,
            ..PasswordOptions::default()
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────
