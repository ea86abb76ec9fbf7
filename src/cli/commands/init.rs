//! `passvault init` — create the key and an empty vault.

use crate::cli::output;
use crate::cli::{vault_config, Cli};
use crate::crypto::AesGcmCrypto;
use crate::errors::Result;
use crate::service::{self, InitOutcome};
use crate::vault::FileVaultRepository;

/// Execute the `init` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let config = vault_config(cli)?;
    let crypto = AesGcmCrypto::from_config(config.clone());
    let repo = FileVaultRepository::new(config.clone(), crypto);

    match service::initialize(repo.crypto(), &repo)? {
        InitOutcome::Created => {
            output::success(&format!("Created key at {}", config.key_path().display()));
            output::success(&format!("Created vault at {}", config.vault_path().display()));
            output::warning("Back up key.bin — without it the vault cannot be decrypted.");
        }
        InitOutcome::VaultCreated => {
            output::success(&format!(
                "Created empty vault at {}",
                config.vault_path().display()
            ));
        }
        InitOutcome::AlreadyInitialized => {
            output::info(&format!(
                "Vault already initialized in {}",
                config.base_dir().display()
            ));
        }
    }

    output::tip("Run `passvault add <TITLE>` to store a password.");
    Ok(())
}
