//! Use cases consumed by the presentation layer.
//!
//! Every operation is one full load → mutate → save cycle against a
//! `VaultRepository`; nothing is cached between calls.

use tracing::{debug, info, warn};

use crate::crypto::CryptoService;
use crate::errors::{PassVaultError, Result, ResultExt};
use crate::vault::{Entry, EntryFields, Vault, VaultRepository};

/// What `initialize` had to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// Generated a key and wrote an empty vault.
    Created,
    /// The key existed; wrote an empty vault next to it.
    VaultCreated,
    /// Key and vault were both present; nothing written.
    AlreadyInitialized,
}

/// First-run setup: make sure a key and a vault file exist.
///
/// A vault without a key is an error rather than a reason to generate
/// one, since the new key could never decrypt the existing file.
pub fn initialize<C, R>(crypto: &C, repo: &R) -> Result<InitOutcome>
where
    C: CryptoService + ?Sized,
    R: VaultRepository + ?Sized,
{
    let key_exists = crypto.key_exists();
    let vault_exists = repo.exists();

    match (key_exists, vault_exists) {
        (true, true) => Ok(InitOutcome::AlreadyInitialized),
        (true, false) => {
            repo.save(&Vault::new()).context("create vault")?;
            info!("created empty vault for existing key");
            Ok(InitOutcome::VaultCreated)
        }
        (false, false) => {
            crypto.initialize_key().context("initialize key")?;
            repo.save(&Vault::new()).context("create vault")?;
            info!("first-run setup complete");
            Ok(InitOutcome::Created)
        }
        (false, true) => {
            warn!("vault present without a key; refusing to generate a new key");
            Err(PassVaultError::KeyMissingForExistingVault)
        }
    }
}

/// The five vault operations, each a standalone load-mutate-save cycle.
pub struct VaultService<R> {
    repo: R,
}

impl<R: VaultRepository> VaultService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// All entries, in no particular order.
    pub fn list_entries(&self) -> Result<Vec<Entry>> {
        let vault = self.repo.load().context("load vault")?;
        debug!(entries = vault.len(), "listed entries");
        Ok(vault.list_entries())
    }

    /// Fetch one entry and persist its new `last_viewed_at`.
    pub fn get_entry(&self, id: &str) -> Result<Entry> {
        let mut vault = self.repo.load().context("load vault")?;
        let mut entry = vault.get_entry(id).context("get entry")?;

        entry.mark_as_viewed();
        vault
            .update_entry(entry.clone())
            .context("record entry view")?;
        self.repo.save(&vault).context("save vault")?;

        debug!(id, "viewed entry");
        Ok(entry)
    }

    /// Add a new entry and return its generated ID.
    pub fn create_entry(&self, fields: &EntryFields) -> Result<String> {
        let mut vault = self.repo.load().context("load vault")?;
        let entry = Entry::new(fields);
        let id = entry.id.clone();

        vault.create_entry(entry).context("create entry")?;
        self.repo.save(&vault).context("save vault")?;

        info!(id = %id, "created entry");
        Ok(id)
    }

    /// Replace every editable field of entry `id`.
    pub fn update_entry(&self, id: &str, fields: &EntryFields) -> Result<()> {
        let mut vault = self.repo.load().context("load vault")?;
        let mut entry = vault.get_entry(id).context("get entry")?;

        entry.update(fields);
        vault.update_entry(entry).context("update entry")?;
        self.repo.save(&vault).context("save vault")?;

        info!(id, "updated entry");
        Ok(())
    }

    pub fn delete_entry(&self, id: &str) -> Result<()> {
        let mut vault = self.repo.load().context("load vault")?;

        vault.delete_entry(id).context("delete entry")?;
        self.repo.save(&vault).context("save vault")?;

        info!(id, "deleted entry");
        Ok(())
    }
}
