//! End-to-end tests for first-run setup and the vault use cases.

use std::cell::{Cell, RefCell};
use std::fs;

use passvault::config::VaultConfig;
use passvault::crypto::{AesGcmCrypto, CryptoService};
use passvault::errors::{PassVaultError, Result};
use passvault::service::{initialize, InitOutcome, VaultService};
use passvault::vault::{EntryFields, FileVaultRepository, Vault, VaultRepository};
use tempfile::TempDir;
use zeroize::Zeroizing;

type Service = VaultService<FileVaultRepository<AesGcmCrypto>>;

fn repository(config: &VaultConfig) -> FileVaultRepository<AesGcmCrypto> {
    FileVaultRepository::new(config.clone(), AesGcmCrypto::from_config(config.clone()))
}

fn github() -> EntryFields {
    EntryFields {
        title: "GitHub".into(),
        username: "me".into(),
        password: "p4ss".into(),
        url: "https://github.com".into(),
        notes: String::new(),
    }
}

/// Helper: an initialized service over a fresh temp dir.
fn service() -> (TempDir, Service) {
    let dir = TempDir::new().expect("create temp dir");
    let config = VaultConfig::new(dir.path());
    let repo = repository(&config);
    initialize(repo.crypto(), &repo).expect("initialize");
    (dir, VaultService::new(repo))
}

#[test]
fn end_to_end_scenario() {
    let dir = TempDir::new().unwrap();
    let config = VaultConfig::new(dir.path());
    let repo = repository(&config);

    assert!(!repo.crypto().key_exists());
    repo.crypto().initialize_key().unwrap();
    repo.save(&Vault::new()).unwrap();
    assert!(repo.exists());

    let service = VaultService::new(repo);
    let id = service.create_entry(&github()).unwrap();

    let entries = service.list_entries().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].title, "GitHub");
    assert!(entries[0].last_viewed_at.is_none());

    let entry = service.get_entry(&id).unwrap();
    assert_eq!(entry.id, id);
    assert_eq!(entry.password, "p4ss");
    assert!(entry.last_viewed_at.is_some());

    service.delete_entry(&id).unwrap();
    assert!(service.list_entries().unwrap().is_empty());
}

#[test]
fn view_time_survives_reopen() {
    let (dir, service) = service();
    let id = service.create_entry(&github()).unwrap();
    let viewed = service.get_entry(&id).unwrap();

    let reopened = VaultService::new(repository(&VaultConfig::new(dir.path())));
    let entries = reopened.list_entries().unwrap();
    assert_eq!(entries[0].last_viewed_at, viewed.last_viewed_at);
}

#[test]
fn update_replaces_fields_and_keeps_identity() {
    let (_dir, service) = service();
    let id = service.create_entry(&github()).unwrap();
    let before = service.list_entries().unwrap().remove(0);

    let mut fields = before.fields();
    fields.password = "n3w-pass".into();
    fields.notes = "rotated".into();
    service.update_entry(&id, &fields).unwrap();

    let after = service.list_entries().unwrap().remove(0);
    assert_eq!(after.id, id);
    assert_eq!(after.title, "GitHub");
    assert_eq!(after.password, "n3w-pass");
    assert_eq!(after.notes, "rotated");
    assert_eq!(after.created_at, before.created_at);
    assert!(after.updated_at > before.updated_at);
}

#[test]
fn vault_timestamp_increases_on_every_mutation() {
    let (_dir, service) = service();
    let stamp = || service.repository().load().unwrap().updated_at();

    let t0 = stamp();
    let id = service.create_entry(&github()).unwrap();
    let t1 = stamp();
    service.update_entry(&id, &github()).unwrap();
    let t2 = stamp();
    service.delete_entry(&id).unwrap();
    let t3 = stamp();

    assert!(t0 < t1 && t1 < t2 && t2 < t3);
}

#[test]
fn operations_on_unknown_id_fail() {
    let (_dir, service) = service();

    for err in [
        service.get_entry("nope").unwrap_err(),
        service.update_entry("nope", &github()).unwrap_err(),
        service.delete_entry("nope").unwrap_err(),
    ] {
        assert!(matches!(err.root_cause(), PassVaultError::EntryNotFound(id) if id == "nope"));
    }
}

// ---------------------------------------------------------------------------
// First-run setup
// ---------------------------------------------------------------------------

#[test]
fn initialize_fresh_dir_creates_key_and_vault() {
    let dir = TempDir::new().unwrap();
    let config = VaultConfig::new(dir.path().join("nested"));
    let repo = repository(&config);

    assert_eq!(
        initialize(repo.crypto(), &repo).unwrap(),
        InitOutcome::Created
    );
    assert!(config.key_path().exists());
    assert!(config.vault_path().exists());
    assert!(repo.load().unwrap().is_empty());
}

#[test]
fn initialize_is_idempotent() {
    let (dir, service) = service();
    let id = service.create_entry(&github()).unwrap();

    let repo = repository(&VaultConfig::new(dir.path()));
    assert_eq!(
        initialize(repo.crypto(), &repo).unwrap(),
        InitOutcome::AlreadyInitialized
    );
    assert!(repo.load().unwrap().contains(&id));
}

#[test]
fn initialize_with_key_only_creates_vault() {
    let dir = TempDir::new().unwrap();
    let config = VaultConfig::new(dir.path());
    let repo = repository(&config);
    repo.crypto().initialize_key().unwrap();
    let key_before = fs::read(config.key_path()).unwrap();

    assert_eq!(
        initialize(repo.crypto(), &repo).unwrap(),
        InitOutcome::VaultCreated
    );
    assert_eq!(fs::read(config.key_path()).unwrap(), key_before);
}

#[test]
fn initialize_refuses_vault_without_key() {
    let (dir, _service) = service();
    let config = VaultConfig::new(dir.path());
    let vault_before = fs::read(config.vault_path()).unwrap();
    fs::remove_file(config.key_path()).unwrap();

    let repo = repository(&config);
    assert!(matches!(
        initialize(repo.crypto(), &repo),
        Err(PassVaultError::KeyMissingForExistingVault)
    ));
    assert!(!config.key_path().exists());
    assert_eq!(fs::read(config.vault_path()).unwrap(), vault_before);
}

// ---------------------------------------------------------------------------
// First-run setup against test doubles
// ---------------------------------------------------------------------------

/// Identity "encryption" that records key generation.
#[derive(Default)]
struct FakeCrypto {
    has_key: Cell<bool>,
    keys_generated: Cell<usize>,
}

impl CryptoService for FakeCrypto {
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        Ok(plaintext.to_vec())
    }

    fn decrypt(&self, envelope: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        Ok(Zeroizing::new(envelope.to_vec()))
    }

    fn initialize_key(&self) -> Result<()> {
        self.has_key.set(true);
        self.keys_generated.set(self.keys_generated.get() + 1);
        Ok(())
    }

    fn key_exists(&self) -> bool {
        self.has_key.get()
    }
}

#[derive(Default)]
struct MemoryRepository {
    stored: RefCell<Option<Vault>>,
}

impl VaultRepository for MemoryRepository {
    fn exists(&self) -> bool {
        self.stored.borrow().is_some()
    }

    fn load(&self) -> Result<Vault> {
        self.stored
            .borrow()
            .clone()
            .ok_or_else(|| PassVaultError::VaultNotFound("memory".into()))
    }

    fn save(&self, vault: &Vault) -> Result<()> {
        *self.stored.borrow_mut() = Some(vault.clone());
        Ok(())
    }
}

#[test]
fn initialize_with_doubles_generates_key_once() {
    let crypto = FakeCrypto::default();
    let repo = MemoryRepository::default();

    assert_eq!(initialize(&crypto, &repo).unwrap(), InitOutcome::Created);
    assert_eq!(
        initialize(&crypto, &repo).unwrap(),
        InitOutcome::AlreadyInitialized
    );
    assert_eq!(crypto.keys_generated.get(), 1);
    assert!(repo.load().unwrap().is_empty());
}

#[test]
fn initialize_with_doubles_never_replaces_key_for_existing_vault() {
    let crypto = FakeCrypto::default();
    let repo = MemoryRepository::default();
    repo.save(&Vault::new()).unwrap();

    assert!(initialize(&crypto, &repo).is_err());
    assert_eq!(crypto.keys_generated.get(), 0);
}

#[test]
fn service_runs_over_any_repository() {
    let service = VaultService::new(MemoryRepository::default());
    service.repository().save(&Vault::new()).unwrap();

    let id = service.create_entry(&github()).unwrap();
    assert_eq!(service.get_entry(&id).unwrap().title, "GitHub");
}
