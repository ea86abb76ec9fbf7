//! Vault module — the plaintext data model and its encrypted storage.
//!
//! This module provides:
//! - `Entry`, `EntryFields`, and display ordering (`entry`)
//! - The `Vault` aggregate with its CRUD invariants (`model`)
//! - The JSON document encoding (`format`)
//! - The `VaultRepository` trait and its file-backed implementation (`store`)

pub mod entry;
pub mod format;
pub mod model;
pub mod store;

// Re-export the most commonly used items.
pub use entry::{Entry, EntryFields, SortOrder};
pub use format::CURRENT_VERSION;
pub use model::Vault;
pub use store::{FileVaultRepository, VaultRepository};
