//! Plaintext vault document encoding.
//!
//! After decryption the vault is a JSON document:
//!
//! ```text
//! {
//!   "version": "1.0",
//!   "entries": { "<id>": { "id": "<id>", "title": ..., "last_viewed_at": ... }, ... },
//!   "updated_at": "<RFC 3339 timestamp>"
//! }
//! ```
//!
//! Entries are written in ID order so the same vault always encodes to
//! the same bytes.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use super::entry::Entry;
use super::model::Vault;
use crate::errors::{PassVaultError, Result};

/// Format tag written by every save.
pub const CURRENT_VERSION: &str = "1.0";

#[derive(Serialize)]
struct DocumentRef<'a> {
    version: &'static str,
    entries: &'a BTreeMap<String, Entry>,
    updated_at: DateTime<Utc>,
}

#[derive(Deserialize)]
struct Document {
    version: String,
    entries: BTreeMap<String, Entry>,
    updated_at: DateTime<Utc>,
}

/// Serialize a vault to its canonical JSON bytes.
///
/// Always stamps `CURRENT_VERSION`, whatever version the vault was read with.
pub fn encode(vault: &Vault) -> Result<Zeroizing<Vec<u8>>> {
    let doc = DocumentRef {
        version: CURRENT_VERSION,
        entries: vault.entries(),
        updated_at: vault.updated_at(),
    };
    serde_json::to_vec_pretty(&doc)
        .map(Zeroizing::new)
        .map_err(|e| PassVaultError::SerializationError(format!("vault document: {e}")))
}

/// Parse decrypted bytes back into a vault.
///
/// Every map key must equal the `id` of the entry stored under it.
pub fn decode(data: &[u8]) -> Result<Vault> {
    let doc: Document = serde_json::from_slice(data)
        .map_err(|e| PassVaultError::MalformedDocument(e.to_string()))?;

    if let Some((key, entry)) = doc.entries.iter().find(|(key, entry)| **key != entry.id) {
        return Err(PassVaultError::MalformedDocument(format!(
            "entry stored under '{key}' has id '{}'",
            entry.id
        )));
    }

    Ok(Vault::from_parts(doc.version, doc.entries, doc.updated_at))
}
