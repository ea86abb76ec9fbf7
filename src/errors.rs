use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in PassVault.
#[derive(Debug, Error)]
pub enum PassVaultError {
    // --- Key errors ---
    #[error("Encryption key not found at {0}")]
    KeyNotFound(PathBuf),

    #[error("Invalid key size: expected {expected} bytes, found {actual}")]
    InvalidKeySize { expected: usize, actual: usize },

    #[error("Encryption key is missing but a vault file exists — refusing to create a new key")]
    KeyMissingForExistingVault,

    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Malformed envelope: {0}")]
    MalformedEnvelope(String),

    #[error("Decryption failed — wrong key or corrupted data")]
    AuthenticationFailed,

    // --- Vault errors ---
    #[error("Vault not found at {0}")]
    VaultNotFound(PathBuf),

    #[error("Malformed vault document: {0}")]
    MalformedDocument(String),

    #[error("Entry '{0}' not found")]
    EntryNotFound(String),

    #[error("Entry '{0}' already exists")]
    EntryAlreadyExists(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error ({context}): {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- Generator errors ---
    #[error("Invalid password options: {0}")]
    InvalidPasswordOptions(String),

    // --- CLI errors ---
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    #[error("Command failed: {0}")]
    CommandFailed(String),

    /// A lower-layer error wrapped with the operation that was in flight.
    #[error("failed to {operation}: {source}")]
    Operation {
        operation: &'static str,
        #[source]
        source: Box<PassVaultError>,
    },
}

impl PassVaultError {
    /// Build a closure that turns an `io::Error` into `PassVaultError::Io`.
    ///
    /// Intended for `map_err`: `fs::read(path).map_err(PassVaultError::io("read key file"))`.
    pub fn io(context: impl Into<String>) -> impl FnOnce(std::io::Error) -> Self {
        let context = context.into();
        move |source| Self::Io { context, source }
    }

    /// The innermost error, skipping any `Operation` wrappers.
    pub fn root_cause(&self) -> &PassVaultError {
        let mut current = self;
        while let Self::Operation { source, .. } = current {
            current = source;
        }
        current
    }
}

/// Attach an operation label to a failing result.
pub trait ResultExt<T> {
    fn context(self, operation: &'static str) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, operation: &'static str) -> Result<T> {
        self.map_err(|e| PassVaultError::Operation {
            operation,
            source: Box::new(e),
        })
    }
}

/// Convenience type alias for PassVault results.
pub type Result<T> = std::result::Result<T, PassVaultError>;
