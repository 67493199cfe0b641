use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// All errors that can occur in PassVault.
#[derive(Debug, Error)]
pub enum VaultError {
    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Integrity check failed — wrong key or corrupted data")]
    IntegrityFailure,

    #[error("Key unavailable: {0}")]
    KeyUnavailable(String),

    // --- Vault errors ---
    #[error("Vault not found at {0}")]
    VaultNotFound(PathBuf),

    #[error("Record {0} not found")]
    NotFound(Uuid),

    #[error("Record {0} has no stored secret")]
    NoSecret(Uuid),

    // --- Keystore errors ---
    #[error("Keystore error: {0}")]
    KeystoreError(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationFailure(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("User cancelled operation")]
    UserCancelled,

    #[error("Clipboard error: {0}")]
    ClipboardError(String),
}

/// Convenience type alias for PassVault results.
pub type Result<T> = std::result::Result<T, VaultError>;
