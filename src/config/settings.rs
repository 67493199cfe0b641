use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, VaultError};

/// User-level configuration, loaded from `.passvault.toml`.
///
/// Every field has a sensible default so PassVault works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory (relative to the base directory) where the vault file
    /// is stored.
    #[serde(default = "default_vault_dir")]
    pub vault_dir: String,

    /// Name of the encrypted vault file.
    #[serde(default = "default_vault_file")]
    pub vault_file: String,

    /// Service name used in the OS keyring.
    #[serde(default = "default_keyring_service")]
    pub keyring_service: String,

    /// Account identifier the symmetric key is stored under.
    #[serde(default = "default_keyring_account")]
    pub keyring_account: String,

    /// Default length for generated passwords.
    #[serde(default = "default_generator_length")]
    pub generator_length: usize,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_vault_dir() -> String {
    ".passvault".to_string()
}

fn default_vault_file() -> String {
    "passwords.encrypted".to_string()
}

fn default_keyring_service() -> String {
    "passvault".to_string()
}

fn default_keyring_account() -> String {
    "encryption-key".to_string()
}

fn default_generator_length() -> usize {
    16
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            vault_dir: default_vault_dir(),
            vault_file: default_vault_file(),
            keyring_service: default_keyring_service(),
            keyring_account: default_keyring_account(),
            generator_length: default_generator_length(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the base directory.
    const FILE_NAME: &'static str = ".passvault.toml";

    /// Load settings from `<base_dir>/.passvault.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(base_dir: &Path) -> Result<Self> {
        let config_path = base_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            VaultError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Build the full path to the vault file.
    ///
    /// Example: `base_dir/.passvault/passwords.encrypted`
    pub fn vault_path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.vault_dir).join(&self.vault_file)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
