//! CLI module — Clap argument parser, output helpers, and command
//! implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;
use uuid::Uuid;

use crate::config::Settings;
use crate::crypto::KeyManager;
use crate::errors::{Result, VaultError};
use crate::keystore::OsProtectedStore;
use crate::vault::VaultStore;

/// PassVault CLI: local encrypted password vault.
#[derive(Parser)]
#[command(
    name = "passvault",
    about = "Local encrypted password vault with a built-in generator",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base directory for config and vault (default: current directory)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    /// Discard an undecryptable vault and start empty (destructive)
    #[arg(long, global = true)]
    pub recover: bool,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Add a new record
    Add {
        /// Record title (e.g. "GitHub")
        #[arg(long)]
        title: String,
        /// Login name
        #[arg(long, default_value = "")]
        username: String,
        /// Website or service URL
        #[arg(long, default_value = "")]
        website: String,
        /// Free-form notes
        #[arg(long, default_value = "")]
        notes: String,
        /// Category tag (personal, work, finance, social, entertainment, shopping, other)
        #[arg(long, default_value = "personal")]
        category: String,
        /// Mark as favorite
        #[arg(long)]
        favorite: bool,
        /// Generate the secret instead of prompting
        #[arg(long)]
        generate: bool,
        /// Length for --generate (default from config)
        #[arg(long)]
        length: Option<usize>,
        /// Secret value (omit for interactive prompt; intended for scripting)
        #[arg(long)]
        value: Option<String>,
    },

    /// Show a record (metadata by default, secret with --reveal)
    Show {
        /// Record id, id prefix, or exact title
        query: String,
        /// Print the decrypted secret
        #[arg(long)]
        reveal: bool,
        /// Copy the decrypted secret to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// List records
    List {
        /// Only records with this category tag
        #[arg(long)]
        category: Option<String>,
        /// Only favorite records
        #[arg(long)]
        favorites: bool,
    },

    /// Search records by title, username, website, or notes
    Search {
        /// Case-insensitive substring
        query: String,
    },

    /// Edit fields of an existing record
    Edit {
        /// Record id, id prefix, or exact title
        query: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        website: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        category: Option<String>,
        /// Set or clear the favorite flag
        #[arg(long)]
        favorite: Option<bool>,
        /// Prompt for a replacement secret
        #[arg(long)]
        secret: bool,
    },

    /// Delete a record
    Delete {
        /// Record id, id prefix, or exact title
        query: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Delete every record in the vault
    Wipe {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Show vault statistics (count, weak, duplicates)
    Stats,

    /// Generate a random password
    Generate {
        /// Output length (default from config)
        #[arg(long)]
        length: Option<usize>,
        /// Disable uppercase letters
        #[arg(long)]
        no_upper: bool,
        /// Disable lowercase letters
        #[arg(long)]
        no_lower: bool,
        /// Disable digits
        #[arg(long)]
        no_digits: bool,
        /// Disable symbols
        #[arg(long)]
        no_symbols: bool,
        /// Keep visually confusable characters (0 O o I l 1)
        #[arg(long)]
        allow_ambiguous: bool,
    },

    /// Generate a word-based passphrase
    Passphrase {
        /// Number of words
        #[arg(long, default_value_t = 4)]
        words: usize,
        /// Token separator
        #[arg(long, default_value = "-")]
        separator: String,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

/// Resolve the base directory: `--base-dir` or the current directory.
pub fn base_dir(cli: &Cli) -> Result<PathBuf> {
    match &cli.base_dir {
        Some(dir) => Ok(dir.clone()),
        None => Ok(std::env::current_dir()?),
    }
}

/// Load settings for this invocation.
pub fn settings(cli: &Cli) -> Result<Settings> {
    Settings::load(&base_dir(cli)?)
}

/// Build the one vault instance for this invocation.
///
/// Explicitly constructed and passed down — no global singletons.  The
/// key comes from the OS keyring; if the newly generated key could not
/// be written there, a warning is printed because the vault will not
/// survive a restart.
pub fn open_store(cli: &Cli) -> Result<VaultStore> {
    let base = base_dir(cli)?;
    let settings = Settings::load(&base)?;

    let keystore = OsProtectedStore::new(&settings.keyring_service);
    let keys = KeyManager::new(&keystore, &settings.keyring_account)?;
    if !keys.persisted() {
        output::warning(
            "the encryption key could not be saved to the OS keyring — \
             this vault will be unreadable after a restart",
        );
    }

    let path = settings.vault_path(&base);
    if cli.recover {
        VaultStore::open_or_reset(&path, keys)
    } else {
        VaultStore::open(&path, keys)
    }
}

/// Resolve a user-supplied query to the id of exactly one record.
///
/// Accepts a full UUID, a UUID prefix of at least 4 chars, or an exact
/// (case-insensitive) title.  Ambiguity is an error rather than a
/// guess.
pub fn resolve_record(store: &VaultStore, query: &str) -> Result<Uuid> {
    if let Ok(id) = query.parse::<Uuid>() {
        return store
            .get(&id)
            .map(|r| r.id)
            .ok_or(VaultError::NotFound(id));
    }

    let lowered = query.to_lowercase();
    let by_prefix = lowered.len() >= 4;

    let matches: Vec<Uuid> = store
        .records()
        .iter()
        .filter(|r| {
            r.title.to_lowercase() == lowered
                || (by_prefix && r.id.to_string().starts_with(&lowered))
        })
        .map(|r| r.id)
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(VaultError::CommandFailed(format!(
            "no record matches '{query}'"
        ))),
        _ => Err(VaultError::CommandFailed(format!(
            "'{query}' matches {} records — use the full id",
            matches.len()
        ))),
    }
}

/// Prompt for a secret without echoing it.
pub fn prompt_secret(prompt: &str) -> Result<String> {
    dialoguer::Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| VaultError::CommandFailed(format!("prompt failed: {e}")))
}

/// Ask for confirmation before a destructive action.
pub fn confirm(prompt: &str) -> Result<bool> {
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| VaultError::CommandFailed(format!("prompt failed: {e}")))
}
