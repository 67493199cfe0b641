//! `passvault wipe` — delete every record in the vault.

use crate::cli::{confirm, open_store, output, Cli};
use crate::errors::{Result, VaultError};

pub fn execute(cli: &Cli, force: bool) -> Result<()> {
    let mut store = open_store(cli)?;
    let count = store.count();

    if count == 0 {
        output::info("Vault is already empty.");
        return Ok(());
    }

    if !force && !confirm(&format!("Permanently delete all {count} records?"))? {
        return Err(VaultError::UserCancelled);
    }

    store.delete_all()?;
    output::success(&format!("Deleted {count} records"));
    Ok(())
}
