//! `passvault delete` — remove a single record.

use crate::cli::{confirm, open_store, output, resolve_record, Cli};
use crate::errors::{Result, VaultError};

pub fn execute(cli: &Cli, query: &str, force: bool) -> Result<()> {
    let mut store = open_store(cli)?;
    let id = resolve_record(&store, query)?;

    let title = store
        .get(&id)
        .map(|r| r.title.clone())
        .ok_or(VaultError::NotFound(id))?;

    if !force && !confirm(&format!("Delete '{title}'?"))? {
        return Err(VaultError::UserCancelled);
    }

    store.delete(&id)?;
    output::success(&format!("Deleted '{title}'"));
    Ok(())
}
