//! `passvault show` — display one record, optionally revealing or
//! copying its secret.

use zeroize::Zeroizing;

use crate::cli::{open_store, output, resolve_record, Cli};
use crate::errors::{Result, VaultError};

pub fn execute(cli: &Cli, query: &str, reveal: bool, copy: bool) -> Result<()> {
    let mut store = open_store(cli)?;
    let id = resolve_record(&store, query)?;

    let record = store.get(&id).ok_or(VaultError::NotFound(id))?;
    output::print_record_detail(record);

    if !reveal && !copy {
        return Ok(());
    }

    let secret = Zeroizing::new(store.reveal_secret(&id)?);

    if reveal {
        println!("{}", *secret);
    }

    if copy {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| VaultError::ClipboardError(e.to_string()))?;
        clipboard
            .set_text(secret.to_string())
            .map_err(|e| VaultError::ClipboardError(e.to_string()))?;
        output::success("Secret copied to clipboard");
    }

    // The secret left the vault, so stamp last_used_at.
    store.touch(&id)?;

    Ok(())
}
