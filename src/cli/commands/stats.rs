//! `passvault stats` — vault health summary.
//!
//! The weak/duplicate counts decrypt every stored secret, so this
//! command does an O(n) pass over the vault.  Fine for a personal
//! collection; deliberately not exposed anywhere hot.

use crate::cli::{open_store, output, Cli};
use crate::errors::Result;

pub fn execute(cli: &Cli) -> Result<()> {
    let store = open_store(cli)?;

    let total = store.count();
    let weak = store.weak_count();
    let duplicates = store.duplicate_count();

    output::info(&format!("Records:    {total}"));
    output::info(&format!("Weak:       {weak}"));
    output::info(&format!("Duplicates: {duplicates}"));

    if weak > 0 {
        output::tip("Run `passvault generate` to create stronger replacements.");
    }

    Ok(())
}
