//! `passvault search` — substring search across record text fields.

use crate::cli::{open_store, output, Cli};
use crate::errors::Result;

pub fn execute(cli: &Cli, query: &str) -> Result<()> {
    let store = open_store(cli)?;
    let matches = store.search(query);
    output::print_records_table(&matches);
    Ok(())
}
