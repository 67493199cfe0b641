//! `passvault list` — table of records, with category/favorite filters.

use crate::cli::{open_store, output, Cli};
use crate::errors::Result;
use crate::vault::Category;

pub fn execute(cli: &Cli, category: Option<&str>, favorites: bool) -> Result<()> {
    let store = open_store(cli)?;

    let records = if let Some(tag) = category {
        let category: Category = tag.parse()?;
        store.by_category(category)
    } else if favorites {
        store.favorites()
    } else {
        store.search("")
    };

    output::print_records_table(&records);
    Ok(())
}
