//! `passvault edit` — update fields of an existing record.

use zeroize::Zeroizing;

use crate::cli::{open_store, output, prompt_secret, resolve_record, Cli};
use crate::errors::{Result, VaultError};
use crate::vault::Category;

#[allow(clippy::too_many_arguments)]
pub fn execute(
    cli: &Cli,
    query: &str,
    title: Option<&str>,
    username: Option<&str>,
    website: Option<&str>,
    notes: Option<&str>,
    category: Option<&str>,
    favorite: Option<bool>,
    secret: bool,
) -> Result<()> {
    // Parse before mutating anything.
    let category: Option<Category> = category.map(str::parse).transpose()?;

    let mut store = open_store(cli)?;
    let id = resolve_record(&store, query)?;

    let mut record = store.get(&id).ok_or(VaultError::NotFound(id))?.clone();
    if let Some(v) = title {
        record.title = v.to_string();
    }
    if let Some(v) = username {
        record.username = v.to_string();
    }
    if let Some(v) = website {
        record.website = v.to_string();
    }
    if let Some(v) = notes {
        record.notes = v.to_string();
    }
    if let Some(v) = category {
        record.category = v;
    }
    if let Some(v) = favorite {
        record.is_favorite = v;
    }

    store.update(record)?;

    if secret {
        let new_secret = Zeroizing::new(prompt_secret("New secret")?);
        store.set_secret(&id, &new_secret)?;
    }

    output::success(&format!("Updated {}", &id.to_string()[..8]));
    Ok(())
}
