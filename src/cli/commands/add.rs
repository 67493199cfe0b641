//! `passvault add` — create a record and store its encrypted secret.

use zeroize::Zeroizing;

use crate::cli::{open_store, output, prompt_secret, settings, Cli};
use crate::errors::Result;
use crate::generator::{generate, strength, GeneratorOptions};
use crate::vault::{Category, PasswordRecord};

#[allow(clippy::too_many_arguments)]
pub fn execute(
    cli: &Cli,
    title: &str,
    username: &str,
    website: &str,
    notes: &str,
    category: &str,
    favorite: bool,
    generate_secret: bool,
    length: Option<usize>,
    value: Option<&str>,
) -> Result<()> {
    let category: Category = category.parse()?;

    // Resolve the secret before touching the vault.
    let secret = Zeroizing::new(if generate_secret {
        let options = GeneratorOptions {
            length: length.unwrap_or(settings(cli)?.generator_length),
            ..GeneratorOptions::default()
        };
        generate(&options)
    } else if let Some(v) = value {
        v.to_string()
    } else {
        prompt_secret("Secret")?
    });

    let mut store = open_store(cli)?;

    let mut record = PasswordRecord::new(title, username, website, category);
    record.notes = notes.to_string();
    record.is_favorite = favorite;
    let id = record.id;

    store.add(record)?;
    store.set_secret(&id, &secret)?;

    output::success(&format!("Added '{title}' ({})", &id.to_string()[..8]));
    if strength(&secret) == crate::generator::Strength::Weak {
        output::warning("the stored secret classifies as weak");
    }

    Ok(())
}
