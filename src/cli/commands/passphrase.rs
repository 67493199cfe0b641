//! `passvault passphrase` — print a word-based passphrase to stdout.

use crate::errors::{Result, VaultError};
use crate::generator::generate_passphrase;

pub fn execute(words: usize, separator: &str) -> Result<()> {
    if words == 0 {
        return Err(VaultError::CommandFailed(
            "a passphrase needs at least one word".into(),
        ));
    }

    println!("{}", generate_passphrase(words, separator));
    Ok(())
}
