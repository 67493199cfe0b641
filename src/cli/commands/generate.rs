//! `passvault generate` — print a random password to stdout.

use crate::cli::{output, settings, Cli};
use crate::errors::{Result, VaultError};
use crate::generator::{generate, strength, GeneratorOptions};

#[allow(clippy::too_many_arguments)]
pub fn execute(
    cli: &Cli,
    length: Option<usize>,
    no_upper: bool,
    no_lower: bool,
    no_digits: bool,
    no_symbols: bool,
    allow_ambiguous: bool,
) -> Result<()> {
    let options = GeneratorOptions {
        length: length.unwrap_or(settings(cli)?.generator_length),
        uppercase: !no_upper,
        lowercase: !no_lower,
        digits: !no_digits,
        symbols: !no_symbols,
        exclude_ambiguous: !allow_ambiguous,
    };

    // The generator returns an empty string with no class enabled;
    // refuse the flag combination instead of printing nothing.
    if !options.uppercase && !options.lowercase && !options.digits && !options.symbols {
        return Err(VaultError::CommandFailed(
            "at least one character class must stay enabled".into(),
        ));
    }

    let password = generate(&options);
    println!("{password}");
    output::tip(&format!("strength: {}", strength(&password)));

    Ok(())
}
