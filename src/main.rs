use clap::Parser;
use passvault::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Add {
            ref title,
            ref username,
            ref website,
            ref notes,
            ref category,
            favorite,
            generate,
            length,
            ref value,
        } => passvault::cli::commands::add::execute(
            &cli,
            title,
            username,
            website,
            notes,
            category,
            favorite,
            generate,
            length,
            value.as_deref(),
        ),
        Commands::Show {
            ref query,
            reveal,
            copy,
        } => passvault::cli::commands::show::execute(&cli, query, reveal, copy),
        Commands::List {
            ref category,
            favorites,
        } => passvault::cli::commands::list::execute(&cli, category.as_deref(), favorites),
        Commands::Search { ref query } => passvault::cli::commands::search::execute(&cli, query),
        Commands::Edit {
            ref query,
            ref title,
            ref username,
            ref website,
            ref notes,
            ref category,
            favorite,
            secret,
        } => passvault::cli::commands::edit::execute(
            &cli,
            query,
            title.as_deref(),
            username.as_deref(),
            website.as_deref(),
            notes.as_deref(),
            category.as_deref(),
            favorite,
            secret,
        ),
        Commands::Delete { ref query, force } => {
            passvault::cli::commands::delete::execute(&cli, query, force)
        }
        Commands::Wipe { force } => passvault::cli::commands::wipe::execute(&cli, force),
        Commands::Stats => passvault::cli::commands::stats::execute(&cli),
        Commands::Generate {
            length,
            no_upper,
            no_lower,
            no_digits,
            no_symbols,
            allow_ambiguous,
        } => passvault::cli::commands::generate::execute(
            &cli,
            length,
            no_upper,
            no_lower,
            no_digits,
            no_symbols,
            allow_ambiguous,
        ),
        Commands::Passphrase {
            words,
            ref separator,
        } => passvault::cli::commands::passphrase::execute(words, separator),
        Commands::Completions { ref shell } => {
            passvault::cli::commands::completions::execute(shell)
        }
    };

    if let Err(e) = result {
        passvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
