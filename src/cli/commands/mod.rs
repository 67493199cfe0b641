//! One module per subcommand, each with an `execute` function.

pub mod add;
pub mod completions;
pub mod delete;
pub mod edit;
pub mod generate;
pub mod list;
pub mod passphrase;
pub mod search;
pub mod show;
pub mod stats;
pub mod wipe;
