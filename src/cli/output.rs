//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.  Secrets are only ever
//! printed by an explicit `--reveal`.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::vault::PasswordRecord;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Short id prefix shown in tables so users can reference records
/// without pasting a full UUID.
pub fn short_id(record: &PasswordRecord) -> String {
    record.id.to_string()[..8].to_string()
}

/// Print a table of records (metadata only, no ciphertext).
pub fn print_records_table(records: &[&PasswordRecord]) {
    if records.is_empty() {
        info("No records to show.");
        tip("Run `passvault add --title <TITLE>` to add one.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Title", "Username", "Website", "Category", "Fav", "Updated"]);

    for r in records {
        table.add_row(vec![
            short_id(r),
            r.title.clone(),
            r.username.clone(),
            r.website.clone(),
            r.category.to_string(),
            if r.is_favorite { "\u{2605}".into() } else { String::new() },
            r.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        ]);
    }

    println!("{table}");
}

/// Print the full metadata of a single record.
pub fn print_record_detail(record: &PasswordRecord) {
    println!("{}:     {}", style("Id").bold(), record.id);
    println!("{}:  {}", style("Title").bold(), record.title);
    println!("{}: {}", style("User").bold(), record.username);
    println!("{}: {}", style("Site").bold(), record.website);
    println!("{}: {}", style("Tag").bold(), record.category);
    if !record.notes.is_empty() {
        println!("{}: {}", style("Notes").bold(), record.notes);
    }
    println!(
        "{}: {}",
        style("Added").bold(),
        record.created_at.format("%Y-%m-%d %H:%M:%S")
    );
    if let Some(used) = record.last_used_at {
        println!(
            "{}: {}",
            style("Used").bold(),
            used.format("%Y-%m-%d %H:%M:%S")
        );
    }
    if record.is_favorite {
        println!("{}", style("\u{2605} favorite").yellow());
    }
}
