//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use chrono::{DateTime, Utc};
use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::cli::SHORT_ID_LEN;
use crate::vault::Entry;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

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

/// The leading characters of an ID, enough to address it from the CLI.
pub fn short_id(id: &str) -> &str {
    id.get(..SHORT_ID_LEN).unwrap_or(id)
}

/// One `*` per character, so the length is visible but not the value.
pub fn mask(secret: &str) -> String {
    "*".repeat(secret.chars().count())
}

fn format_time(time: &DateTime<Utc>) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Print a table of entries (ID, Title, Username, URL, Updated). Never shows passwords.
pub fn print_entries_table(entries: &[Entry]) {
    if entries.is_empty() {
        info("No entries in this vault yet.");
        tip("Run `passvault add <TITLE>` to add your first entry.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Title", "Username", "URL", "Updated"]);

    for e in entries {
        table.add_row(vec![
            short_id(&e.id).to_string(),
            e.title.clone(),
            e.username.clone(),
            e.url.clone(),
            format_time(&e.updated_at),
        ]);
    }

    println!("{table}");
}

/// Print every field of one entry, masking the password unless `reveal`.
pub fn print_entry(entry: &Entry, reveal: bool) {
    let password = if reveal {
        entry.password.clone()
    } else {
        mask(&entry.password)
    };

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.add_row(vec!["ID".to_string(), entry.id.clone()]);
    table.add_row(vec!["Title".to_string(), entry.title.clone()]);
    table.add_row(vec!["Username".to_string(), entry.username.clone()]);
    table.add_row(vec!["Password".to_string(), password]);
    if !entry.url.is_empty() {
        table.add_row(vec!["URL".to_string(), entry.url.clone()]);
    }
    if !entry.notes.is_empty() {
        table.add_row(vec!["Notes".to_string(), entry.notes.clone()]);
    }
    table.add_row(vec!["Created".to_string(), format_time(&entry.created_at)]);
    table.add_row(vec!["Updated".to_string(), format_time(&entry.updated_at)]);
    if let Some(viewed) = &entry.last_viewed_at {
        table.add_row(vec!["Viewed".to_string(), format_time(viewed)]);
    }

    println!("{table}");
}
