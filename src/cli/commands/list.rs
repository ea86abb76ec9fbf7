//! `passvault list` — display entries in a table, optionally filtered.

use crate::cli::output;
use crate::cli::{load_settings, open_service, vault_config, Cli};
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(cli: &Cli, search: Option<&str>) -> Result<()> {
    let config = vault_config(cli)?;
    let settings = load_settings(&config)?;
    let service = open_service(&config)?;

    let mut entries = service.list_entries()?;
    if let Some(query) = search {
        entries.retain(|e| e.matches(query));
    }
    settings.sort_order.sort(&mut entries);

    match search {
        Some(query) => output::info(&format!("{} entr(ies) matching '{query}'", entries.len())),
        None => output::info(&format!("{} entr(ies)", entries.len())),
    }
    output::print_entries_table(&entries);

    Ok(())
}
