//! `passvault delete` — remove an entry.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{find_entry, open_service, vault_config, Cli};
use crate::errors::{PassVaultError, Result};

/// Execute the `delete` command.
pub fn execute(cli: &Cli, id: &str, force: bool) -> Result<()> {
    let config = vault_config(cli)?;
    let service = open_service(&config)?;

    let entries = service.list_entries()?;
    let entry = find_entry(&entries, id)?;

    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete '{}' ({})?",
                entry.title,
                output::short_id(&entry.id)
            ))
            .default(false)
            .interact()
            .map_err(|e| PassVaultError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    service.delete_entry(&entry.id)?;
    output::success(&format!("Deleted '{}'", entry.title));
    Ok(())
}
