//! `passvault show` — print one entry and record that it was viewed.

use crate::cli::output;
use crate::cli::{load_settings, open_service, resolve_id, vault_config, Cli};
use crate::errors::{PassVaultError, Result};

/// Execute the `show` command.
pub fn execute(cli: &Cli, id: &str, reveal: bool, copy: bool) -> Result<()> {
    let config = vault_config(cli)?;
    let settings = load_settings(&config)?;
    let service = open_service(&config)?;

    let id = resolve_id(&service, id)?;
    let entry = service.get_entry(&id)?;

    if copy {
        copy_to_clipboard(&entry.password)?;
        output::success(&format!(
            "Copied password for '{}' to clipboard",
            entry.title
        ));
    }

    // A copied password is never echoed to the terminal.
    output::print_entry(&entry, !copy && (reveal || !settings.mask_passwords));
    Ok(())
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| PassVaultError::ClipboardError(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| PassVaultError::ClipboardError(e.to_string()))
}
