//! `passvault edit` — change some fields of an entry.

use crate::cli::output;
use crate::cli::{find_entry, load_settings, open_service, password_from_flags, vault_config, Cli};
use crate::errors::Result;
use crate::vault::EntryFields;

/// Replacement values; `None` leaves the field as it is.
#[derive(Default)]
pub struct EditArgs<'a> {
    pub title: Option<&'a str>,
    pub username: Option<&'a str>,
    pub url: Option<&'a str>,
    pub notes: Option<&'a str>,
    pub password: Option<&'a str>,
    pub generate: bool,
}

impl EditArgs<'_> {
    fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.username.is_none()
            && self.url.is_none()
            && self.notes.is_none()
            && self.password.is_none()
            && !self.generate
    }

    /// Overlay the given values on `fields`.
    fn apply(&self, fields: &mut EntryFields) {
        if let Some(title) = self.title {
            fields.title = title.to_string();
        }
        if let Some(username) = self.username {
            fields.username = username.to_string();
        }
        if let Some(url) = self.url {
            fields.url = url.to_string();
        }
        if let Some(notes) = self.notes {
            fields.notes = notes.to_string();
        }
    }
}

/// Execute the `edit` command.
pub fn execute(cli: &Cli, id: &str, args: EditArgs<'_>) -> Result<()> {
    if args.is_empty() {
        output::info("Nothing to change.");
        output::tip("Pass --title, --username, --url, --notes, --password, or --generate.");
        return Ok(());
    }

    let config = vault_config(cli)?;
    let settings = load_settings(&config)?;
    let service = open_service(&config)?;

    let entries = service.list_entries()?;
    let entry = find_entry(&entries, id)?;

    let mut fields = entry.fields();
    args.apply(&mut fields);
    if let Some(password) = password_from_flags(args.password, args.generate, &settings)? {
        fields.password = password.to_string();
    }

    service.update_entry(&entry.id, &fields)?;
    output::success(&format!("Updated '{}'", fields.title));
    Ok(())
}
