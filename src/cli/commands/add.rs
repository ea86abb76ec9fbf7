//! `passvault add` — store a new entry.

use crate::cli::output;
use crate::cli::{
    load_settings, open_service, password_from_flags, read_password, vault_config, Cli,
};
use crate::errors::Result;
use crate::vault::EntryFields;

/// Field values for a new entry, as given on the command line.
pub struct AddArgs<'a> {
    pub title: &'a str,
    pub username: &'a str,
    pub url: &'a str,
    pub notes: &'a str,
    pub password: Option<&'a str>,
    pub generate: bool,
}

/// Execute the `add` command.
pub fn execute(cli: &Cli, args: AddArgs<'_>) -> Result<()> {
    let config = vault_config(cli)?;
    let settings = load_settings(&config)?;
    let service = open_service(&config)?;

    let password = match password_from_flags(args.password, args.generate, &settings)? {
        Some(p) => p,
        None => read_password(&format!("Password for {}", args.title))?,
    };

    let fields = EntryFields {
        title: args.title.to_string(),
        username: args.username.to_string(),
        password: password.to_string(),
        url: args.url.to_string(),
        notes: args.notes.to_string(),
    };
    let id = service.create_entry(&fields)?;

    output::success(&format!("Added '{}' ({})", args.title, output::short_id(&id)));
    if args.generate {
        output::tip(&format!(
            "Run `passvault show {} --reveal` to see it.",
            output::short_id(&id)
        ));
    }
    Ok(())
}
