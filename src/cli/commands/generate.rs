//! `passvault generate` — print a random password without touching the vault.

use crate::cli::{generate_options, load_settings, vault_config, Cli};
use crate::errors::Result;
use crate::generator::generate_password;

/// Character classes to leave out or add, as given on the command line.
pub struct GenerateArgs {
    pub length: Option<usize>,
    pub no_lowercase: bool,
    pub no_uppercase: bool,
    pub no_digits: bool,
    pub symbols: bool,
}

/// Execute the `generate` command.
pub fn execute(cli: &Cli, args: &GenerateArgs) -> Result<()> {
    let config = vault_config(cli)?;
    let settings = load_settings(&config)?;

    let options = generate_options(
        &settings,
        args.length,
        args.no_lowercase,
        args.no_uppercase,
        args.no_digits,
        args.symbols,
    );
    let password = zeroize::Zeroizing::new(generate_password(&options)?);
    println!("{}", password.as_str());

    Ok(())
}
