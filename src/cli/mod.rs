//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::{Settings, VaultConfig};
use crate::crypto::AesGcmCrypto;
use crate::errors::{PassVaultError, Result};
use crate::generator::{generate_password, PasswordOptions};
use crate::service::{self, InitOutcome, VaultService};
use crate::vault::{Entry, FileVaultRepository};

/// The service wired to the on-disk key and vault.
pub type FileService = VaultService<FileVaultRepository<AesGcmCrypto>>;

/// Minimum number of characters of an ID shown in tables and accepted as a prefix.
pub const SHORT_ID_LEN: usize = 8;

/// PassVault CLI: local encrypted password vault.
#[derive(Parser)]
#[command(name = "passvault", about = "Local encrypted password vault", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding key.bin, vault.json.enc and config.toml (default: ~/.passvault)
    #[arg(long, env = "PASSVAULT_DIR", global = true)]
    pub dir: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Create the encryption key and an empty vault
    Init,

    /// List entries
    List {
        /// Only show entries whose title, username, or URL contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show an entry (records the view time)
    Show {
        /// Entry ID or unique ID prefix
        id: String,
        /// Print the password instead of masking it
        #[arg(long)]
        reveal: bool,
        /// Copy the password to the clipboard instead of printing it
        #[arg(short, long)]
        copy: bool,
    },

    /// Add a new entry
    Add {
        /// Entry title (e.g. GitHub)
        title: String,
        #[arg(short, long, default_value = "")]
        username: String,
        #[arg(long, default_value = "")]
        url: String,
        #[arg(long, default_value = "")]
        notes: String,
        /// Password value (omit for piped input or an interactive prompt)
        #[arg(short, long, conflicts_with = "generate")]
        password: Option<String>,
        /// Generate a random password
        #[arg(short, long)]
        generate: bool,
    },

    /// Edit an entry; omitted fields keep their current value
    Edit {
        /// Entry ID or unique ID prefix
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(short, long)]
        username: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        /// New password value
        #[arg(short, long, conflicts_with = "generate")]
        password: Option<String>,
        /// Replace the password with a generated one
        #[arg(short, long)]
        generate: bool,
    },

    /// Delete an entry
    Delete {
        /// Entry ID or unique ID prefix
        id: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Generate a random password without storing it
    Generate {
        /// Password length (default: from config.toml, else 16)
        #[arg(short, long)]
        length: Option<usize>,
        #[arg(long)]
        no_lowercase: bool,
        #[arg(long)]
        no_uppercase: bool,
        #[arg(long)]
        no_digits: bool,
        /// Include symbols
        #[arg(short, long)]
        symbols: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Resolve the base directory: `--dir`, then `PASSVAULT_DIR`, then `~/.passvault`.
pub fn vault_config(cli: &Cli) -> Result<VaultConfig> {
    match &cli.dir {
        Some(dir) => Ok(VaultConfig::new(dir)),
        None => VaultConfig::in_home_dir().ok_or_else(|| {
            PassVaultError::ConfigError(
                "cannot determine home directory — pass --dir or set PASSVAULT_DIR".into(),
            )
        }),
    }
}

/// Load `config.toml` from the base directory (defaults if absent).
pub fn load_settings(config: &VaultConfig) -> Result<Settings> {
    Settings::load(&config.settings_path())
}

/// Wire key manager, crypto, and repository, running first-run setup if needed.
pub fn open_service(config: &VaultConfig) -> Result<FileService> {
    let crypto = AesGcmCrypto::from_config(config.clone());
    let repo = FileVaultRepository::new(config.clone(), crypto);

    if service::initialize(repo.crypto(), &repo)? == InitOutcome::Created {
        output::info(&format!(
            "First run: created key and vault in {}",
            config.base_dir().display()
        ));
    }

    Ok(VaultService::new(repo))
}

/// Find the entry whose ID equals `input`, or the only one starting with it.
///
/// Prefixes shorter than `SHORT_ID_LEN` are not accepted.
pub fn find_entry<'a>(entries: &'a [Entry], input: &str) -> Result<&'a Entry> {
    if let Some(exact) = entries.iter().find(|e| e.id == input) {
        return Ok(exact);
    }
    if input.len() < SHORT_ID_LEN {
        return Err(PassVaultError::EntryNotFound(input.to_string()));
    }

    let mut matches = entries.iter().filter(|e| e.id.starts_with(input));
    match (matches.next(), matches.next()) {
        (Some(entry), None) => Ok(entry),
        (None, _) => Err(PassVaultError::EntryNotFound(input.to_string())),
        (Some(_), Some(_)) => Err(PassVaultError::CommandFailed(format!(
            "ID prefix '{input}' is ambiguous — use more characters"
        ))),
    }
}

/// Resolve a user-supplied ID or prefix to a full entry ID.
///
/// Goes through `list_entries`, so it does not record a view.
pub fn resolve_id(service: &FileService, input: &str) -> Result<String> {
    let entries = service.list_entries()?;
    find_entry(&entries, input).map(|e| e.id.clone())
}

/// Pick the password for `add`/`edit` from the flags.
///
/// Returns `None` when neither `--password` nor `--generate` was given.
pub fn password_from_flags(
    password: Option<&str>,
    generate: bool,
    settings: &Settings,
) -> Result<Option<Zeroizing<String>>> {
    if generate {
        let generated = generate_password(&settings.password_options())?;
        return Ok(Some(Zeroizing::new(generated)));
    }
    if let Some(p) = password {
        output::warning("Password provided on command line — it may appear in shell history.");
        return Ok(Some(Zeroizing::new(p.to_string())));
    }
    Ok(None)
}

/// Read a password from piped stdin, or prompt with confirmation on a terminal.
pub fn read_password(prompt: &str) -> Result<Zeroizing<String>> {
    if !io::stdin().is_terminal() {
        let mut buf = Zeroizing::new(String::new());
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(PassVaultError::io("read password from stdin"))?;
        let trimmed = buf.trim_end_matches(['\r', '\n']).to_string();
        return Ok(Zeroizing::new(trimmed));
    }

    let password = dialoguer::Password::new()
        .with_prompt(prompt)
        .with_confirmation("Confirm password", "Passwords do not match, try again")
        .allow_empty_password(true)
        .interact()
        .map_err(|e| PassVaultError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(password))
}

/// Generator options for the `generate` command, layered over the settings.
pub fn generate_options(
    settings: &Settings,
    length: Option<usize>,
    no_lowercase: bool,
    no_uppercase: bool,
    no_digits: bool,
    symbols: bool,
) -> PasswordOptions {
    let base = settings.password_options();
    PasswordOptions {
        length: length.unwrap_or(base.length),
        lowercase: !no_lowercase,
        uppercase: !no_uppercase,
        digits: !no_digits,
        symbols: symbols || base.symbols,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vault::EntryFields;

    fn entry_with_id(id: &str) -> Entry {
        Entry::with_id(
            id,
            &EntryFields {
                title: format!("title-{id}"),
                username: String::new(),
                password: String::new(),
                url: String::new(),
                notes: String::new(),
            },
        )
    }

    #[test]
    fn find_entry_exact_match_wins() {
        let entries = vec![entry_with_id("abcd1234"), entry_with_id("abcd12345678")];
        assert_eq!(find_entry(&entries, "abcd1234").unwrap().id, "abcd1234");
    }

    #[test]
    fn find_entry_unique_prefix() {
        let entries = vec![
            entry_with_id("11111111-aaaa"),
            entry_with_id("22222222-bbbb"),
        ];
        assert_eq!(
            find_entry(&entries, "22222222").unwrap().id,
            "22222222-bbbb"
        );
    }

    #[test]
    fn find_entry_rejects_short_or_ambiguous_prefix() {
        let entries = vec![
            entry_with_id("12345678-aaaa"),
            entry_with_id("12345678-bbbb"),
        ];
        assert!(matches!(
            find_entry(&entries, "1234"),
            Err(PassVaultError::EntryNotFound(_))
        ));
        assert!(matches!(
            find_entry(&entries, "12345678"),
            Err(PassVaultError::CommandFailed(_))
        ));
        assert!(matches!(
            find_entry(&entries, "99999999"),
            Err(PassVaultError::EntryNotFound(_))
        ));
    }

    #[test]
    fn dir_flag_overrides_home() {
        let cli = Cli::try_parse_from(["passvault", "--dir", "/tmp/pv", "list"]).unwrap();
        let config = vault_config(&cli).unwrap();
        assert_eq!(config.base_dir(), std::path::Path::new("/tmp/pv"));
    }

    #[test]
    fn password_and_generate_conflict() {
        let result = Cli::try_parse_from(["passvault", "add", "GitHub", "-p", "x", "--generate"]);
        assert!(result.is_err());
    }

    #[test]
    fn edit_defaults_leave_fields_unset() {
        let cli = Cli::try_parse_from(["passvault", "edit", "abc", "--title", "New"]).unwrap();
        match cli.command {
            Commands::Edit {
                title,
                username,
                password,
                generate,
                ..
            } => {
                assert_eq!(title.as_deref(), Some("New"));
                assert!(username.is_none());
                assert!(password.is_none());
                assert!(!generate);
            }
            _ => panic!("expected edit"),
        }
    }

    #[test]
    fn generate_flag_produces_configured_length() {
        let settings = Settings {
            password_length: 20,
            ..Settings::default()
        };
        let pw = password_from_flags(None, true, &settings).unwrap().unwrap();
        assert_eq!(pw.len(), 20);
        assert!(password_from_flags(None, false, &settings)
            .unwrap()
            .is_none());
    }

    #[test]
    fn generate_options_layer_flags_over_settings() {
        let settings = Settings {
            password_length: 24,
            password_symbols: true,
            ..Settings::default()
        };
        let opts = generate_options(&settings, None, false, true, false, false);
        assert_eq!(opts.length, 24);
        assert!(opts.lowercase);
        assert!(!opts.uppercase);
        assert!(opts.digits);
        assert!(opts.symbols);

        let opts = generate_options(&settings, Some(10), false, false, false, false);
        assert_eq!(opts.length, 10);
    }
}
