use clap::Parser;
use passvault::cli::commands::{self, add::AddArgs, edit::EditArgs, generate::GenerateArgs};
use passvault::cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log filter variable; falls back to `warn` (or `debug` with `--verbose`).
const LOG_ENV: &str = "PASSVAULT_LOG";

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Init => commands::init::execute(&cli),
        Commands::List { ref search } => commands::list::execute(&cli, search.as_deref()),
        Commands::Show {
            ref id,
            reveal,
            copy,
        } => commands::show::execute(&cli, id, reveal, copy),
        Commands::Add {
            ref title,
            ref username,
            ref url,
            ref notes,
            ref password,
            generate,
        } => commands::add::execute(
            &cli,
            AddArgs {
                title,
                username,
                url,
                notes,
                password: password.as_deref(),
                generate,
            },
        ),
        Commands::Edit {
            ref id,
            ref title,
            ref username,
            ref url,
            ref notes,
            ref password,
            generate,
        } => commands::edit::execute(
            &cli,
            id,
            EditArgs {
                title: title.as_deref(),
                username: username.as_deref(),
                url: url.as_deref(),
                notes: notes.as_deref(),
                password: password.as_deref(),
                generate,
            },
        ),
        Commands::Delete { ref id, force } => commands::delete::execute(&cli, id, force),
        Commands::Generate {
            length,
            no_lowercase,
            no_uppercase,
            no_digits,
            symbols,
        } => commands::generate::execute(
            &cli,
            &GenerateArgs {
                length,
                no_lowercase,
                no_uppercase,
                no_digits,
                symbols,
            },
        ),
        Commands::Completions { ref shell } => commands::completions::execute(shell),
    };

    if let Err(e) = result {
        passvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
