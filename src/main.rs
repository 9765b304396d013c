use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use contacts::cli::run_repl;
use contacts::commands::Dispatcher;
use contacts::config::{ContactPaths, Settings};
use contacts::storage::Storage;

#[derive(Parser)]
#[command(
    name = "contacts",
    version,
    about = "Command-driven personal contact manager",
    long_about = "contacts keeps names, phone numbers and birthdays, and tells you \
                  whose birthday is coming up in the next week. Run it without a \
                  subcommand to start the interactive assistant."
)]
struct Cli {
    /// Directory holding settings, contacts and the audit log
    #[arg(long, env = "CONTACT_BOOK_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive assistant (default)
    #[command(alias = "repl")]
    Shell,

    /// Create the data directory and write default settings
    Init,

    /// Show current configuration and paths
    Config,

    /// Show recent contact changes from the audit log
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so command replies on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let paths = match cli.data_dir {
        Some(dir) => ContactPaths::with_base_dir(dir),
        None => ContactPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let storage = Storage::new(paths, &settings)?;
            let mut book = storage
                .load_book()
                .context("Failed to load the address book")?;
            tracing::info!(
                contacts = book.len(),
                path = %storage.paths().contacts_file().display(),
                "address book loaded"
            );

            let dispatcher = Dispatcher::new(&storage, &settings);
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            run_repl(stdin.lock(), &mut stdout, &mut book, &dispatcher)?;
        }
        Commands::Init => {
            paths.ensure_directories()?;
            if paths.settings_file().exists() {
                println!("Settings already exist at {}", paths.settings_file().display());
            } else {
                settings.save(&paths)?;
                println!("Wrote default settings to {}", paths.settings_file().display());
            }
            println!("Contacts will be stored in {}", paths.contacts_file().display());
        }
        Commands::Audit { limit } => {
            let storage = Storage::new(paths, &settings)?;
            let Some(logger) = storage.audit() else {
                println!("Audit logging is disabled.");
                return Ok(());
            };

            let entries = logger
                .read_recent(limit)
                .context("Failed to read the audit log")?;
            if entries.is_empty() {
                println!("No audit entries.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
        Commands::Config => {
            println!("contact-book Configuration");
            println!("==========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Contacts file:  {}", paths.contacts_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Birthday window: {} days", settings.birthday_window_days);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
    }

    Ok(())
}
