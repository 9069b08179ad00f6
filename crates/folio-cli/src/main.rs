//! Folio CLI
//!
//! Command-line interface for Folio - a local bookshelf for drafting and
//! organizing manuscripts.

use std::fs::File;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use folio_core::{BookStore, Config};

mod commands;
mod editor;
mod output;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Folio - local bookshelf for drafting and organizing manuscripts")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Use a specific config file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage books
    Book {
        #[command(subcommand)]
        command: BookCommands,
    },
    /// List all tags in use
    Tags,
    /// List the library presets
    Libraries,
    /// Show shelf status
    Status,
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum BookCommands {
    /// Create a new book
    #[command(alias = "add")]
    Create {
        /// Working title
        title: Option<String>,
        /// Author name (falls back to default_author from config)
        #[arg(short, long)]
        author: Option<String>,
        /// Shelf category
        #[arg(short, long)]
        category: Option<String>,
        /// Initial status (draft, in-progress, finalized, archived)
        #[arg(short, long)]
        status: Option<String>,
        /// Tags to attach
        #[arg(short, long)]
        tag: Vec<String>,
        /// Short description
        #[arg(long)]
        summary: Option<String>,
    },
    /// List books, optionally filtered
    #[command(alias = "ls")]
    List {
        /// Case-insensitive keyword over title, summary, author, and tags
        #[arg(short, long)]
        keyword: Option<String>,
        /// Filter by status, or "all"
        #[arg(short, long)]
        status: Option<String>,
        /// Filter by tag, or "all"
        #[arg(short, long)]
        tag: Option<String>,
        /// Filter by library preset (all, favorites, draft, archive)
        #[arg(short, long)]
        library: Option<String>,
    },
    /// Show book details
    Show {
        /// Book ID (full or unique prefix)
        id: String,
    },
    /// Edit a book's fields, or its content in $EDITOR when no flags given
    Edit {
        /// Book ID (full or unique prefix)
        id: String,
        /// New title
        #[arg(short = 'T', long)]
        title: Option<String>,
        /// New author
        #[arg(short, long)]
        author: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New status (draft, in-progress, finalized, archived)
        #[arg(short, long)]
        status: Option<String>,
        /// New summary
        #[arg(long)]
        summary: Option<String>,
        /// Replace the tag list
        #[arg(short, long)]
        tag: Vec<String>,
    },
    /// Delete a book
    #[command(alias = "rm")]
    Delete {
        /// Book ID (full or unique prefix)
        id: String,
    },
    /// Duplicate a book as a new draft
    Duplicate {
        /// Book ID (full or unique prefix)
        id: String,
    },
    /// Toggle a book's favorite flag
    #[command(alias = "fav")]
    Favorite {
        /// Book ID (full or unique prefix)
        id: String,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir, default_author, log_file)
        key: String,
        /// Configuration value
        value: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    // Config commands work without opening the store
    if let Commands::Config { command } = &cli.command {
        return handle_config_command(command.clone(), cli.config.as_ref(), &output);
    }

    let config = Config::load_with_cli_override(cli.config.as_ref())?;
    init_logging(&config);

    let mut store = BookStore::with_config(config);

    match cli.command {
        Commands::Book { command } => handle_book_command(command, &mut store, &output),
        Commands::Tags => commands::tag::list(&store, &output),
        Commands::Libraries => commands::library::list(&store, &output),
        Commands::Status => commands::status::show(&store, &output),
        Commands::Config { .. } => unreachable!(), // Handled above
    }
}

fn handle_book_command(
    command: BookCommands,
    store: &mut BookStore,
    output: &Output,
) -> Result<()> {
    match command {
        BookCommands::Create {
            title,
            author,
            category,
            status,
            tag,
            summary,
        } => commands::book::create(store, title, author, category, status, tag, summary, output),
        BookCommands::List {
            keyword,
            status,
            tag,
            library,
        } => commands::book::list(store, keyword, status, tag, library, output),
        BookCommands::Show { id } => commands::book::show(store, id, output),
        BookCommands::Edit {
            id,
            title,
            author,
            category,
            status,
            summary,
            tag,
        } => commands::book::edit(store, id, title, author, category, status, summary, tag, output),
        BookCommands::Delete { id } => commands::book::delete(store, id, output),
        BookCommands::Duplicate { id } => commands::book::duplicate(store, id, output),
        BookCommands::Favorite { id } => commands::book::favorite(store, id, output),
    }
}

fn handle_config_command(
    command: Option<ConfigCommands>,
    config_path: Option<&PathBuf>,
    output: &Output,
) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(config_path, output),
        Some(ConfigCommands::Set { key, value }) => {
            commands::config::set(key, value, config_path, output)
        }
    }
}

/// Route tracing output to the configured log file, or stderr
fn init_logging(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("folio_core=warn,folio_cli=warn"));

    match &config.log_file {
        Some(path) => {
            let log_file = match File::create(path) {
                Ok(f) => f,
                Err(e) => {
                    eprintln!("Warning: could not create log file {:?}: {}", path, e);
                    return;
                }
            };
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(log_file)
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }

    debug!("logging initialized");
}
