//! Scriptura CLI Entry Point
//!
//! Thin front end over the lookup service with two subcommands:
//! - `verses` - fetch the verses for a reference
//! - `translations` - list available translations
//!
//! Results go to stdout; logs go to stderr. Errors propagate and exit
//! non-zero.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use scriptura::config::default_config_path;
use scriptura::{ClientConfig, MySqlStore, VerseService};

/// Scriptura - Bible verse lookup for MariaDB scripture databases
#[derive(Parser)]
#[command(name = "scriptura")]
#[command(about = "Bible verse lookup client for MariaDB-backed scripture databases")]
#[command(version)]
struct Cli {
    /// Path to a JSON config file (defaults to ~/.config/scriptura/config.json,
    /// falling back to DB_* environment variables)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the verses for a reference, e.g. "John 3:16-18"
    Verses {
        /// Scripture reference: "<book> <chapter>:<verse>[-<end>]"
        reference: String,

        /// Translation abbreviation
        #[arg(long, default_value = "WEB")]
        translation: String,

        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// List the translations available in the database
    Translations {
        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    tracing_subscriber::fmt()
        .with_max_level(config.log_level()?)
        .with_writer(std::io::stderr)
        .init();

    let store = MySqlStore::connect(&config.resolve()?).await?;
    let mut service = VerseService::new(store);

    let outcome = run_command(&mut service, cli.command).await;

    // Release the connection on every exit path before surfacing the result.
    service.into_store().disconnect().await?;

    outcome
}

/// Resolve configuration: explicit file, then default file, then environment
fn load_config(path: Option<&Path>) -> anyhow::Result<ClientConfig> {
    if let Some(path) = path {
        return ClientConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()));
    }

    let default_path = default_config_path()?;
    if default_path.exists() {
        Ok(ClientConfig::load(&default_path)?)
    } else {
        Ok(ClientConfig::from_env()?)
    }
}

async fn run_command(
    service: &mut VerseService<MySqlStore>,
    command: Commands,
) -> anyhow::Result<()> {
    match command {
        Commands::Verses { reference, translation, json } => {
            let verses = service.get_verses(&reference, &translation).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&verses)?);
            } else {
                for verse in &verses {
                    println!("{}:{} - {}", verse.chapter, verse.verse, verse.text);
                }
            }
        }
        Commands::Translations { json } => {
            let translations = service.available_translations().await;
            if json {
                println!("{}", serde_json::to_string_pretty(&translations)?);
            } else {
                for translation in &translations {
                    println!("{} - {}", translation.table, translation.version);
                }
            }
        }
    }

    Ok(())
}
