//! CLI command definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::store::{DEFAULT_FALLBACK_PATH, DEFAULT_STORE_ID, DEFAULT_STORE_URL};

/// CLI client for enjaz registrations.
#[derive(Debug, Parser)]
#[command(name = "enjaz-client")]
#[command(about = "CLI client for enjaz registrations", long_about = None)]
pub struct Cli {
    /// Where registrations are kept.
    #[arg(long, env = "ENJAZ_BACKEND", default_value = "api")]
    pub backend: Backend,

    /// Server base URL (api backend).
    #[arg(long, env = "ENJAZ_URL", default_value = "http://localhost:3001")]
    pub base_url: String,

    /// Remote document store URL (document backend).
    #[arg(long, env = "ENJAZ_STORE_URL", default_value = DEFAULT_STORE_URL)]
    pub store_url: String,

    /// Remote document store identifier (document backend).
    #[arg(long, env = "ENJAZ_STORE_ID", default_value = DEFAULT_STORE_ID)]
    pub store_id: String,

    /// Local fallback file (document backend).
    #[arg(long, env = "ENJAZ_FALLBACK_PATH", default_value = DEFAULT_FALLBACK_PATH)]
    pub fallback_path: PathBuf,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Backing strategy for the data access layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// The enjaz server holds the records.
    #[default]
    Api,
    /// A remote JSON document, with a local file as fallback.
    Document,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List all registrations.
    List,
    /// Get a registration by ID.
    Get {
        /// Registration ID.
        id: String,
    },
    /// Register a student.
    Add {
        /// Student ID (must be unique).
        #[arg(long)]
        student_id: String,
        /// Student name.
        #[arg(long)]
        name: String,
        /// Phone number.
        #[arg(long)]
        phone: String,
    },
    /// Delete a registration by ID.
    Delete {
        /// Registration ID.
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from([
            "enjaz-client",
            "--backend",
            "document",
            "add",
            "--student-id",
            "S1",
            "--name",
            "Ali",
            "--phone",
            "555",
        ])
        .unwrap();

        assert_eq!(cli.backend, Backend::Document);
        match cli.command {
            Commands::Add {
                student_id,
                name,
                phone,
            } => {
                assert_eq!(student_id, "S1");
                assert_eq!(name, "Ali");
                assert_eq!(phone, "555");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
