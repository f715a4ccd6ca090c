//! enjaz-client CLI entry point.

use std::sync::Arc;

use clap::Parser;
use enjaz_client::cli::{Backend, Cli, Commands, OutputFormat};
use enjaz_client::output::{render_listing, render_registration};
use enjaz_client::{
    DeleteOutcome, DocumentAccess, EnjazClient, LocalFileStore, RegistrationAccess,
    RemoteDocumentStore,
};
use enjaz_core::NewRegistration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn build_access(cli: &Cli) -> Box<dyn RegistrationAccess> {
    match cli.backend {
        Backend::Api => Box::new(EnjazClient::new(&cli.base_url)),
        Backend::Document => Box::new(DocumentAccess::new(
            Arc::new(RemoteDocumentStore::new(&cli.store_url, &cli.store_id)),
            Arc::new(LocalFileStore::new(&cli.fallback_path)),
        )),
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let access = build_access(&cli);

    match cli.command {
        Commands::List => {
            let listing = access.list().await?;
            println!("{}", render_listing(&listing, cli.format));
        }
        Commands::Get { id } => {
            let registration = access.get(&id).await?;
            println!("{}", render_registration(&registration, cli.format));
        }
        Commands::Add {
            student_id,
            name,
            phone,
        } => {
            let registration = access
                .add(NewRegistration::new(student_id, name, phone))
                .await?;
            if cli.format == OutputFormat::Pretty && !cli.quiet {
                println!("Registered:");
            }
            println!("{}", render_registration(&registration, cli.format));
        }
        Commands::Delete { id } => match access.delete(&id).await? {
            DeleteOutcome::Deleted => {
                if !cli.quiet {
                    println!("Deleted registration {id}");
                }
            }
            DeleteOutcome::NotFound => {
                if !cli.quiet {
                    println!("Registration {id} was already gone");
                }
            }
        },
    }

    Ok(())
}
