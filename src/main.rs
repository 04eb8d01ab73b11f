use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{Args, Commands};
use person_domain::models::Person;

fn setup_environment() -> Result<()> {
    // A missing .env is fine, a malformed one is not
    match dotenvy::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e).context("Failed to load .env"),
    }
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Could not initialise logging")
}

fn new_person(id: i64, first_name: &str, last_name: &str) -> Person {
    tracing::info!("Building person record {}", id);

    let start = std::time::Instant::now();
    let person = Person::new(id, first_name, last_name);

    tracing::debug!("Person record built in {:?}", start.elapsed());

    person
}

fn main() -> Result<()> {
    setup_environment()?;
    init_tracing()?;

    let cli = Args::parse();
    match cli.command {
        Some(Commands::New {
            id,
            first_name,
            last_name,
        }) => {
            let person = new_person(id, &first_name, &last_name);
            println!("{:#?}", person);
        }
        None => {
            println!("Run with --help to see instructions");
        }
    }

    Ok(())
}
