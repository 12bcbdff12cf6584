//! Subcommand implementations.

use anyhow::Context;
use clap::Subcommand;
use log::info;
use std::time::Duration;
use wdv_sightings::client::SightingsClient;
use wdv_sightings::endpoint::Endpoints;
use wdv_sightings::sighting::SightingsQuery;

#[derive(Subcommand)]
pub enum Command {
    /// List the species and years the service has sightings for
    Catalog,

    /// Fetch the sighting records for one species and year
    Sightings {
        /// Species name, e.g. "Gray Whale"
        #[arg(short, long)]
        species: String,

        /// Four-digit year
        #[arg(short, long)]
        year: i32,

        /// Print only the number of records
        #[arg(long)]
        count: bool,
    },
}

pub fn build_client(base_url: &str, timeout_secs: u64) -> anyhow::Result<SightingsClient> {
    let endpoints = Endpoints::new(base_url)
        .with_context(|| format!("invalid base url {}", base_url))?;
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()?;
    Ok(SightingsClient::with_client(http, endpoints))
}

pub async fn run(client: &SightingsClient, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Catalog => {
            info!("Fetching catalog from {}", client.endpoints().catalog_url());
            let catalog = client
                .fetch_catalog()
                .await
                .context("failed to load species and years")?;
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        }
        Command::Sightings {
            species,
            year,
            count,
        } => {
            let query = SightingsQuery::new(species, year);
            info!("Fetching {}", client.endpoints().sightings_url(&query));
            let data = client
                .fetch_sightings(&query)
                .await
                .with_context(|| format!("failed to load sightings for {} {}", query.species, year))?;
            if count {
                match data.record_count() {
                    Some(n) => println!("{}", n),
                    None => anyhow::bail!("response is not a list of records"),
                }
            } else {
                println!("{}", serde_json::to_string_pretty(data.as_value())?);
            }
        }
    }
    Ok(())
}
