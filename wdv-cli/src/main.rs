//! WDV CLI - Command line tool for querying the whale sightings service.

use clap::Parser;

mod cmd;

#[derive(Parser)]
#[command(
    name = "wdv-cli",
    version,
    about = "Whale sightings data toolkit"
)]
struct Cli {
    /// Base URL of the sightings service
    #[arg(short, long, global = true, default_value = wdv_sightings::endpoint::DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let client = cmd::build_client(&cli.base_url, cli.timeout_secs)?;
    cmd::run(&client, cli.command).await
}
