//! Command-line lookups against the Twitch Helix API.
//!
//! Credentials come from flags or `TWITCH_CLIENT_ID` / `TWITCH_CLIENT_SECRET`
//! (a `.env` file is honored). Results are printed as JSON.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use twitch_client::{AppCredentials, ClientConfig, Record, TwitchApiClient};

#[derive(Debug, Parser)]
#[command(name = "twitch-lookup", version, about = "Look up Twitch users, streams, games and tags")]
struct Cli {
    #[arg(long, env = "TWITCH_CLIENT_ID", hide_env_values = true)]
    client_id: String,

    #[arg(long, env = "TWITCH_CLIENT_SECRET", hide_env_values = true)]
    client_secret: String,

    /// Tag cache file (defaults to TWITCH_TAG_CACHE or ./tags.json).
    #[arg(long)]
    tag_cache: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Users by login name.
    Users { logins: Vec<String> },
    /// Live streams by broadcaster login.
    Streams { logins: Vec<String> },
    /// Games by exact name.
    Games { names: Vec<String> },
    /// Currently most watched games.
    TopGames,
    /// Stream tags by tag ID.
    Tags { ids: Vec<String> },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    load_dotenv();
    let cli = Cli::parse();

    let mut config = ClientConfig::from_env();
    if let Some(path) = cli.tag_cache {
        config = config.with_tag_cache_path(path);
    }

    let credentials = AppCredentials::new(cli.client_id, cli.client_secret);
    let client = TwitchApiClient::with_config(credentials, config)?;
    let mut session = client.enter_session().await?;

    let records: Vec<Record> = match cli.command {
        Command::Users { logins } => session.users(logins).await?,
        Command::Streams { logins } => session.streams(logins).await?,
        Command::Games { names } => session.games(names).await?,
        Command::TopGames => session.top_games().await?,
        Command::Tags { ids } => session.tags(ids).await?,
    };
    session.close();

    tracing::info!(count = records.len(), "Lookup finished");
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}

/// Load .env from multiple candidate paths.
fn load_dotenv() {
    let candidates = [".env", "../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::info!("No .env file found, using system environment variables");
}
