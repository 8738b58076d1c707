mod commands;
mod output;

use std::time::Duration;

use anyhow::Result;
use bitly_api::{Client, HttpTransport, DEFAULT_BASE_URL, DEFAULT_VERSION};
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "bitly")]
#[command(about = "Shorten, expand and inspect bit.ly links")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Account login
    #[arg(long, env = "BITLY_LOGIN", global = true, hide_env_values = true)]
    login: Option<String>,

    /// API key
    #[arg(long, env = "BITLY_API_KEY", global = true, hide_env_values = true)]
    api_key: Option<String>,

    /// API version tag sent with every request
    #[arg(long, env = "BITLY_API_VERSION", default_value = DEFAULT_VERSION, global = true)]
    api_version: String,

    /// API base URL
    #[arg(long, env = "BITLY_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "BITLY_TIMEOUT", default_value = "30", global = true)]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shorten a long URL
    Shorten(commands::shorten::ShortenArgs),
    /// Expand a short URL or hash to its long URL
    Expand(commands::expand::ExpandArgs),
    /// Show metadata about a short URL or hash
    Info(commands::info::InfoArgs),
    /// Show click and referrer statistics for a short URL or hash
    Stats(commands::stats::StatsArgs),
    /// List the service's error codes
    Errors,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bitly=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let login = cli
        .login
        .ok_or_else(|| anyhow::anyhow!("missing login: pass --login or set BITLY_LOGIN"))?;
    let api_key = cli
        .api_key
        .ok_or_else(|| anyhow::anyhow!("missing API key: pass --api-key or set BITLY_API_KEY"))?;

    let transport = HttpTransport::new().with_timeout(Duration::from_secs(cli.timeout));
    let client = Client::with_transport(&login, &api_key, transport)
        .with_version(&cli.api_version)
        .with_base_url(&cli.base_url);

    match &cli.command {
        Commands::Shorten(args) => commands::shorten::run(args, &client, &format).await?,
        Commands::Expand(args) => commands::expand::run(args, &client, &format).await?,
        Commands::Info(args) => commands::info::run(args, &client, &format).await?,
        Commands::Stats(args) => commands::stats::run(args, &client, &format).await?,
        Commands::Errors => commands::errors::run(&client, &format).await?,
    }

    Ok(())
}
