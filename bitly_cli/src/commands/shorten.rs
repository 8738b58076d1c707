use anyhow::Result;
use bitly_api::Client;
use clap::Args;

use crate::commands::or_report;
use crate::output::{print_json, print_link, OutputFormat};

#[derive(Args)]
pub struct ShortenArgs {
    /// The URL to shorten, sent exactly as given
    pub long_url: String,
}

pub async fn run(args: &ShortenArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let short_url = or_report(client.shorten(&args.long_url).await)?;

    match format {
        OutputFormat::Table => print_link(&short_url),
        OutputFormat::Json => print_json(&serde_json::json!({
            "longUrl": args.long_url,
            "shortUrl": short_url,
        })),
    }

    Ok(())
}
