use anyhow::Result;
use bitly_api::Client;
use clap::Args;

use crate::commands::or_report;
use crate::output::{print_json, print_link, OutputFormat};

#[derive(Args)]
pub struct ExpandArgs {
    /// A short URL (http://bit.ly/<hash>) or a bare hash
    pub link: String,
}

pub async fn run(args: &ExpandArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let long_url = or_report(client.expand(&args.link).await)?;

    match format {
        OutputFormat::Table => print_link(&long_url),
        OutputFormat::Json => print_json(&serde_json::json!({
            "link": args.link,
            "longUrl": long_url,
        })),
    }

    Ok(())
}
