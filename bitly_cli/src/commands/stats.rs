use anyhow::Result;
use bitly_api::types::LinkStats;
use bitly_api::Client;
use clap::Args;

use crate::commands::or_report;
use crate::output::{print_json, print_stats_table, OutputFormat};

#[derive(Args)]
pub struct StatsArgs {
    /// A short URL (http://bit.ly/<hash>) or a bare hash
    pub link: String,
}

pub async fn run(args: &StatsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let results = or_report(client.stats(&args.link).await)?;

    match format {
        OutputFormat::Table => print_stats_table(&LinkStats::from_results(&results)?),
        OutputFormat::Json => print_json(&results),
    }

    Ok(())
}
