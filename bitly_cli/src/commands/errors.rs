use anyhow::Result;
use bitly_api::types::ErrorEntry;
use bitly_api::Client;

use crate::commands::or_report;
use crate::output::{print_errors_table, print_json, OutputFormat};

pub async fn run(client: &Client, format: &OutputFormat) -> Result<()> {
    let catalog = or_report(client.errors().await)?;

    match format {
        OutputFormat::Table => print_errors_table(&ErrorEntry::from_results(&catalog)),
        OutputFormat::Json => print_json(&catalog),
    }

    Ok(())
}
