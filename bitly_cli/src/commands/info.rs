use anyhow::Result;
use bitly_api::types::LinkInfo;
use bitly_api::Client;
use clap::Args;

use crate::commands::or_report;
use crate::output::{print_info_table, print_json, OutputFormat};

#[derive(Args)]
pub struct InfoArgs {
    /// A short URL (http://bit.ly/<hash>) or a bare hash
    pub link: String,

    /// Only request these fields, comma separated (e.g. htmlTitle,thumbnail)
    #[arg(long, value_delimiter = ',')]
    pub keys: Vec<String>,
}

pub async fn run(args: &InfoArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let results = if args.keys.is_empty() {
        or_report(client.info(&args.link).await)?
    } else {
        let keys: Vec<&str> = args.keys.iter().map(String::as_str).collect();
        or_report(client.info_with_keys(&args.link, &keys).await)?
    };

    match format {
        OutputFormat::Table => print_info_table(&LinkInfo::from_results(&results)?),
        OutputFormat::Json => print_json(&results),
    }

    Ok(())
}
