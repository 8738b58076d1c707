use std::collections::BTreeMap;

use bitly_api::types::{ErrorEntry, LinkInfo, LinkStats};
use serde_json::Value;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled)]
struct InfoRow {
    #[tabled(rename = "Hash")]
    hash: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Long URL")]
    long_url: String,
    #[tabled(rename = "Content Type")]
    content_type: String,
}

#[derive(Tabled)]
struct StatRow {
    #[tabled(rename = "Metric")]
    metric: String,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled)]
struct ErrorRow {
    #[tabled(rename = "Code")]
    code: i64,
    #[tabled(rename = "Message")]
    message: String,
}

// -- Row builders --

fn build_info_rows(infos: &BTreeMap<String, LinkInfo>) -> Vec<InfoRow> {
    infos
        .iter()
        .map(|(hash, info)| InfoRow {
            hash: hash.clone(),
            title: info.html_title.clone().unwrap_or_default(),
            long_url: info.long_url.clone().unwrap_or_default(),
            content_type: info.content_type.clone().unwrap_or_default(),
        })
        .collect()
}

fn build_stat_rows(stats: &LinkStats) -> Vec<StatRow> {
    let mut rows = Vec::new();
    let mut push = |metric: &str, value: String| {
        rows.push(StatRow {
            metric: metric.to_string(),
            value,
        })
    };

    if let Some(clicks) = stats.clicks {
        push("Clicks", clicks.to_string());
    }
    if let Some(clicks) = stats.user_clicks {
        push("User clicks", clicks.to_string());
    }
    if let Some(ref hash) = stats.hash {
        push("Hash", hash.clone());
    }
    if let Some(ref hash) = stats.user_hash {
        push("User hash", hash.clone());
    }
    for (referrer, clicks) in referrer_pairs(stats.referrers.as_ref()) {
        push(&format!("Referrer {}", referrer), clicks);
    }
    for (referrer, clicks) in referrer_pairs(stats.user_referrers.as_ref()) {
        push(&format!("User referrer {}", referrer), clicks);
    }
    rows
}

fn build_error_rows(entries: &[ErrorEntry]) -> Vec<ErrorRow> {
    entries
        .iter()
        .map(|e| ErrorRow {
            code: e.error_code,
            message: e.error_message.clone(),
        })
        .collect()
}

/// Flattens a referrer collection into (referrer, clicks) pairs. Accepts a
/// sequence of `{referrer, clicks}` objects or a referrer-to-clicks map.
fn referrer_pairs(referrers: Option<&Value>) -> Vec<(String, String)> {
    match referrers {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| {
                let referrer = item.get("referrer")?.as_str()?;
                let clicks = item.get("clicks").map(render_value).unwrap_or_default();
                Some((display_referrer(referrer), clicks))
            })
            .collect(),
        Some(Value::Object(map)) => map
            .iter()
            .map(|(referrer, clicks)| (display_referrer(referrer), render_value(clicks)))
            .collect(),
        _ => Vec::new(),
    }
}

fn display_referrer(referrer: &str) -> String {
    if referrer.is_empty() {
        "(direct)".to_string()
    } else {
        referrer.to_string()
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// -- Table output --

pub fn print_link(link: &str) {
    println!("{}", link);
}

pub fn print_info_table(infos: &BTreeMap<String, LinkInfo>) {
    println!("{}", Table::new(build_info_rows(infos)));
}

pub fn print_stats_table(stats: &LinkStats) {
    println!("{}", Table::new(build_stat_rows(stats)));
}

pub fn print_errors_table(entries: &[ErrorEntry]) {
    println!("{}", Table::new(build_error_rows(entries)));
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
