use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of the service's error catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEntry {
    pub error_code: i64,
    pub error_message: String,
    #[serde(default)]
    pub status_code: Option<String>,
}

impl ErrorEntry {
    /// Reads the `errors` results, which come either as a sequence of entry
    /// objects or as a code-to-message mapping. Unrecognised items are skipped.
    pub fn from_results(results: &Value) -> Vec<ErrorEntry> {
        match results {
            Value::Array(items) => items
                .iter()
                .filter_map(|item| ErrorEntry::deserialize(item).ok())
                .collect(),
            Value::Object(map) => {
                let mut entries: Vec<ErrorEntry> = map
                    .iter()
                    .filter_map(|(code, message)| {
                        Some(ErrorEntry {
                            error_code: code.trim().parse().ok()?,
                            error_message: message.as_str()?.to_string(),
                            status_code: None,
                        })
                    })
                    .collect();
                entries.sort_by_key(|e| e.error_code);
                entries
            }
            _ => Vec::new(),
        }
    }
}
