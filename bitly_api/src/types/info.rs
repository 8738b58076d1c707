use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ResultsMap;

/// Metadata about one short link, as returned by `info`.
///
/// Every field is optional: the service omits whatever it doesn't know, and
/// the `keys` parameter narrows the response further. Fields whose shape
/// varies (nested maps, sequences) are kept as raw JSON.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkInfo {
    pub calais: Option<Value>,
    pub content_length: Option<Value>,
    pub content_type: Option<String>,
    pub exif: Option<Value>,
    pub global_hash: Option<String>,
    pub hash: Option<String>,
    pub html_meta_description: Option<String>,
    pub html_meta_keywords: Option<Value>,
    pub html_title: Option<String>,
    pub id3: Option<Value>,
    pub keywords: Option<Value>,
    pub long_url: Option<String>,
    pub metacarta: Option<Value>,
    pub mirror_url: Option<String>,
    pub surbl: Option<Value>,
    pub thumbnail: Option<Value>,
    pub users: Option<Value>,
    pub version: Option<Value>,
}

impl LinkInfo {
    /// Parses every entry of an `info` results map, keyed by hash.
    pub fn from_results(results: &ResultsMap) -> Result<BTreeMap<String, LinkInfo>, serde_json::Error> {
        results
            .iter()
            .map(|(hash, entry)| Ok((hash.clone(), LinkInfo::deserialize(entry)?)))
            .collect()
    }
}
