use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ResultsMap;

/// Traffic data for a short link, as returned by `stats`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkStats {
    /// Clicks through any bit.ly link to the source.
    pub clicks: Option<i64>,
    /// Global hash for the source.
    pub hash: Option<String>,
    /// Referrers across all bit.ly links to the source.
    pub referrers: Option<Value>,
    /// Clicks through this user's link only.
    pub user_clicks: Option<i64>,
    pub user_hash: Option<String>,
    pub user_referrers: Option<Value>,
}

impl LinkStats {
    pub fn from_results(results: &ResultsMap) -> Result<Self, serde_json::Error> {
        LinkStats::deserialize(Value::Object(results.clone()))
    }
}
