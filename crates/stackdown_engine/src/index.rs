use serde::Serialize;
use serde_json::json;

/// Summary of one successfully converted post, as serialized into the
/// aggregate `metadata.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    pub title: String,
    pub subtitle: String,
    pub slug: String,
    pub date: String,
    pub display_date: String,
    pub excerpt: String,
    pub substack_url: String,
    pub filename: String,
}

/// Serialize the aggregate index: entries sorted newest first (a stable
/// sort, so equal dates keep their archive order), a total count, and the
/// generation timestamp.
pub fn build_index_json(mut entries: Vec<IndexEntry>, last_updated: &str) -> String {
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    let total = entries.len();
    let index = json!({
        "articles": entries,
        "totalCount": total,
        "lastUpdated": last_updated,
    });
    serde_json::to_string_pretty(&index).unwrap_or_else(|_| "{}".to_string())
}
