use std::path::PathBuf;

use serde::Deserialize;

/// One row of the export's post index.
///
/// Every field may be empty; the conversion pipeline supplies fallbacks
/// where one matters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct PostRecord {
    #[serde(default)]
    pub post_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub post_date: String,
    #[serde(default)]
    pub canonical_url: String,
}

/// Outcome summary of a full conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub converted: usize,
    pub skipped: usize,
    pub output_dir: PathBuf,
    pub index_path: PathBuf,
}
