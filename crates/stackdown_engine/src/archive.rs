use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;
use zip::result::ZipError;
use zip::ZipArchive;

use engine_logging::engine_warn;

use crate::types::PostRecord;

/// The index may live anywhere in the archive as long as its name ends in
/// this suffix.
pub const INDEX_SUFFIX: &str = "posts.csv";

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("failed to open archive {path}: {source}")]
    Open { path: PathBuf, source: io::Error },
    #[error("not a readable zip archive: {0}")]
    Zip(#[from] ZipError),
    #[error("no posts.csv index found in archive")]
    MissingIndex,
    #[error("failed to parse the post index: {0}")]
    Index(#[from] csv::Error),
}

/// Read-side wrapper over the export ZIP.
pub struct ExportArchive {
    zip: ZipArchive<File>,
}

impl ExportArchive {
    pub fn open(path: &Path) -> Result<Self, ArchiveError> {
        let file = File::open(path).map_err(|source| ArchiveError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let zip = ZipArchive::new(file)?;
        Ok(Self { zip })
    }

    /// Locate and parse the post index.
    ///
    /// A row that fails to deserialize is skipped with a warning; only a
    /// missing or unreadable index fails the run.
    pub fn read_index(&mut self) -> Result<Vec<PostRecord>, ArchiveError> {
        let index_name = self
            .zip
            .file_names()
            .find(|name| name.ends_with(INDEX_SUFFIX))
            .map(str::to_string)
            .ok_or(ArchiveError::MissingIndex)?;
        let entry = self.zip.by_name(&index_name)?;

        let mut records = Vec::new();
        let reader = csv::Reader::from_reader(entry);
        for (row, result) in reader.into_deserialize::<PostRecord>().enumerate() {
            match result {
                Ok(record) => records.push(record),
                Err(err) => engine_warn!("Skipping malformed index row {}: {}", row + 1, err),
            }
        }
        Ok(records)
    }

    /// The HTML body for `post_id`, or `None` when the archive has no
    /// `posts/<post_id>.html` entry or it cannot be read.
    pub fn read_post_html(&mut self, post_id: &str) -> Option<String> {
        let name = format!("posts/{post_id}.html");
        let mut entry = self.zip.by_name(&name).ok()?;
        let mut html = String::new();
        entry.read_to_string(&mut html).ok()?;
        Some(html)
    }
}
