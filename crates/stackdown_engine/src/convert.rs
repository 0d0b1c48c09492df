use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;

use engine_logging::{engine_info, engine_warn};
use stackdown_core::{extract_excerpt, slugify, Converter, TagStreamConverter};

use crate::archive::{ArchiveError, ExportArchive};
use crate::dates::resolve_date;
use crate::document::{build_document, DocumentMeta};
use crate::index::{build_index_json, IndexEntry};
use crate::persist::{ensure_output_dir, DocumentWriter, PersistError};
use crate::types::{ConversionReport, PostRecord};
use crate::urls::{resolve_post_url, PublicationConfig};

/// Name of the aggregate index written next to the documents.
pub const INDEX_FILENAME: &str = "metadata.json";
/// Excerpt length used when a record has no subtitle.
pub const DEFAULT_EXCERPT_LENGTH: usize = 200;
const DOCUMENT_EXTENSION: &str = "md";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub output_dir: PathBuf,
    pub publication: PublicationConfig,
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Archive(#[from] ArchiveError),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Convert every post in the export archive into a Markdown document and
/// write the aggregate index.
///
/// Posts are processed sequentially in index order, each with fresh
/// renderer state. A post whose HTML body is missing from the archive is
/// skipped with a warning; the run still succeeds.
pub fn convert_export(
    archive_path: &Path,
    options: &ConvertOptions,
) -> Result<ConversionReport, ConvertError> {
    let mut archive = ExportArchive::open(archive_path)?;
    let records = archive.read_index()?;
    engine_info!("Found {} posts in {}", records.len(), archive_path.display());

    ensure_output_dir(&options.output_dir)?;
    let writer = DocumentWriter::new(options.output_dir.clone());

    let total = records.len();
    let mut entries = Vec::with_capacity(total);
    let mut skipped = 0usize;
    for (position, record) in records.iter().enumerate() {
        let Some(html) = archive.read_post_html(&record.post_id) else {
            engine_warn!("No HTML body for post {}, skipping", record.post_id);
            skipped += 1;
            continue;
        };
        let entry = convert_post(record, &html, &options.publication, &writer)?;
        engine_info!("[{}/{}] Converted: {}", position + 1, total, entry.title);
        entries.push(entry);
    }

    let converted = entries.len();
    let index_json = build_index_json(entries, &Utc::now().to_rfc3339());
    let index_path = writer.write(INDEX_FILENAME, &index_json)?;

    Ok(ConversionReport {
        converted,
        skipped,
        output_dir: options.output_dir.clone(),
        index_path,
    })
}

fn convert_post(
    record: &PostRecord,
    html: &str,
    publication: &PublicationConfig,
    writer: &DocumentWriter,
) -> Result<IndexEntry, ConvertError> {
    let title = if record.title.is_empty() {
        "Untitled".to_string()
    } else {
        record.title.clone()
    };
    let slug = resolve_slug(record, &title);
    let markdown = TagStreamConverter.to_markdown(html);
    let excerpt = if record.subtitle.is_empty() {
        extract_excerpt(html, DEFAULT_EXCERPT_LENGTH)
    } else {
        record.subtitle.clone()
    };
    let date = resolve_date(&record.post_date);
    let substack_url = resolve_post_url(&record.canonical_url, &slug, publication);
    let filename = format!("{slug}.{DOCUMENT_EXTENSION}");

    let document = build_document(
        &DocumentMeta {
            title: &title,
            subtitle: &record.subtitle,
            date: &date.normalized,
            display_date: &date.display,
            slug: &slug,
            excerpt: &excerpt,
            substack_url: &substack_url,
        },
        &markdown,
    );
    writer.write(&filename, &document)?;

    Ok(IndexEntry {
        title,
        subtitle: record.subtitle.clone(),
        slug,
        date: date.normalized,
        display_date: date.display,
        excerpt,
        substack_url,
        filename,
    })
}

// Records occasionally ship without a slug; fall back to the title, then to
// the raw identifier so a filename never collapses to just the extension.
fn resolve_slug(record: &PostRecord, title: &str) -> String {
    if !record.slug.is_empty() {
        return record.slug.clone();
    }
    let derived = slugify(title);
    if derived.is_empty() {
        record.post_id.clone()
    } else {
        derived
    }
}
