//! Stackdown engine: archive reading, document assembly, and persistence.
mod archive;
mod convert;
mod dates;
mod document;
mod index;
mod persist;
mod types;
mod urls;

pub use archive::{ArchiveError, ExportArchive};
pub use convert::{
    convert_export, ConvertError, ConvertOptions, DEFAULT_EXCERPT_LENGTH, INDEX_FILENAME,
};
pub use dates::{resolve_date, ResolvedDate};
pub use document::{build_document, DocumentMeta};
pub use index::{build_index_json, IndexEntry};
pub use persist::{ensure_output_dir, DocumentWriter, PersistError};
pub use types::{ConversionReport, PostRecord};
pub use urls::{resolve_post_url, PublicationConfig};
