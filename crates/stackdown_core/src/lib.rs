//! Stackdown core: pure text transforms for the conversion pipeline.
mod excerpt;
mod renderer;
mod scanner;
mod slug;

pub use excerpt::extract_excerpt;
pub use renderer::{Converter, MarkdownRenderer, TagStreamConverter};
pub use scanner::{scan, TagEvent, TagScanner};
pub use slug::slugify;
