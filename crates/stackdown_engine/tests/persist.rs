use std::fs;

use stackdown_engine::{ensure_output_dir, DocumentWriter};
use tempfile::TempDir;

#[test]
fn creates_missing_output_dir_with_parents() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("out").join("posts");
    assert!(!new_dir.exists());
    ensure_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn rejects_a_file_standing_in_for_the_output_dir() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();
    assert!(ensure_output_dir(&file_path).is_err());
}

#[test]
fn write_replaces_existing_documents() {
    let temp = TempDir::new().unwrap();
    let writer = DocumentWriter::new(temp.path().to_path_buf());

    let first = writer.write("doc.md", "hello").unwrap();
    assert_eq!(first.file_name().unwrap(), "doc.md");
    assert_eq!(fs::read_to_string(&first).unwrap(), "hello");

    let second = writer.write("doc.md", "world").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "world");
}

#[test]
fn no_partial_file_when_the_target_dir_is_unusable() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = DocumentWriter::new(file_path.clone());
    assert!(writer.write("doc.md", "data").is_err());
    assert!(!file_path.with_file_name("doc.md").exists());
}
