//! Test utilities and fixtures for record parser testing
//!
//! This module provides CSV fixtures and helpers shared by the parser test
//! modules.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tempfile::NamedTempFile;

use crate::app::adapters::filesystem::InMemoryFileSystem;
use crate::app::services::record_parser::RecordParser;

mod parser_tests;

/// Path used for in-memory fixtures
pub const TEST_CSV_PATH: &str = "people.csv";

/// Three valid rows: Alice, Bob, Carol
pub fn create_valid_csv() -> String {
    r#"id,name,age,email
1,Alice,30,alice@example.com
2,Bob,25,bob@example.com
3,Carol,40,carol@example.com
"#
    .to_string()
}

/// Same as [`create_valid_csv`] but the third row has an empty name
pub fn create_csv_with_empty_name() -> String {
    r#"id,name,age,email
1,Alice,30,alice@example.com
2,Bob,25,bob@example.com
3,,40,carol@example.com
"#
    .to_string()
}

/// Parser reading a single in-memory file at [`TEST_CSV_PATH`]
pub fn create_in_memory_parser(content: impl Into<Vec<u8>>) -> RecordParser {
    let fs = InMemoryFileSystem::new().with_file(TEST_CSV_PATH, content);
    RecordParser::new(Arc::new(fs))
}

/// Path of the in-memory fixture file
pub fn test_path() -> &'static Path {
    Path::new(TEST_CSV_PATH)
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}
