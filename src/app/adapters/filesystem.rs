//! Filesystem access for the record parser
//!
//! The parser reads through the [`FileSystem`] trait so it can be driven by
//! the local disk in production and by an in-memory map in tests.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader, Cursor, Read};
use std::path::{Path, PathBuf};

/// Read-only file access used by the record parser
pub trait FileSystem: Send + Sync + std::fmt::Debug {
    /// Size of the file in bytes, or `None` if nothing exists at `path`
    fn file_size(&self, path: &Path) -> io::Result<Option<u64>>;

    /// Open the file for reading; the handle is released when the reader is dropped
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + Send>>;
}

/// [`FileSystem`] backed by the local disk
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn file_size(&self, path: &Path) -> io::Result<Option<u64>> {
        match std::fs::metadata(path) {
            Ok(metadata) => Ok(Some(metadata.len())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + Send>> {
        let file = File::open(path)?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// [`FileSystem`] serving file contents from memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryFileSystem {
    files: HashMap<PathBuf, Vec<u8>>,
}

impl InMemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a file, returning `self` for chaining
    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        self.insert(path, contents);
        self
    }

    /// Add or replace a file
    pub fn insert(&mut self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), contents.into());
    }
}

impl FileSystem for InMemoryFileSystem {
    fn file_size(&self, path: &Path) -> io::Result<Option<u64>> {
        Ok(self.files.get(path).map(|contents| contents.len() as u64))
    }

    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + Send>> {
        let contents = self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no in-memory file at {}", path.display()),
            )
        })?;
        Ok(Box::new(Cursor::new(contents)))
    }
}
