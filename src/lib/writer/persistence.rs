use color_eyre::Result;
use std::path::Path;

use crate::utils;

/// Where the finished *GYP* files end up
pub trait Persistence {
    fn ensure_directory(&self, path: &Path) -> Result<()>;

    /// Writes the whole `contents` at once. No partially written file may ever
    /// be observable on `path`
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;
}

/// Persists the files on the local filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct FsPersistence;

impl Persistence for FsPersistence {
    fn ensure_directory(&self, path: &Path) -> Result<()> {
        utils::fs::create_directory(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        utils::fs::write_file_atomically(path, contents)
    }
}
