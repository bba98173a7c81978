use std::{
    fs::DirBuilder,
    io::Write,
    path::{Path, PathBuf},
};

use color_eyre::{
    eyre::{Context, ContextCompat},
    Result,
};
use tempfile::NamedTempFile;

pub fn create_directory(path_create: &Path) -> Result<()> {
    DirBuilder::new()
        .recursive(true)
        .create(path_create)
        .with_context(|| format!("Could not create directory {path_create:?}"))
}

/// Writes `buff_write` to `file_path` by filling a temporary file living on the same
/// directory and renaming it over the destination once it's complete, so readers
/// only ever see the previous content or the new one
pub fn write_file_atomically(file_path: &Path, buff_write: &[u8]) -> Result<()> {
    let dir = file_path
        .parent()
        .with_context(|| format!("Could not resolve the parent directory of {file_path:?}"))?;

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Could not create a temporary file on {dir:?}"))?;
    tmp.write_all(buff_write)
        .with_context(|| format!("Could not write to file {file_path:?}"))?;
    tmp.persist(file_path)
        .with_context(|| format!("Could not persist file {file_path:?}"))?;

    Ok(())
}

pub fn get_project_root_absolute_path(project_root: &Path) -> Result<PathBuf> {
    let canonical = project_root
        .canonicalize()
        .with_context(|| format!("Could not canonicalize {project_root:?}"))?;
    log::debug!("Project root resolved to: {:?}", canonical);
    Ok(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_eyre::Result;
    use tempfile::tempdir;

    #[test]
    fn test_write_file_atomically_overwrites() -> Result<()> {
        let temp = tempdir()?;
        let file = temp.path().join("nested").join("out.gyp");
        create_directory(file.parent().unwrap())?;

        write_file_atomically(&file, b"first")?;
        write_file_atomically(&file, b"second")?;

        assert_eq!(std::fs::read_to_string(&file)?, "second");
        // Only the destination remains, the temporary files were renamed over it
        assert_eq!(std::fs::read_dir(file.parent().unwrap())?.count(), 1);
        Ok(())
    }

    #[test]
    fn test_write_file_atomically_without_directory_fails() -> Result<()> {
        let temp = tempdir()?;
        let file = temp.path().join("missing").join("out.gyp");
        assert!(write_file_atomically(&file, b"content").is_err());
        assert!(!file.exists());
        Ok(())
    }
}
