//! Source absolute paths (`//dir/file.cc`) and the labels that name the build items

use std::fmt::{self, Display};

use color_eyre::{eyre::eyre, Result};

use crate::utils::constants::{error_messages, GYP_FILE_EXT, ROOT_GYP_FILE_STEM};

const SOURCE_ROOT: &str = "//";

fn ensure_source_absolute(value: &str) -> Result<()> {
    if value.starts_with(SOURCE_ROOT) {
        Ok(())
    } else {
        Err(eyre!("{}: {value:?}", error_messages::NOT_SOURCE_ABSOLUTE))
    }
}

/// A directory relative to the source root. Always starts with `//` and ends with `/`
#[derive(Debug, PartialEq, Eq, Hash, Clone, PartialOrd, Ord)]
pub struct SourceDir(String);

impl SourceDir {
    pub fn new(value: &str) -> Result<Self> {
        ensure_source_absolute(value)?;
        if value.ends_with('/') {
            Ok(Self(value.to_owned()))
        } else {
            Ok(Self(format!("{value}/")))
        }
    }

    pub fn root() -> Self {
        Self(SOURCE_ROOT.to_owned())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// The path components of the directory, without the leading `//`
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.0[SOURCE_ROOT.len()..]
            .split('/')
            .filter(|c| !c.is_empty())
    }

    pub fn is_root(&self) -> bool {
        self.0 == SOURCE_ROOT
    }

    /// The last component of the directory, or [`None`] for the source root
    pub fn last_component(&self) -> Option<&str> {
        self.components().last()
    }

    /// Joins a file name to this directory
    pub fn file(&self, name: &str) -> SourceFile {
        SourceFile(format!("{}{name}", self.0))
    }

    /// The *GYP* file that collects the targets declared on this directory.
    /// `//base/` maps to `//base/base.gyp`
    pub fn gyp_file(&self) -> SourceFile {
        let stem = self.last_component().unwrap_or(ROOT_GYP_FILE_STEM);
        self.file(&format!("{stem}.{GYP_FILE_EXT}"))
    }
}

impl Display for SourceDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A file relative to the source root. Always starts with `//`
#[derive(Debug, PartialEq, Eq, Hash, Clone, PartialOrd, Ord)]
pub struct SourceFile(String);

impl SourceFile {
    pub fn new(value: &str) -> Result<Self> {
        ensure_source_absolute(value)?;
        if value.ends_with('/') {
            return Err(eyre!("Expected a file but got a directory: {value:?}"));
        }
        Ok(Self(value.to_owned()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// The path without the leading `//`, usable to join it with a filesystem root
    pub fn relative_to_source_root(&self) -> &str {
        &self.0[SOURCE_ROOT.len()..]
    }

    pub fn dir(&self) -> SourceDir {
        match self.0.rfind('/') {
            Some(idx) => SourceDir(self.0[..=idx].to_owned()),
            None => SourceDir::root(),
        }
    }

    pub fn name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl Display for SourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The unique identifier of a build item: `//dir:name`. When the name is
/// omitted (`//dir`), the last directory component is the name
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Label {
    pub dir: SourceDir,
    pub name: String,
}

impl Label {
    pub fn parse(value: &str) -> Result<Self> {
        ensure_source_absolute(value)?;
        let (dir, name) = match value.rsplit_once(':') {
            Some((dir, name)) => (SourceDir::new(dir)?, name.to_owned()),
            None => {
                let dir = SourceDir::new(value)?;
                let name = dir
                    .last_component()
                    .ok_or_else(|| eyre!("The label {value:?} needs an explicit name"))?
                    .to_owned();
                (dir, name)
            }
        };

        if name.is_empty() {
            return Err(eyre!("The label {value:?} has an empty name"));
        }

        Ok(Self { dir, name })
    }

    /// The *GYP* file where the target named by this label gets written
    pub fn gyp_file(&self) -> SourceFile {
        self.dir.gyp_file()
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dir = if self.dir.is_root() {
            SOURCE_ROOT
        } else {
            self.dir.value().trim_end_matches('/')
        };
        write!(f, "{dir}:{}", self.name)
    }
}
