//! The already resolved, read only build graph

use indexmap::IndexMap;
use std::path::{Path, PathBuf};

use super::{
    source::SourceFile,
    target::{BuildItem, ItemId},
    toolchain::Toolchain,
};

/// Project wide settings shared by every build item
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct BuildSettings {
    pub root_path: PathBuf,
}

impl BuildSettings {
    pub fn new(root_path: &Path) -> Self {
        Self {
            root_path: root_path.to_path_buf(),
        }
    }

    /// Maps a source absolute file to its location on the filesystem
    pub fn full_path(&self, file: &SourceFile) -> PathBuf {
        self.root_path.join(file.relative_to_source_root())
    }
}

/// Owns every [`BuildItem`] in declaration order. Nothing mutates it once
/// it has been built, so it can be freely shared by the writers
#[derive(Debug)]
pub struct BuildGraph {
    pub settings: BuildSettings,
    pub toolchains: IndexMap<String, Toolchain>,
    pub default_toolchain: String,
    items: Vec<BuildItem>,
}

impl BuildGraph {
    pub fn new(
        settings: BuildSettings,
        toolchains: IndexMap<String, Toolchain>,
        default_toolchain: String,
        items: Vec<BuildItem>,
    ) -> Self {
        Self {
            settings,
            toolchains,
            default_toolchain,
            items,
        }
    }

    pub fn item(&self, id: ItemId) -> &BuildItem {
        &self.items[id.0]
    }

    pub fn items(&self) -> impl Iterator<Item = (ItemId, &BuildItem)> {
        self.items.iter().enumerate().map(|(i, item)| (ItemId(i), item))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The toolchain that drives the text generation of every *GYP* file
    pub fn default_toolchain(&self) -> Option<&Toolchain> {
        self.toolchains.get(&self.default_toolchain)
    }
}
