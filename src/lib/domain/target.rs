//! The resolved build items that the build graph is made of

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use super::{
    config_group::ConfigKey,
    source::{Label, SourceDir, SourceFile},
};

/// The final product that a build item declares
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Default, Copy, Clone, Hash)]
pub enum OutputKind {
    #[default]
    #[serde(alias = "executable", alias = "exe")]
    Executable,
    #[serde(
        alias = "static_library",
        alias = "static-lib",
        alias = "static_lib",
        alias = "staticlib"
    )]
    StaticLib,
    #[serde(
        alias = "shared_library",
        alias = "shared-lib",
        alias = "shared_lib",
        alias = "dylib"
    )]
    SharedLib,
    #[serde(alias = "source_set", alias = "source-set", alias = "object_bundle")]
    SourceSet,
    #[serde(alias = "custom", alias = "action")]
    Custom,
    #[serde(alias = "copy", alias = "copy_files")]
    CopyFiles,
    #[serde(alias = "group")]
    Group,
    /// A build item whose kind couldn't be determined by the resolution stage.
    /// Never accepted from a descriptor
    #[serde(skip_deserializing)]
    Unknown,
}

impl OutputKind {
    pub const ALL: [OutputKind; 8] = [
        OutputKind::Executable,
        OutputKind::StaticLib,
        OutputKind::SharedLib,
        OutputKind::SourceSet,
        OutputKind::Custom,
        OutputKind::CopyFiles,
        OutputKind::Group,
        OutputKind::Unknown,
    ];
}

impl Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            OutputKind::Executable => "executable",
            OutputKind::StaticLib => "static_library",
            OutputKind::SharedLib => "shared_library",
            OutputKind::SourceSet => "source_set",
            OutputKind::Custom => "custom",
            OutputKind::CopyFiles => "copy",
            OutputKind::Group => "group",
            OutputKind::Unknown => "unknown",
        };
        f.write_str(kind)
    }
}

/// The settings of a build item consumed by the generators. Binary items fill
/// the compilation related ones, custom items the script related ones
#[derive(Debug, PartialEq, Eq, Default, Clone)]
pub struct TargetSettings {
    pub sources: Vec<SourceFile>,
    pub deps: Vec<Label>,
    pub defines: Vec<String>,
    pub include_dirs: Vec<SourceDir>,
    pub cflags: Vec<String>,
    pub ldflags: Vec<String>,
    pub script: Option<SourceFile>,
    pub args: Vec<String>,
    pub inputs: Vec<SourceFile>,
    pub outputs: Vec<SourceFile>,
}

/// A fully resolved target of the build graph under one concrete configuration
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct BuildItem {
    pub label: Label,
    pub kind: OutputKind,
    /// The configuration slot this item was resolved for
    pub config: ConfigKey,
    pub toolchain: String,
    pub settings: TargetSettings,
}

impl BuildItem {
    pub fn name(&self) -> &str {
        &self.label.name
    }
}

/// Strong type for addressing a [`BuildItem`] inside of the [`super::graph::BuildGraph`]
/// that owns it
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct ItemId(pub usize);
