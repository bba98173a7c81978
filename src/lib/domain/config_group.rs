//! Merges the per configuration variants of one logical target
//!
//! A logical target may have been resolved several times: once per build mode,
//! host or target placement, word size and IDE project flavour. A [`ConfigGroup`]
//! collects all of them so they can be written as a single *GYP* entry.

use color_eyre::{eyre::eyre, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display},
    str::FromStr,
};

use super::{
    graph::BuildGraph,
    target::{BuildItem, ItemId},
};
use crate::utils::constants::error_messages;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum BuildMode {
    Debug,
    Release,
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Placement {
    Target,
    Host,
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum WordSize {
    Native,
    Bits64,
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ProjectFlavor {
    Native,
    Ide,
}

/// One point on the configuration axes
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ConfigKey {
    pub mode: BuildMode,
    pub placement: Placement,
    pub word_size: WordSize,
    pub project: ProjectFlavor,
}

impl ConfigKey {
    pub const fn new(
        mode: BuildMode,
        placement: Placement,
        word_size: WordSize,
        project: ProjectFlavor,
    ) -> Self {
        Self {
            mode,
            placement,
            word_size,
            project,
        }
    }

    pub const DEBUG: Self = Self::new(
        BuildMode::Debug,
        Placement::Target,
        WordSize::Native,
        ProjectFlavor::Native,
    );
    pub const RELEASE: Self = Self::DEBUG.with_mode(BuildMode::Release);
    pub const HOST_DEBUG: Self = Self::DEBUG.with_placement(Placement::Host);
    pub const HOST_RELEASE: Self = Self::RELEASE.with_placement(Placement::Host);
    pub const DEBUG_64: Self = Self::DEBUG.with_word_size(WordSize::Bits64);
    pub const RELEASE_64: Self = Self::RELEASE.with_word_size(WordSize::Bits64);
    pub const IDE_DEBUG: Self = Self::DEBUG.with_project(ProjectFlavor::Ide);
    pub const IDE_RELEASE: Self = Self::RELEASE.with_project(ProjectFlavor::Ide);
    pub const IDE_HOST_DEBUG: Self = Self::HOST_DEBUG.with_project(ProjectFlavor::Ide);
    pub const IDE_HOST_RELEASE: Self = Self::HOST_RELEASE.with_project(ProjectFlavor::Ide);

    /// The configuration slots that the rest of the toolchain knows how to produce,
    /// paired with the name they are referred by
    pub const RECOGNIZED: [(Self, &'static str); 10] = [
        (Self::DEBUG, "debug"),
        (Self::RELEASE, "release"),
        (Self::HOST_DEBUG, "host-debug"),
        (Self::HOST_RELEASE, "host-release"),
        (Self::DEBUG_64, "debug-64"),
        (Self::RELEASE_64, "release-64"),
        (Self::IDE_DEBUG, "ide-debug"),
        (Self::IDE_RELEASE, "ide-release"),
        (Self::IDE_HOST_DEBUG, "ide-host-debug"),
        (Self::IDE_HOST_RELEASE, "ide-host-release"),
    ];

    /// The slot whose build item decides the name and the output kind of a group
    pub const REPRESENTATIVE: Self = Self::DEBUG;

    pub const fn with_mode(mut self, mode: BuildMode) -> Self {
        self.mode = mode;
        self
    }

    pub const fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub const fn with_word_size(mut self, word_size: WordSize) -> Self {
        self.word_size = word_size;
        self
    }

    pub const fn with_project(mut self, project: ProjectFlavor) -> Self {
        self.project = project;
        self
    }

    pub fn slot_name(&self) -> Option<&'static str> {
        Self::RECOGNIZED
            .iter()
            .find(|(key, _)| key == self)
            .map(|(_, name)| *name)
    }

    /// The name of the configuration on the *GYP* side (`Debug`, `Release_x64`...)
    pub fn gyp_configuration_name(&self) -> String {
        let mode = match self.mode {
            BuildMode::Debug => "Debug",
            BuildMode::Release => "Release",
        };
        match self.word_size {
            WordSize::Native => mode.to_owned(),
            WordSize::Bits64 => format!("{mode}_x64"),
        }
    }
}

impl FromStr for ConfigKey {
    type Err = color_eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        Self::RECOGNIZED
            .iter()
            .find(|(_, name)| *name == s)
            .map(|(key, _)| *key)
            .ok_or_else(|| eyre!("{}: {s:?}", error_messages::UNKNOWN_CONFIGURATION))
    }
}

impl TryFrom<String> for ConfigKey {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse().map_err(|e: color_eyre::Report| e.to_string())
    }
}

impl From<ConfigKey> for String {
    fn from(value: ConfigKey) -> Self {
        value.to_string()
    }
}

impl Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot_name() {
            Some(name) => f.write_str(name),
            None => write!(
                f,
                "{:?}-{:?}-{:?}-{:?}",
                self.mode, self.placement, self.word_size, self.project
            ),
        }
    }
}

/// One logical target together with the build items that it resolves to under
/// every configuration it exists in. The group doesn't own the items, it only
/// addresses them inside of the [`BuildGraph`]
#[derive(Debug, Clone)]
pub struct ConfigGroup<'a> {
    graph: &'a BuildGraph,
    slots: IndexMap<ConfigKey, ItemId>,
}

impl<'a> ConfigGroup<'a> {
    pub fn new(graph: &'a BuildGraph) -> Self {
        Self {
            graph,
            slots: IndexMap::new(),
        }
    }

    pub fn with_slot(mut self, key: ConfigKey, id: ItemId) -> Self {
        self.slots.insert(key, id);
        self
    }

    /// Fills the slot for `key`, returning the item that was already there, if any
    pub fn insert(&mut self, key: ConfigKey, id: ItemId) -> Option<ItemId> {
        self.slots.insert(key, id)
    }

    pub fn get(&self, key: ConfigKey) -> Option<&'a BuildItem> {
        let graph = self.graph;
        self.slots.get(&key).map(|id| graph.item(*id))
    }

    pub fn debug(&self) -> Option<&'a BuildItem> {
        self.get(ConfigKey::REPRESENTATIVE)
    }

    /// The build item that decides the emitted name and output kind of the group.
    ///
    /// # Panics
    /// If the group has no debug slot. Groups without one must never reach the
    /// writers
    pub fn representative(&self) -> &'a BuildItem {
        self.debug().expect(error_messages::MISSING_REPRESENTATIVE)
    }

    /// Iterates the present slots in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (ConfigKey, &'a BuildItem)> + '_ {
        let graph = self.graph;
        self.slots.iter().map(move |(key, id)| (*key, graph.item(*id)))
    }

    pub fn has_placement(&self, placement: Placement) -> bool {
        self.slots.keys().any(|key| key.placement == placement)
    }

    pub fn graph(&self) -> &'a BuildGraph {
        self.graph
    }

    /// Checks that every present slot refers to a build item with the same name
    /// and output kind than the representative one.
    ///
    /// # Panics
    /// As [`ConfigGroup::representative`], when there's no debug slot
    pub fn check_coherence(&self) -> Result<()> {
        let representative = self.representative();

        for (key, item) in self.iter() {
            if item.name() != representative.name() || item.kind != representative.kind {
                return Err(eyre!(
                    "{}: slot '{key}' holds {} ({}) but the representative is {} ({})",
                    error_messages::INCOHERENT_GROUP,
                    item.label,
                    item.kind,
                    representative.label,
                    representative.kind
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::{
        graph::BuildSettings,
        source::Label,
        target::{OutputKind, TargetSettings},
        toolchain::Toolchain,
    };
    use indexmap::IndexMap;
    use std::path::Path;

    pub(crate) fn item(label: &str, kind: OutputKind) -> BuildItem {
        item_for(label, kind, ConfigKey::DEBUG)
    }

    pub(crate) fn item_for(label: &str, kind: OutputKind, config: ConfigKey) -> BuildItem {
        BuildItem {
            label: Label::parse(label).unwrap(),
            kind,
            config,
            toolchain: "default".to_owned(),
            settings: TargetSettings::default(),
        }
    }

    pub(crate) fn graph_of(items: Vec<BuildItem>) -> BuildGraph {
        let mut toolchains = IndexMap::new();
        toolchains.insert("default".to_owned(), Toolchain::new("default"));
        BuildGraph::new(
            BuildSettings::new(Path::new(".")),
            toolchains,
            "default".to_owned(),
            items,
        )
    }

    #[test]
    fn test_recognized_slot_names() {
        assert_eq!(ConfigKey::DEBUG.to_string(), "debug");
        assert_eq!(ConfigKey::IDE_HOST_RELEASE.to_string(), "ide-host-release");
        assert_eq!(
            "release-64".parse::<ConfigKey>().unwrap(),
            ConfigKey::RELEASE_64
        );
        assert!("debug-32".parse::<ConfigKey>().is_err());

        let keys: std::collections::HashSet<_> =
            ConfigKey::RECOGNIZED.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys.len(), 10);
    }

    #[test]
    fn test_gyp_configuration_names() {
        assert_eq!(ConfigKey::DEBUG.gyp_configuration_name(), "Debug");
        assert_eq!(ConfigKey::HOST_RELEASE.gyp_configuration_name(), "Release");
        assert_eq!(ConfigKey::RELEASE_64.gyp_configuration_name(), "Release_x64");
    }

    #[test]
    fn test_group_slots_resolve_through_the_graph() {
        let graph = graph_of(vec![
            item("//base:base", OutputKind::StaticLib),
            item("//base:base", OutputKind::StaticLib),
        ]);
        let group = ConfigGroup::new(&graph)
            .with_slot(ConfigKey::DEBUG, ItemId(0))
            .with_slot(ConfigKey::HOST_RELEASE, ItemId(1));

        assert_eq!(group.representative().name(), "base");
        assert!(group.get(ConfigKey::RELEASE).is_none());
        assert!(group.has_placement(Placement::Host));
        assert_eq!(
            group.iter().map(|(k, _)| k).collect::<Vec<_>>(),
            vec![ConfigKey::DEBUG, ConfigKey::HOST_RELEASE]
        );
        assert!(group.check_coherence().is_ok());
    }

    #[test]
    fn test_incoherent_groups_are_rejected() {
        let graph = graph_of(vec![
            item("//base:base", OutputKind::StaticLib),
            item("//base:base", OutputKind::SharedLib),
            item("//base:other", OutputKind::StaticLib),
        ]);

        let mixed_kinds = ConfigGroup::new(&graph)
            .with_slot(ConfigKey::DEBUG, ItemId(0))
            .with_slot(ConfigKey::RELEASE, ItemId(1));
        assert!(mixed_kinds.check_coherence().is_err());

        let mixed_names = ConfigGroup::new(&graph)
            .with_slot(ConfigKey::DEBUG, ItemId(0))
            .with_slot(ConfigKey::RELEASE, ItemId(2));
        assert!(mixed_names.check_coherence().is_err());
    }

    #[test]
    #[should_panic]
    fn test_representative_is_required() {
        let graph = graph_of(vec![item("//base:base", OutputKind::StaticLib)]);
        ConfigGroup::new(&graph)
            .with_slot(ConfigKey::RELEASE, ItemId(0))
            .representative();
    }
}
