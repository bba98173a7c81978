//! Merges the build items of the graph into [`ConfigGroup`]s and distributes the
//! groups into the *GYP* files where they are going to be written

use color_eyre::{eyre::eyre, Result};
use indexmap::IndexMap;

use super::{
    config_group::ConfigGroup,
    graph::BuildGraph,
    source::{Label, SourceFile},
};
use crate::utils::constants::error_messages;

/// The groups that will be written to the same *GYP* file, in declaration order
pub type GypFiles<'a> = IndexMap<SourceFile, Vec<ConfigGroup<'a>>>;

/// Groups the items of `graph` by label, filling the configuration slot that
/// each item was resolved for. A label keeps the position of its first
/// appearance, both across files and inside of its file
pub fn group_into_files(graph: &BuildGraph) -> Result<GypFiles<'_>> {
    let mut by_label: IndexMap<&Label, ConfigGroup<'_>> = IndexMap::new();

    for (id, item) in graph.items() {
        let key = item.config;
        let group = by_label
            .entry(&item.label)
            .or_insert_with(|| ConfigGroup::new(graph));

        if group.insert(key, id).is_some() {
            return Err(eyre!(
                "{}: {} on '{key}'",
                error_messages::DUPLICATED_SLOT,
                item.label
            ));
        }
    }

    let mut files: GypFiles<'_> = IndexMap::new();
    for (label, group) in by_label {
        if group.debug().is_none() {
            log::debug!("Skipping {label}, since it has no debug configuration to represent it");
            continue;
        }
        files.entry(label.gyp_file()).or_default().push(group);
    }

    log::debug!(
        "Grouped {} build items into {} GYP files",
        graph.len(),
        files.len()
    );

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config_group::tests::{graph_of, item_for};
    use crate::domain::config_group::ConfigKey;
    use crate::domain::target::OutputKind;
    use color_eyre::Result;

    #[test]
    fn test_groups_by_label_and_file_preserving_order() -> Result<()> {
        let graph = graph_of(vec![
            item_for("//base:base", OutputKind::StaticLib, ConfigKey::DEBUG),
            item_for("//net:net", OutputKind::SharedLib, ConfigKey::DEBUG),
            item_for("//base:base_unittests", OutputKind::Executable, ConfigKey::DEBUG),
            item_for("//base:base", OutputKind::StaticLib, ConfigKey::RELEASE),
            item_for("//net:net", OutputKind::SharedLib, ConfigKey::HOST_DEBUG),
        ]);

        let files = group_into_files(&graph)?;

        let names: Vec<&str> = files.keys().map(|f| f.value()).collect();
        assert_eq!(names, vec!["//base/base.gyp", "//net/net.gyp"]);

        let base = &files[0];
        assert_eq!(base.len(), 2);
        assert_eq!(base[0].representative().name(), "base");
        assert!(base[0].get(ConfigKey::RELEASE).is_some());
        assert_eq!(base[1].representative().name(), "base_unittests");

        let net = &files[1];
        assert!(net[0].get(ConfigKey::HOST_DEBUG).is_some());
        Ok(())
    }

    #[test]
    fn test_duplicated_slot_is_an_error() {
        let graph = graph_of(vec![
            item_for("//base:base", OutputKind::StaticLib, ConfigKey::DEBUG),
            item_for("//base:base", OutputKind::StaticLib, ConfigKey::DEBUG),
        ]);
        assert!(group_into_files(&graph).is_err());
    }

    #[test]
    fn test_groups_without_debug_are_left_out() -> Result<()> {
        let graph = graph_of(vec![item_for(
            "//tools:gen",
            OutputKind::Custom,
            ConfigKey::HOST_RELEASE,
        )]);
        assert!(group_into_files(&graph)?.is_empty());
        Ok(())
    }
}
