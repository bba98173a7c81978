use crate::{
    config_file::{target::TargetAttribute, toolchain::ToolchainAttribute, GypgenConfigFile},
    domain::{
        config_group::ConfigKey,
        graph::{BuildGraph, BuildSettings},
        source::{Label, SourceDir, SourceFile},
        target::{BuildItem, TargetSettings},
        toolchain::Toolchain,
    },
    utils::constants::{
        debug_messages, error_messages, DESCRIPTOR_FILE_EXT, DESCRIPTOR_FILE_NAME,
        DEFAULT_SCRIPT_INTERPRETER,
    },
};
use color_eyre::{
    eyre::{eyre, Context, ContextCompat},
    Result,
};
use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Details about a found descriptor file on the project
///
/// This is just a descriptor file with a valid name found
/// at a valid path in some subdirectory
#[derive(Debug)]
pub struct ConfigFile {
    pub dir_entry: DirEntry,
    pub path: PathBuf,
}

/// Checks for the existence of the `gypgen<any>.toml` descriptor files
/// present under `base_path`, and returns a collection of the ones found.
///
/// *filename_match* - When present, only the files whose name contains it
/// are taken into account
///
/// This function fails if there's no descriptor file
/// (or isn't present in any directory of the project)
pub fn find_descriptor_files(
    base_path: &Path,
    filename_match: &Option<String>,
) -> Result<Vec<ConfigFile>> {
    log::debug!("Searching for gypgen descriptor files...");
    let mut files = vec![];

    for e in WalkDir::new(base_path)
        .max_depth(2)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let Some(filename) = e.file_name().to_str() else {
            continue;
        };
        let file_match = filename_match.as_deref().unwrap_or(filename);

        if e.file_type().is_file()
            && filename.starts_with(DESCRIPTOR_FILE_NAME)
            && filename.ends_with(&format!(".{DESCRIPTOR_FILE_EXT}"))
            && filename.contains(file_match)
        {
            files.push(ConfigFile {
                path: e.path().to_path_buf(),
                dir_entry: e,
            })
        }
    }

    if files.is_empty() {
        Err(eyre!(error_messages::NO_DESCRIPTOR_FILES))
    } else {
        Ok(files)
    }
}

/// Maps the descriptor into the read only [`BuildGraph`], keeping the declaration
/// order of the targets
pub fn build_graph(config: GypgenConfigFile, absolute_project_root: &Path) -> Result<BuildGraph> {
    log::debug!("{}", debug_messages::MAPPING_DESCRIPTOR_TO_GRAPH);

    let toolchains = assemble_toolchains(config.toolchains);
    let default_toolchain = match config.build.and_then(|build| build.default_toolchain) {
        Some(name) if toolchains.contains_key(&name) => name,
        Some(name) => return Err(eyre!("{}: {name}", error_messages::UNKNOWN_TOOLCHAIN)),
        None => toolchains
            .keys()
            .next()
            .cloned()
            .with_context(|| error_messages::NO_TOOLCHAINS)?,
    };

    let items = config
        .targets
        .into_iter()
        .map(|target| assemble_build_item(target, &toolchains, &default_toolchain))
        .collect::<Result<Vec<BuildItem>>>()?;

    Ok(BuildGraph::new(
        BuildSettings::new(absolute_project_root),
        toolchains,
        default_toolchain,
        items,
    ))
}

fn assemble_toolchains(config: IndexMap<String, ToolchainAttribute>) -> IndexMap<String, Toolchain> {
    config
        .into_iter()
        .map(|(name, attr)| {
            let toolchain = Toolchain {
                name: name.clone(),
                gyp_header: attr.gyp_header.unwrap_or_default(),
                script_interpreter: attr
                    .script_interpreter
                    .unwrap_or_else(|| DEFAULT_SCRIPT_INTERPRETER.to_owned()),
            };
            (name, toolchain)
        })
        .collect()
}

fn assemble_build_item(
    config: TargetAttribute,
    toolchains: &IndexMap<String, Toolchain>,
    default_toolchain: &str,
) -> Result<BuildItem> {
    let label = Label::parse(&config.label)?;

    let toolchain = config
        .toolchain
        .unwrap_or_else(|| default_toolchain.to_owned());
    if !toolchains.contains_key(&toolchain) {
        return Err(eyre!(
            "{}: {toolchain} (on {label})",
            error_messages::UNKNOWN_TOOLCHAIN
        ));
    }

    let settings = TargetSettings {
        sources: map_all(config.sources, |s| SourceFile::new(&s))?,
        deps: map_all(config.deps, |d| Label::parse(&d))?,
        defines: config.defines.unwrap_or_default(),
        include_dirs: map_all(config.include_dirs, |d| SourceDir::new(&d))?,
        cflags: config.cflags.unwrap_or_default(),
        ldflags: config.ldflags.unwrap_or_default(),
        script: config
            .script
            .map(|script| SourceFile::new(&script))
            .transpose()?,
        args: config.args.unwrap_or_default(),
        inputs: map_all(config.inputs, |s| SourceFile::new(&s))?,
        outputs: map_all(config.outputs, |s| SourceFile::new(&s))?,
    };

    Ok(BuildItem {
        label,
        kind: config.kind,
        config: config.configuration.unwrap_or(ConfigKey::DEBUG),
        toolchain,
        settings,
    })
}

fn map_all<T, F>(values: Option<Vec<String>>, f: F) -> Result<Vec<T>>
where
    F: Fn(String) -> Result<T>,
{
    values
        .unwrap_or_default()
        .into_iter()
        .map(f)
        .collect::<Result<Vec<T>>>()
        .with_context(|| error_messages::GRAPH_MAPPING)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config_file;
    use crate::domain::target::OutputKind;
    use crate::utils::test::in_temp_dir;
    use color_eyre::Result;

    const DESCRIPTOR: &str = r#"
        [toolchains.default]
        gyp_header = "  'variables': {},"

        [toolchains.host]
        script_interpreter = 'python3'

        [[targets]]
        label = '//base'
        kind = 'static_library'
        sources = [ '//base/a.cc' ]
        include_dirs = [ '//base/include' ]

        [[targets]]
        label = '//base'
        kind = 'static_library'
        configuration = 'host-debug'
        toolchain = 'host'
        deps = [ '//third_party/zlib' ]
    "#;

    #[test]
    fn test_build_graph_from_descriptor() -> Result<()> {
        let config = config_file::gypgen_cfg_from_file(DESCRIPTOR)?;
        let graph = build_graph(config, Path::new("/project"))?;

        assert_eq!(graph.len(), 2);
        assert_eq!(graph.default_toolchain, "default");
        let default = graph.default_toolchain().unwrap();
        assert_eq!(default.gyp_header, "  'variables': {},");
        assert_eq!(default.script_interpreter, DEFAULT_SCRIPT_INTERPRETER);
        assert_eq!(graph.toolchains["host"].script_interpreter, "python3");

        let items: Vec<&BuildItem> = graph.items().map(|(_, item)| item).collect();
        assert_eq!(items[0].name(), "base");
        assert_eq!(items[0].kind, OutputKind::StaticLib);
        assert_eq!(items[0].config, ConfigKey::DEBUG);
        assert_eq!(items[0].toolchain, "default");
        assert_eq!(items[0].settings.include_dirs[0].value(), "//base/include/");
        assert_eq!(items[1].config, ConfigKey::HOST_DEBUG);
        assert_eq!(items[1].toolchain, "host");
        assert_eq!(items[1].settings.deps[0].name, "zlib");

        assert_eq!(
            graph.settings.full_path(&SourceFile::new("//base/base.gyp")?),
            Path::new("/project/base/base.gyp")
        );
        Ok(())
    }

    #[test]
    fn test_mapping_errors() -> Result<()> {
        let no_toolchains = "[[targets]]\nlabel = '//a'\nkind = 'exe'\n";
        let unknown_toolchain =
            "[toolchains.a]\n[[targets]]\nlabel = '//a'\nkind = 'exe'\ntoolchain = 'b'\n";
        let unknown_default = "[build]\ndefault_toolchain = 'b'\n[toolchains.a]\n";
        let relative_source =
            "[toolchains.a]\n[[targets]]\nlabel = '//a'\nkind = 'exe'\nsources = ['a.cc']\n";

        for descriptor in [
            no_toolchains,
            unknown_toolchain,
            unknown_default,
            relative_source,
        ] {
            let config = config_file::gypgen_cfg_from_file(descriptor)?;
            assert!(build_graph(config, Path::new(".")).is_err());
        }
        Ok(())
    }

    #[test]
    fn test_unknown_kind_never_reaches_the_graph() {
        let descriptor = "[toolchains.a]\n[[targets]]\nlabel = '//a'\nkind = 'unknown'\n";
        assert!(config_file::gypgen_cfg_from_file(descriptor).is_err());
    }

    #[test]
    fn test_find_descriptor_files() -> Result<()> {
        in_temp_dir(|root| {
            std::fs::write(root.join("gypgen.toml"), "")?;
            std::fs::create_dir(root.join("sub"))?;
            std::fs::write(root.join("sub").join("gypgen_host.toml"), "")?;
            std::fs::write(root.join("other.toml"), "")?;

            let all = find_descriptor_files(root, &None)?;
            assert_eq!(all.len(), 2);

            let host = find_descriptor_files(root, &Some("host".to_owned()))?;
            assert_eq!(host.len(), 1);
            assert!(host[0].path.ends_with("sub/gypgen_host.toml"));

            assert!(find_descriptor_files(root, &Some("none".to_owned())).is_err());
            Ok(())
        })
    }
}
