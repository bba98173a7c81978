//! *GYP* entries for the targets that end up as compiled binaries: executables,
//! static and shared libraries and source sets

use color_eyre::Result;
use std::fmt::Write;

use super::{dispatch::TargetGenerator, indent::indent, path_output::PathOutput, write_list};
use crate::domain::{
    config_group::{ConfigGroup, ConfigKey, Placement, ProjectFlavor},
    source::SourceDir,
    target::{BuildItem, OutputKind},
    toolchain::Toolchain,
};

pub struct BinaryTargetWriter;

impl TargetGenerator for BinaryTargetWriter {
    fn render(
        &self,
        group: &ConfigGroup<'_>,
        _toolchain: &Toolchain,
        gyp_dir: &SourceDir,
        out: &mut String,
    ) -> Result<()> {
        let target = group.representative();
        let path_output = PathOutput::new(gyp_dir);
        let has_host = group.has_placement(Placement::Host);

        writeln!(indent(out, 4), "{{")?;
        writeln!(
            indent(out, 6),
            "'target_name': {},",
            PathOutput::quoted(target.name())
        )?;
        writeln!(indent(out, 6), "'type': '{}',", gyp_type(target.kind))?;
        if has_host {
            writeln!(indent(out, 6), "'toolsets': ['target', 'host'],")?;
        }

        write_configurations(group, Placement::Target, &path_output, 6, out)?;

        if has_host {
            writeln!(indent(out, 6), "'target_conditions': [")?;
            writeln!(indent(out, 8), "['_toolset == \"host\"', {{")?;
            write_configurations(group, Placement::Host, &path_output, 10, out)?;
            writeln!(indent(out, 8), "}}],")?;
            writeln!(indent(out, 6), "],")?;
        }

        let settings = &target.settings;
        write_list(
            out,
            6,
            "sources",
            settings.sources.iter().map(|file| path_output.file(file)),
        )?;
        write_list(
            out,
            6,
            "dependencies",
            settings.deps.iter().map(|dep| path_output.dependency(dep)),
        )?;

        indent(out, 4).push('}');
        Ok(())
    }
}

fn gyp_type(kind: OutputKind) -> &'static str {
    match kind {
        OutputKind::Executable => "executable",
        // GYP has no notion of source sets, they are linked as static libraries
        OutputKind::StaticLib | OutputKind::SourceSet => "static_library",
        OutputKind::SharedLib => "shared_library",
        _ => "none",
    }
}

/// Writes the `'configurations'` dictionary with the slots of `placement`.
/// Configurations follow the order of [`ConfigKey::RECOGNIZED`], so the output
/// doesn't depend on the order the slots were filled
fn write_configurations(
    group: &ConfigGroup<'_>,
    placement: Placement,
    path_output: &PathOutput,
    spaces: usize,
    out: &mut String,
) -> Result<()> {
    let configurations: Vec<(ConfigKey, Option<&BuildItem>, Option<&BuildItem>)> =
        ConfigKey::RECOGNIZED
            .iter()
            .map(|(key, _)| *key)
            .filter(|key| key.placement == placement && key.project == ProjectFlavor::Native)
            .map(|key| {
                (
                    key,
                    group.get(key),
                    group.get(key.with_project(ProjectFlavor::Ide)),
                )
            })
            .filter(|(_, native, ide)| native.is_some() || ide.is_some())
            .collect();

    if configurations.is_empty() {
        return Ok(());
    }

    writeln!(indent(out, spaces), "'configurations': {{")?;
    for (key, native, ide) in configurations {
        writeln!(
            indent(out, spaces + 2),
            "'{}': {{",
            key.gyp_configuration_name()
        )?;
        if let Some(item) = native {
            write_flags(item, path_output, spaces + 4, out)?;
        }
        if let Some(item) = ide {
            write_xcode_settings(item, path_output, spaces + 4, out)?;
        }
        writeln!(indent(out, spaces + 2), "}},")?;
    }
    writeln!(indent(out, spaces), "}},")?;

    Ok(())
}

fn write_flags(
    item: &BuildItem,
    path_output: &PathOutput,
    spaces: usize,
    out: &mut String,
) -> Result<()> {
    let settings = &item.settings;
    write_list(out, spaces, "defines", escaped(&settings.defines))?;
    write_list(
        out,
        spaces,
        "include_dirs",
        settings.include_dirs.iter().map(|dir| path_output.dir(dir)),
    )?;
    write_list(out, spaces, "cflags", escaped(&settings.cflags))?;
    write_list(out, spaces, "ldflags", escaped(&settings.ldflags))
}

/// The flags of the IDE project variant, written the way Xcode projects expect them
fn write_xcode_settings(
    item: &BuildItem,
    path_output: &PathOutput,
    spaces: usize,
    out: &mut String,
) -> Result<()> {
    let settings = &item.settings;
    if settings.defines.is_empty()
        && settings.include_dirs.is_empty()
        && settings.cflags.is_empty()
        && settings.ldflags.is_empty()
    {
        return Ok(());
    }

    writeln!(indent(out, spaces), "'xcode_settings': {{")?;
    write_list(
        out,
        spaces + 2,
        "GCC_PREPROCESSOR_DEFINITIONS",
        escaped(&settings.defines),
    )?;
    write_list(
        out,
        spaces + 2,
        "HEADER_SEARCH_PATHS",
        settings.include_dirs.iter().map(|dir| path_output.dir(dir)),
    )?;
    write_list(out, spaces + 2, "OTHER_CFLAGS", escaped(&settings.cflags))?;
    write_list(out, spaces + 2, "OTHER_LDFLAGS", escaped(&settings.ldflags))?;
    writeln!(indent(out, spaces), "}},")?;

    Ok(())
}

fn escaped(values: &[String]) -> impl Iterator<Item = String> + '_ {
    values.iter().map(|value| PathOutput::escape(value))
}
