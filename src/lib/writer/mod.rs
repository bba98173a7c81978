//! Writes the [`ConfigGroup`]s of the build graph as *GYP* files
//!
//! Every file is assembled in memory: the fixed envelope, the optional preamble
//! of the representative toolchain, and one entry per group rendered by the
//! generator that [`GeneratorRegistry`] routes it to. The finished buffer is
//! handed to a [`Persistence`] in a single write.

pub mod binary;
pub mod dispatch;
pub mod indent;
pub mod path_output;
pub mod persistence;
pub mod script;

use color_eyre::{eyre::Context, Result};
use std::fmt::Write;

use self::{dispatch::GeneratorRegistry, indent::indent, persistence::Persistence};
use crate::domain::{
    config_group::ConfigGroup,
    graph::BuildSettings,
    source::{SourceDir, SourceFile},
    toolchain::Toolchain,
};
use crate::utils::constants::{error_messages, gyp};

/// Writes `'<key>': [` followed by one quoted line per item and the closing
/// `],`. Nothing is written for an empty list. Items must come already escaped
pub(crate) fn write_list<I>(out: &mut String, spaces: usize, key: &str, items: I) -> Result<()>
where
    I: IntoIterator<Item = String>,
{
    let mut items = items.into_iter().peekable();
    if items.peek().is_none() {
        return Ok(());
    }

    writeln!(indent(out, spaces), "'{key}': [")?;
    for item in items {
        writeln!(indent(out, spaces + 2), "'{item}',")?;
    }
    writeln!(indent(out, spaces), "],")?;

    Ok(())
}

/// Builds the full content of a *GYP* file with the groups in `groups`, in the
/// same order they are given
pub fn assemble(
    groups: &[ConfigGroup<'_>],
    toolchain: &Toolchain,
    gyp_dir: &SourceDir,
    registry: &GeneratorRegistry,
) -> Result<String> {
    let mut file = String::new();
    file.push_str(gyp::HEADER);
    file.push_str(gyp::OPEN);

    if !toolchain.gyp_header.is_empty() {
        writeln!(file, "{}", toolchain.gyp_header)?;
    }

    file.push_str(gyp::SKIP_INCLUDES);
    file.push_str(gyp::TARGETS_OPEN);

    for group in groups {
        group.check_coherence()?;
        if registry.dispatch(group, toolchain, gyp_dir, &mut file)? {
            file.push_str(gyp::ENTRY_SEPARATOR);
        }
    }

    file.push_str(gyp::CLOSE);
    Ok(file)
}

/// Writes *GYP* files, one per call to [`GypWriter::write_file`]. Each call only
/// touches its own destination, so independent files can be written from
/// different threads sharing the same writer
pub struct GypWriter<'r, P: Persistence> {
    settings: &'r BuildSettings,
    registry: &'r GeneratorRegistry,
    persistence: P,
}

impl<'r, P: Persistence> GypWriter<'r, P> {
    pub fn new(settings: &'r BuildSettings, registry: &'r GeneratorRegistry, persistence: P) -> Self {
        Self {
            settings,
            registry,
            persistence,
        }
    }

    /// Writes `groups` to `gyp_file`. An empty `groups` is a no-op, the
    /// filesystem isn't touched at all
    pub fn write_file(
        &self,
        gyp_file: &SourceFile,
        groups: &[ConfigGroup<'_>],
        toolchain: &Toolchain,
    ) -> Result<()> {
        if groups.is_empty() {
            return Ok(());
        }

        let gyp_file_path = self.settings.full_path(gyp_file);
        log::debug!("Writing {} targets to {:?}", groups.len(), gyp_file_path);

        if let Some(parent) = gyp_file_path.parent() {
            self.persistence.ensure_directory(parent)?;
        }

        let contents = assemble(groups, toolchain, &gyp_file.dir(), self.registry)
            .with_context(|| format!("{}: {gyp_file}", error_messages::FAILED_GYP_FILE_WRITE))?;

        self.persistence
            .write(&gyp_file_path, contents.as_bytes())
            .with_context(|| format!("{}: {gyp_file}", error_messages::FAILED_GYP_FILE_WRITE))
    }
}
