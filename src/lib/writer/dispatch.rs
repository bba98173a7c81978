//! Routes every [`ConfigGroup`] to the generator that knows how to render its
//! output kind.
//!
//! The routing is a table from [`OutputKind`] to a [`Dispatch`] strategy, built
//! once before writing any file. Supporting a new kind of target means
//! registering a generator for it, not touching [`GeneratorRegistry::dispatch`].

use color_eyre::Result;
use std::collections::HashMap;

use super::{binary::BinaryTargetWriter, script::ScriptTargetWriter};
use crate::domain::{
    config_group::ConfigGroup, source::SourceDir, target::OutputKind, toolchain::Toolchain,
};
use crate::utils::constants::error_messages;

/// Renders the *GYP* entry of one [`ConfigGroup`].
///
/// Implementors append exactly their own entry (the `{ ... }` dictionary) to
/// `out`. The separators between entries belong to the file writer.
pub trait TargetGenerator: Send + Sync {
    fn render(
        &self,
        group: &ConfigGroup<'_>,
        toolchain: &Toolchain,
        gyp_dir: &SourceDir,
        out: &mut String,
    ) -> Result<()>;
}

/// What to do with the groups of one output kind
pub enum Dispatch {
    Render(Box<dyn TargetGenerator>),
    /// Known kinds that this writer doesn't support yet. They produce no entry
    Skip,
}

pub struct GeneratorRegistry {
    table: HashMap<OutputKind, Dispatch>,
}

impl GeneratorRegistry {
    /// An empty registry, every kind dispatched through it is fatal until registered
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    pub fn register<G: TargetGenerator + 'static>(mut self, kind: OutputKind, generator: G) -> Self {
        self.table
            .insert(kind, Dispatch::Render(Box::new(generator)));
        self
    }

    pub fn skip(mut self, kind: OutputKind) -> Self {
        self.table.insert(kind, Dispatch::Skip);
        self
    }

    pub fn is_registered(&self, kind: OutputKind) -> bool {
        self.table.contains_key(&kind)
    }

    /// Renders `group` with the generator registered for the output kind of its
    /// representative item. Returns whether an entry was written
    ///
    /// # Panics
    /// If the group has no representative, or there's nothing registered for
    /// its output kind. Both mean that the build graph holds a state that the
    /// writer was never taught to handle
    pub fn dispatch(
        &self,
        group: &ConfigGroup<'_>,
        toolchain: &Toolchain,
        gyp_dir: &SourceDir,
        out: &mut String,
    ) -> Result<bool> {
        let representative = group.representative();

        match self.table.get(&representative.kind) {
            Some(Dispatch::Render(generator)) => {
                generator.render(group, toolchain, gyp_dir, out)?;
                Ok(true)
            }
            Some(Dispatch::Skip) => {
                log::debug!(
                    "{} targets aren't supported by the GYP writer, skipping {}",
                    representative.kind,
                    representative.label
                );
                Ok(false)
            }
            None => panic!(
                "{} ({}: {})",
                error_messages::UNHANDLED_OUTPUT_KIND,
                representative.label,
                representative.kind
            ),
        }
    }
}

impl Default for GeneratorRegistry {
    /// The routing table of the *GYP* writer
    fn default() -> Self {
        Self::new()
            .register(OutputKind::Custom, ScriptTargetWriter)
            .register(OutputKind::Executable, BinaryTargetWriter)
            .register(OutputKind::StaticLib, BinaryTargetWriter)
            .register(OutputKind::SharedLib, BinaryTargetWriter)
            .register(OutputKind::SourceSet, BinaryTargetWriter)
            // TODO: copy steps and groups have no GYP counterpart written yet
            .skip(OutputKind::CopyFiles)
            .skip(OutputKind::Group)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::config_group::tests::{graph_of, item};
    use crate::domain::config_group::ConfigKey;
    use crate::domain::target::ItemId;
    use std::sync::{Arc, Mutex};

    /// Writes `<tag>:<target name>` and records every call
    pub(crate) struct Recording {
        pub tag: &'static str,
        pub calls: Arc<Mutex<Vec<String>>>,
    }

    impl TargetGenerator for Recording {
        fn render(
            &self,
            group: &ConfigGroup<'_>,
            _toolchain: &Toolchain,
            _gyp_dir: &SourceDir,
            out: &mut String,
        ) -> Result<()> {
            let entry = format!("{}:{}", self.tag, group.representative().name());
            out.push_str(&format!("    '{entry}'"));
            self.calls.lock().unwrap().push(entry);
            Ok(())
        }
    }

    pub(crate) fn recording_registry(calls: &Arc<Mutex<Vec<String>>>) -> GeneratorRegistry {
        let script = || Recording {
            tag: "script",
            calls: Arc::clone(calls),
        };
        let binary = || Recording {
            tag: "binary",
            calls: Arc::clone(calls),
        };
        GeneratorRegistry::new()
            .register(OutputKind::Custom, script())
            .register(OutputKind::Executable, binary())
            .register(OutputKind::StaticLib, binary())
            .register(OutputKind::SharedLib, binary())
            .register(OutputKind::SourceSet, binary())
            .skip(OutputKind::CopyFiles)
            .skip(OutputKind::Group)
    }

    fn dispatch_kind(registry: &GeneratorRegistry, kind: OutputKind) -> (bool, String) {
        let graph = graph_of(vec![item("//foo:foo", kind)]);
        let group = ConfigGroup::new(&graph).with_slot(ConfigKey::DEBUG, ItemId(0));
        let mut out = String::new();
        let written = registry
            .dispatch(&group, &Toolchain::new("default"), &SourceDir::root(), &mut out)
            .unwrap();
        (written, out)
    }

    #[test]
    fn test_routes_every_kind_to_its_generator() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let registry = recording_registry(&calls);

        for kind in OutputKind::ALL {
            if kind == OutputKind::Unknown {
                continue;
            }
            calls.lock().unwrap().clear();
            let (written, out) = dispatch_kind(&registry, kind);
            let recorded = calls.lock().unwrap();

            match kind {
                OutputKind::Custom => assert_eq!(*recorded, vec!["script:foo"]),
                OutputKind::CopyFiles | OutputKind::Group => {
                    assert!(!written);
                    assert!(out.is_empty());
                    assert!(recorded.is_empty());
                }
                _ => assert_eq!(*recorded, vec!["binary:foo"]),
            }
        }
    }

    #[test]
    fn test_default_registry_knows_every_resolvable_kind() {
        let registry = GeneratorRegistry::default();
        for kind in OutputKind::ALL {
            assert_eq!(registry.is_registered(kind), kind != OutputKind::Unknown);
        }
    }

    #[test]
    fn test_default_registry_skips_copy_steps() {
        let (written, out) = dispatch_kind(&GeneratorRegistry::default(), OutputKind::CopyFiles);
        assert!(!written);
        assert!(out.is_empty());
    }

    #[test]
    #[should_panic(expected = "registered for. This is a bug")]
    fn test_unregistered_kind_is_fatal() {
        dispatch_kind(&GeneratorRegistry::default(), OutputKind::Unknown);
    }
}
