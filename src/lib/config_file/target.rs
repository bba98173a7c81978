//! Type for holding the resolved build items

use serde::Deserialize;

use crate::domain::{config_group::ConfigKey, target::OutputKind};

/// [`TargetAttribute`] - One build item, resolved for one configuration
/// * `label` - The `//dir:name` identifier of the target
/// * `kind` - Determines which type of byproduct will be generated (binary, library...)
/// * `configuration` - The configuration slot the item was resolved for.
/// Defaults to `debug`
/// * `toolchain` - The toolchain it was resolved with. Defaults to the default one
/// * the rest are the settings of the target, all of them optional
///
/// ### Tests
///
/// ```rust
/// use gypgen::config_file::target::TargetAttribute;
/// use gypgen::domain::{config_group::ConfigKey, target::OutputKind};
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[[targets]]
///     label = '//base:base'
///     kind = 'static_library'
///     configuration = 'host-release'
///     sources = [ '//base/a.cc' ]
///     cflags = [ '-Wall' ]
/// "#;
///
/// let config: TargetAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the gypgen toml file");
///
/// assert_eq!(config.label, "//base:base");
/// assert_eq!(config.kind, OutputKind::StaticLib);
/// assert_eq!(config.configuration, Some(ConfigKey::HOST_RELEASE));
/// assert_eq!(config.sources, Some(vec!["//base/a.cc".to_owned()]));
/// assert_eq!(config.cflags, Some(vec!["-Wall".to_owned()]));
/// assert!(config.script.is_none());
/// ```
/// > Note: TOML table are toml commented (#) to allow us to parse
/// the inner attributes as the direct type that they belongs to.
///
/// For a test over a real example, please look at the
/// [`crate::config_file::GypgenConfigFile`] doc-test
#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetAttribute {
    pub label: String,
    pub kind: OutputKind,
    pub configuration: Option<ConfigKey>,
    pub toolchain: Option<String>,
    pub sources: Option<Vec<String>>,
    pub deps: Option<Vec<String>>,
    pub defines: Option<Vec<String>>,
    pub include_dirs: Option<Vec<String>>,
    pub cflags: Option<Vec<String>>,
    pub ldflags: Option<Vec<String>>,
    pub script: Option<String>,
    pub args: Option<Vec<String>>,
    pub inputs: Option<Vec<String>>,
    pub outputs: Option<Vec<String>>,
}
