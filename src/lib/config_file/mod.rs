//! root file for the crate where the datastructures that holds the TOML
//! parsed data of a resolved build graph descriptor lives.
pub mod build;
pub mod target;
pub mod toolchain;

use indexmap::IndexMap;
use serde::Deserialize;

use self::{build::BuildAttribute, target::TargetAttribute, toolchain::ToolchainAttribute};

/// ```rust
/// use gypgen::config_file::{self, GypgenConfigFile};
/// use gypgen::domain::{config_group::ConfigKey, target::OutputKind};
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     [build]
///     default_toolchain = 'clang'
///
///     [toolchains.clang]
///     gyp_header = "  'variables': { 'chromium_code': 1 },"
///
///     [toolchains.clang_host]
///
///     [[targets]]
///     label = '//base:base'
///     kind = 'static_library'
///     sources = [ '//base/a.cc' ]
///
///     [[targets]]
///     label = '//base:base'
///     kind = 'static_library'
///     configuration = 'host-debug'
///     toolchain = 'clang_host'
///     sources = [ '//base/a.cc' ]
///
///     [[targets]]
///     label = '//tools:gen'
///     kind = 'custom'
///     script = '//tools/gen.py'
/// "#;
///
/// let config: GypgenConfigFile = config_file::gypgen_cfg_from_file(CONFIG_FILE_MOCK)
///     .expect("A failure happened parsing the gypgen toml file");
///
/// let build = config.build.as_ref().expect("Missing [build] table");
/// assert_eq!(build.default_toolchain.as_deref(), Some("clang"));
///
/// let names: Vec<&str> = config.toolchains.keys().map(String::as_str).collect();
/// assert_eq!(names, vec!["clang", "clang_host"]);
/// assert!(config.toolchains["clang_host"].gyp_header.is_none());
///
/// assert_eq!(config.targets.len(), 3);
/// assert_eq!(config.targets[0].configuration, None);
/// assert_eq!(config.targets[1].configuration, Some(ConfigKey::HOST_DEBUG));
/// assert_eq!(config.targets[2].kind, OutputKind::Custom);
/// assert_eq!(config.targets[2].script.as_deref(), Some("//tools/gen.py"));
/// ```
/// The [`GypgenConfigFile`] is the type that holds
/// the whole hierarchy of a descriptor file attributes
/// and properties
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct GypgenConfigFile {
    pub build: Option<BuildAttribute>,
    #[serde(default)]
    pub toolchains: IndexMap<String, ToolchainAttribute>,
    #[serde(default)]
    pub targets: Vec<TargetAttribute>,
}

pub fn gypgen_cfg_from_file(cfg: &str) -> Result<GypgenConfigFile, toml::de::Error> {
    toml::from_str(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_configuration_is_rejected() {
        let cfg = r#"
            [toolchains.default]

            [[targets]]
            label = '//base:base'
            kind = 'executable'
            configuration = 'debug-32'
        "#;
        assert!(gypgen_cfg_from_file(cfg).is_err());
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let cfg = r#"
            [[targets]]
            label = '//base:base'
            kind = 'executable'
            link_flags = [ '-lm' ]
        "#;
        assert!(gypgen_cfg_from_file(cfg).is_err());
    }
}
