//! Options that apply to the whole descriptor
use serde::*;

/// [`BuildAttribute`] - Stores the descriptor wide configuration
///
/// * `default_toolchain` - The name of the toolchain that drives the generation
/// of every *GYP* file, and that targets without an explicit `toolchain` belong
/// to. If isn't specified, the first declared toolchain is used
///
/// ```rust
/// use gypgen::config_file::build::BuildAttribute;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[build]
///     default_toolchain = 'clang'
///"#;
///
/// let config: BuildAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the gypgen toml file");
///
/// assert_eq!(config.default_toolchain.as_deref(), Some("clang"));
/// ```
#[derive(Deserialize, Debug, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct BuildAttribute {
    pub default_toolchain: Option<String>,
}
