//! The toolchains that the build items were resolved with
use serde::*;

/// [`ToolchainAttribute`] - The toolchain settings that end up on the *GYP* files
///
/// * `gyp_header` - Literal text placed at the top of every *GYP* file, right
/// after the opening brace
/// * `script_interpreter` - The program that runs the scripts of custom targets.
/// Defaults to `python`
///
/// ### Tests
///
/// ```rust
/// use gypgen::config_file::toolchain::ToolchainAttribute;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[toolchains.default]
///     gyp_header = "  'variables': { 'chromium_code': 1 },"
///     script_interpreter = 'python3'
///"#;
///
/// let config: ToolchainAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the gypgen toml file");
///
/// assert_eq!(
///     config.gyp_header.as_deref(),
///     Some("  'variables': { 'chromium_code': 1 },")
/// );
/// assert_eq!(config.script_interpreter.as_deref(), Some("python3"));
/// ```
///
/// > Note: TOML table are toml commented (#) to allow us to parse
/// the inner attributes as the direct type that they belongs to.
#[derive(Deserialize, Debug, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ToolchainAttribute {
    pub gyp_header: Option<String>,
    pub script_interpreter: Option<String>,
}
