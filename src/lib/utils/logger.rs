use color_eyre::{
    eyre::{eyre, Context},
    Result,
};
use env_logger::{Builder, Target};
use log::LevelFilter;

/// [`config_logger`] The configuration for `env_logger`
pub fn config_logger(verbose_level: u8, target: Target) -> Result<()> {
    let mut builder = Builder::from_default_env();
    configure(&mut builder, verbose_level, target)?;

    builder
        .try_init()
        .with_context(|| "gypgen wasn't unable to set up the logger")
}

/// Applies the gypgen line format and the level filter selected by the
/// number of `-v` flags
#[allow(clippy::comparison_chain)]
fn configure(builder: &mut Builder, verbose_level: u8, target: Target) -> Result<()> {
    builder
        .target(target)
        .format_indent(Some(4))
        .format_module_path(false)
        .format_timestamp_millis();

    if verbose_level == 1 {
        builder.filter(None, LevelFilter::Debug);
    } else if verbose_level > 1 {
        return Err(eyre!("gypgen maximum allowed verbosity level is: '-v'"));
    } else {
        builder.filter(None, LevelFilter::Info);
    }
    Ok(())
}
