use std::path::Path;

use clap::Parser;
use color_eyre::Result;
use env_logger::Target;
use gypgen::{cli::input::CliArgs, utils::logger::config_logger, worker::run_gypgen};

/// The entry point for the binary generated
/// for the program
fn main() -> Result<()> {
    color_eyre::install()?;
    let cli_args = CliArgs::parse();
    config_logger(cli_args.verbose, Target::Stdout)?;
    log::info!("Launching a new gypgen program");
    run_gypgen(&cli_args, Path::new("."))?;
    log::info!("Tasks succesfully finished");

    Ok(())
}
