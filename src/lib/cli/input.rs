use clap::{Parser, Subcommand};

/// [`CliArgs`] is the command line arguments parser
///
/// #Test
/// ```rust
/// use clap::Parser;
/// use gypgen::cli::input::{CliArgs, Command};
///
/// let parser = CliArgs::parse_from(["", "-v", "gen"]);
/// assert_eq!(1, parser.verbose);
/// assert_eq!(parser.command, Command::Gen);
///
/// let parser = CliArgs::parse_from(["", "--root", "chromium", "--match-files", "host", "list"]);
/// assert_eq!(parser.root.as_deref(), Some("chromium"));
/// assert_eq!(parser.match_files.as_deref(), Some("host"));
/// assert_eq!(parser.command, Command::List);
/// ```
#[derive(Parser, Debug, Default)]
#[command(name = "gypgen")]
#[command(author = "Zero Day Code")]
#[command(version = "0.1.0")]
#[command(
    about = "gypgen writes GYP build descriptors out of an already resolved build graph",
    long_about = "gypgen reads gypgen*.toml descriptors of a resolved build graph, merges \
    the per configuration variants of every target and writes one GYP file per directory"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, action = clap::ArgAction::Count, help="gypgen maximum allowed verbosity level is: '-v'")]
    pub verbose: u8,

    #[arg(
        short,
        long,
        help = "Allows the user to specify the project's root, where the descriptors and the generated GYP files live"
    )]
    pub root: Option<String>,

    #[arg(
        short,
        long,
        help = "Only the descriptor files whose name contains the given value are processed"
    )]
    pub match_files: Option<String>,
}

/// [`Command`] -  The core enum commands
#[derive(Subcommand, Debug, PartialEq, Eq, Default)]
pub enum Command {
    /// Writes the GYP files of every descriptor found
    #[default]
    Gen,
    /// Validates the descriptors and their configuration groups without writing anything
    Check,
    /// Reports the GYP files that would be written, and the targets of each one
    List,
}
