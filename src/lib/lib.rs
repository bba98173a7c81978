pub mod cli;
pub mod config_file;
pub mod domain;
pub mod utils;
pub mod writer;

/// The entry point for the execution of the program.
///
/// This module existence is motivated to let us run
/// integration tests for the whole operations of the program
/// without having to do fancy work about checking the
/// data sent to stdout/stderr
pub mod worker {
    use std::{fs, path::Path, path::PathBuf, time::Instant};

    use crate::utils::constants::error_messages;
    use crate::{
        cli::input::{CliArgs, Command},
        config_file::{self, GypgenConfigFile},
        domain::{
            graph::BuildGraph,
            grouping::{self, GypFiles},
        },
        utils::{
            self,
            reader::{find_descriptor_files, ConfigFile},
        },
        writer::{dispatch::GeneratorRegistry, persistence::FsPersistence, GypWriter},
    };
    use color_eyre::{
        eyre::{eyre, Context, ContextCompat},
        Result,
    };

    /// The main work of the project. Runs the tasks
    /// inputted in the CLI
    pub fn run_gypgen(cli_args: &CliArgs, project_root: &Path) -> Result<()> {
        let abs_project_root = determine_absolute_path_of_the_project_root(cli_args, project_root)?;

        let descriptor_files: Vec<ConfigFile> =
            find_descriptor_files(&abs_project_root, &cli_args.match_files)?;

        // The routing table is the same for every descriptor
        let registry = GeneratorRegistry::default();

        for descriptor_file in descriptor_files {
            let descriptor_path = &descriptor_file.path;
            log::debug!(
                "Launching a gypgen work event for the descriptor file: {:?}",
                descriptor_path,
            );
            let raw_file = fs::read_to_string(descriptor_path).with_context(|| {
                format!(
                    "{}: {:?}",
                    error_messages::READ_DESCRIPTOR_FILE,
                    descriptor_path
                )
            })?;

            let config: GypgenConfigFile = config_file::gypgen_cfg_from_file(raw_file.as_str())
                .with_context(|| error_messages::PARSE_DESCRIPTOR_FILE)?;

            let graph = utils::reader::build_graph(config, &abs_project_root)
                .with_context(|| error_messages::GRAPH_MAPPING)?;

            let gyp_files =
                grouping::group_into_files(&graph).with_context(|| error_messages::GROUPING)?;

            do_main_work_based_on_cli_input(cli_args, &graph, &gyp_files, &registry)
                .with_context(|| format!("Failed to complete the job for: {:?}", descriptor_path))?;
        }

        Ok(())
    }

    fn do_main_work_based_on_cli_input(
        cli_args: &CliArgs,
        graph: &BuildGraph,
        gyp_files: &GypFiles<'_>,
        registry: &GeneratorRegistry,
    ) -> Result<()> {
        match cli_args.command {
            Command::Gen => write_gyp_files(graph, gyp_files, registry),
            Command::Check => {
                for (gyp_file, groups) in gyp_files {
                    for group in groups {
                        group
                            .check_coherence()
                            .with_context(|| format!("On {gyp_file}"))?;

                        let representative = group.representative();
                        if !registry.is_registered(representative.kind) {
                            return Err(eyre!(
                                "{}: {} ({}, on {gyp_file})",
                                error_messages::UNSUPPORTED_OUTPUT_KIND,
                                representative.kind,
                                representative.label
                            ));
                        }
                    }
                }
                log::info!(
                    "{} build items grouped into {} GYP files, all of them coherent",
                    graph.len(),
                    gyp_files.len()
                );
                Ok(())
            }
            Command::List => {
                for (gyp_file, groups) in gyp_files {
                    let names: Vec<&str> = groups
                        .iter()
                        .map(|group| group.representative().name())
                        .collect();
                    log::info!("{gyp_file}: {}", names.join(", "));
                }
                Ok(())
            }
        }
    }

    fn write_gyp_files(
        graph: &BuildGraph,
        gyp_files: &GypFiles<'_>,
        registry: &GeneratorRegistry,
    ) -> Result<()> {
        let write_ts = Instant::now();

        let toolchain = graph
            .default_toolchain()
            .with_context(|| error_messages::NO_TOOLCHAINS)?;
        let writer = GypWriter::new(&graph.settings, registry, FsPersistence);

        for (gyp_file, groups) in gyp_files {
            writer.write_file(gyp_file, groups, toolchain)?;
        }

        log::info!(
            "Wrote {} GYP files in {:?} ms",
            gyp_files.len(),
            write_ts.elapsed().as_millis()
        );
        Ok(())
    }

    /// Resolves the full path of the location of the project's root on the fs. If the `--root`
    /// [`CliArgs`] arg is present, it will be used as the project root path, otherwise, we will
    /// assume that the project root is exactly in the same directory from where the *gypgen*
    /// binary was invoked by the user
    fn determine_absolute_path_of_the_project_root(
        cli_args: &CliArgs,
        project_root: &Path,
    ) -> Result<PathBuf> {
        let project_root = cli_args
            .root
            .as_deref()
            .map(|root| project_root.join(root))
            .unwrap_or_else(|| project_root.to_path_buf());

        utils::fs::get_project_root_absolute_path(&project_root)
            .with_context(|| error_messages::FAILURE_GATHERING_PROJECT_ROOT_ABS_PATH)
    }

}
