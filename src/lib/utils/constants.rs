//! Constant value definitions to use across the whole program

pub const DESCRIPTOR_FILE_NAME: &str = "gypgen";
pub const DESCRIPTOR_FILE_EXT: &str = "toml";
pub const GYP_FILE_EXT: &str = "gyp";

/// Name given to the *GYP* file that lives at the source root, since the root
/// directory has no last component to name it after
pub const ROOT_GYP_FILE_STEM: &str = "root";

pub const DEFAULT_SCRIPT_INTERPRETER: &str = "python";

/// The fixed pieces of the *GYP* file envelope
pub mod gyp {
    pub const HEADER: &str = "# Generated by gypgen. Do not edit.\n\n";
    pub const OPEN: &str = "{\n";
    pub const SKIP_INCLUDES: &str = "  'skip_includes': 1,\n";
    pub const TARGETS_OPEN: &str = "  'targets': [\n";
    pub const ENTRY_SEPARATOR: &str = ",\n";
    pub const CLOSE: &str = "  ],\n}\n";
}

pub mod debug_messages {
    pub const MAPPING_DESCRIPTOR_TO_GRAPH: &str =
        "Proceding to map the descriptor file to the BuildGraph entity";
}

pub mod error_messages {
    pub const READ_DESCRIPTOR_FILE: &str = "Could not read the descriptor file";
    pub const PARSE_DESCRIPTOR_FILE: &str = "Could not parse the descriptor file";
    pub const NO_DESCRIPTOR_FILES: &str = "No descriptor files found for the project";
    pub const FAILURE_GATHERING_PROJECT_ROOT_ABS_PATH: &str =
        "An unexpected error happened while resolving the absolute path to the current project root";
    pub const GRAPH_MAPPING: &str = "Error building the build graph from the descriptor";
    pub const GROUPING: &str = "Error grouping the build items by configuration";
    pub const NO_TOOLCHAINS: &str = "The descriptor does not declare any toolchain";
    pub const UNKNOWN_TOOLCHAIN: &str = "Reference to an undeclared toolchain";
    pub const NOT_SOURCE_ABSOLUTE: &str = "Expected a source absolute path starting with '//'";
    pub const DUPLICATED_SLOT: &str = "The same label was declared twice for one configuration";
    pub const UNKNOWN_CONFIGURATION: &str = "Unknown configuration slot";
    pub const INCOHERENT_GROUP: &str =
        "A configuration group mixes build items with different names or output kinds";
    pub const UNSUPPORTED_OUTPUT_KIND: &str = "The GYP writer has no generator for the output kind";
    pub const FAILED_GYP_FILE_WRITE: &str = "Failed to write the GYP file";

    /// Internal invariant violations. Reaching any of them is a bug on the stage
    /// that produced the build graph or the configuration groups
    pub const MISSING_REPRESENTATIVE: &str =
        "A configuration group selected for writing has no representative (debug) build item";
    pub const UNHANDLED_OUTPUT_KIND: &str =
        "Reached an output kind that the GYP writer has no dispatch registered for. \
        This is a bug, so please, report it by opening an issue";
    pub const INDENT_OVERFLOW: &str = "Requested an indentation wider than the maximum allowed";
}
