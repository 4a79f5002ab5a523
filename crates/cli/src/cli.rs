use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "backoffice")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(flatten)]
    pub options: ConfigOptions,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the configuration and its collaborators come from
#[derive(Args, Debug, Clone)]
pub struct ConfigOptions {
    /// Backend configuration file (.json, .yaml, .yml or .toml)
    #[arg(short, long, global = true, default_value = "backoffice.yaml")]
    pub config: PathBuf,

    /// Model metadata file (.json, .yaml or .yml)
    #[arg(short, long, global = true, default_value = "metadata.yaml")]
    pub metadata: PathBuf,

    /// Directory holding template overrides (repeatable)
    #[arg(short, long = "templates", global = true)]
    pub templates: Vec<PathBuf>,

    /// Name of a custom controller models may reference (repeatable)
    #[arg(long = "controller", global = true)]
    pub controllers: Vec<String>,

    /// Also resolve text direction and generate the custom stylesheet
    #[arg(long, global = true)]
    pub design: bool,

    /// Locale used to pick the text direction
    #[arg(long, global = true)]
    pub locale: Option<String>,

    /// Persist the resolved configuration under this directory
    #[arg(long, global = true)]
    pub cache_dir: Option<PathBuf>,

    /// Resolve on every run and never touch the cache
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the configuration and print it as JSON
    #[command(visible_alias = "r")]
    Resolve {
        /// Dotted path to print instead of the whole tree (e.g. design.menu)
        #[arg(short, long)]
        path: Option<String>,

        /// Print JSON on a single line
        #[arg(long)]
        compact: bool,
    },
    /// Validate the configuration and print a summary
    #[command(visible_alias = "c")]
    Check {
        /// Check again whenever an input file changes
        #[arg(short, long)]
        watch: bool,
    },
    /// Print the resolved configuration of one model
    Model {
        /// Model name
        #[arg(required_unless_present = "class")]
        name: Option<String>,

        /// Find the model by the class it manages instead
        #[arg(long, conflicts_with = "name")]
        class: Option<String>,
    },
    /// Remove the cached resolved configuration
    ClearCache,
}
