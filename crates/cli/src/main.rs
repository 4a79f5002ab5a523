use anyhow::Result;
use backoffice_cli::commands::{
    check_command, clear_cache_command, model_command, resolve_command,
};
use backoffice_cli::{Cli, Commands};
use clap::Parser;

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = &cli.options;

    match cli.command {
        Commands::Resolve { path, compact } => resolve_command(options, path.as_deref(), compact),
        Commands::Check { watch } => check_command(options, watch),
        Commands::Model { name, class } => {
            model_command(options, name.as_deref(), class.as_deref())
        }
        Commands::ClearCache => clear_cache_command(options),
    }
}
