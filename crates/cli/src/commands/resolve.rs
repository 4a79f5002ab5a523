use anyhow::Result;
use tracing::debug;

use crate::cli::ConfigOptions;
use crate::context::build_manager;
use crate::display::print_json;

pub fn resolve_command(options: &ConfigOptions, path: Option<&str>, compact: bool) -> Result<()> {
    debug!("Resolving configuration, path: {:?}", path);

    let accessor = build_manager(options)?.accessor()?;
    let value = accessor.get(path)?;
    print_json(value, compact)
}
