use anyhow::Result;

use crate::cli::ConfigOptions;
use crate::context::cache_store;

pub fn clear_cache_command(options: &ConfigOptions) -> Result<()> {
    if options.cache_dir.is_none() {
        println!("No cache directory configured, nothing to clear");
        return Ok(());
    }

    cache_store(options).clear()?;
    println!("✅ Cache cleared");
    Ok(())
}
