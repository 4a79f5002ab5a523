use anyhow::{Result, bail};

use crate::cli::ConfigOptions;
use crate::context::build_manager;
use crate::display::print_json;

pub fn model_command(
    options: &ConfigOptions,
    name: Option<&str>,
    class: Option<&str>,
) -> Result<()> {
    let accessor = build_manager(options)?.accessor()?;

    let model = match (name, class) {
        (_, Some(class)) => match accessor.model_config_by_class(class) {
            Some(model) => model,
            None => bail!("No model manages the class {class}"),
        },
        (Some(name), None) => accessor.model_config(name)?,
        (None, None) => bail!("Either a model name or --class is required"),
    };

    print_json(&serde_json::to_value(model)?, false)
}
