//! Terminal output of the commands

use anyhow::Result;
use backoffice_core::{BackendConfig, View};
use serde_json::Value;

pub fn print_json(value: &Value, compact: bool) -> Result<()> {
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{rendered}");
    Ok(())
}

/// One-screen summary of a resolved configuration
pub fn format_summary(config: &BackendConfig) -> String {
    let mut lines = vec![
        "✅ Configuration is valid".to_string(),
        format!("   Site: {}", config.site_name),
        format!(
            "   Models: {} (default: {})",
            config.models.len(),
            config.default_model_name.as_deref().unwrap_or("none")
        ),
    ];

    for (name, model) in &config.models {
        let views = [View::List, View::Show, View::Edit, View::New]
            .into_iter()
            .map(|view| {
                let config = model.view(view);
                format!(
                    "{view} {}/{}",
                    config.fields.values().filter(|f| !f.is_design_element()).count(),
                    config.actions.len()
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!("   - {name} ({}): {views}", model.class));
    }

    lines.push(format!("   Menu: {} items", config.design.menu.len()));
    lines.join("\n")
}

pub fn print_summary(config: &BackendConfig) {
    println!("{}", format_summary(config));
}

#[cfg(test)]
mod tests {
    use super::*;
    use backoffice_core::{ActionConfig, FieldConfig, ModelConfig};

    #[test]
    fn test_summary() {
        let mut model = ModelConfig::new("Product", "App\\Product");
        model
            .list
            .fields
            .insert("name".into(), FieldConfig::for_property("name"));
        model.list.actions.push(ActionConfig::new("edit"));

        let mut config = BackendConfig::default();
        config.default_model_name = Some("Product".into());
        config.models.insert("Product".into(), model);

        let summary = format_summary(&config);
        assert!(summary.contains("Models: 1 (default: Product)"));
        assert!(summary.contains("- Product (App\\Product): list 1/1, show 0/0, edit 0/0, new 0/0"));
        assert!(summary.ends_with("Menu: 0 items"));
    }
}
