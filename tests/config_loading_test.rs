mod common;

use backoffice::config::ConfigFormat;
use backoffice::{ColorScheme, RawConfig};
use common::resolver;
use std::fs;
use tempfile::TempDir;

const YAML: &str = r##"
site_name: ACME
locale: fr
design:
  brand_color: "#123456"
  color_scheme: light
models:
  Product:
    class: App\Product
    list:
      fields: [id, name, { property: price, label: Cost }]
"##;

const JSON: &str = r##"{
  "site_name": "ACME",
  "locale": "fr",
  "design": { "brand_color": "#123456", "color_scheme": "light" },
  "models": {
    "Product": {
      "class": "App\\Product",
      "list": { "fields": ["id", "name", { "property": "price", "label": "Cost" }] }
    }
  }
}"##;

const TOML: &str = r##"
site_name = "ACME"
locale = "fr"

[design]
brand_color = "#123456"
color_scheme = "light"

[models.Product]
class = 'App\Product'

[models.Product.list]
fields = ["id", "name", { property = "price", label = "Cost" }]
"##;

#[test]
fn test_every_format_resolves_to_the_same_tree() {
    let temp = TempDir::new().unwrap();
    let mut resolved = Vec::new();

    for (file, contents) in [("backoffice.yaml", YAML), ("backoffice.json", JSON), ("backoffice.toml", TOML)] {
        let path = temp.path().join(file);
        fs::write(&path, contents).unwrap();

        let tree = RawConfig::load_from_file(&path).unwrap().into_tree();
        resolved.push(resolver().resolve(tree).unwrap());
    }

    assert_eq!(resolved[0], resolved[1]);
    assert_eq!(resolved[0], resolved[2]);

    let config = &resolved[0];
    assert_eq!(config.design.brand_color, "#123456");
    assert_eq!(config.design.color_scheme, ColorScheme::Light);
    assert_eq!(config.models["Product"].list.fields["price"].label.as_deref(), Some("Cost"));
}

#[test]
fn test_format_follows_extension() {
    assert_eq!(ConfigFormat::from_path("a.json".as_ref()), ConfigFormat::Json);
    assert_eq!(ConfigFormat::from_path("a.toml".as_ref()), ConfigFormat::Toml);
    assert_eq!(ConfigFormat::from_path("a.yml".as_ref()), ConfigFormat::Yaml);
}

#[test]
fn test_malformed_document_is_a_config_error() {
    let err = RawConfig::parse("models: [", ConfigFormat::Yaml).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error: Failed to parse config"));
}

#[test]
fn test_entities_alias() {
    let raw = RawConfig::parse("entities:\n  Product: App\\Product\n", ConfigFormat::Yaml).unwrap();
    assert!(raw.models.contains_key("Product"));
}
