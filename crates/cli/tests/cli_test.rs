use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CONFIG: &str = r#"
site_name: Shop admin
models:
  Product:
    class: App\Product
    list:
      fields: [id, name, price]
      sort: [name, asc]
  Category: App\Category
design:
  menu:
    - Product
    - { label: Catalog, children: [Category] }
"#;

const METADATA: &str = r#"
App\Product:
  identifier: [id]
  fields:
    - { name: id, type: integer }
    - { name: name, type: string }
    - { name: price, type: decimal }
App\Category:
  identifier: [id]
  fields:
    - { name: id, type: integer }
    - { name: title, type: string }
"#;

fn project(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("backoffice.yaml"), config).unwrap();
    fs::write(dir.path().join("metadata.yaml"), METADATA).unwrap();
    dir
}

fn backoffice(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("backoffice").unwrap();
    cmd.current_dir(dir);
    cmd
}

#[test]
fn test_check_prints_summary() {
    let dir = project(CONFIG);

    backoffice(dir.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("Models: 2 (default: Product)"))
        .stdout(predicate::str::contains("Menu: 2 items"));
}

#[test]
fn test_check_reports_invalid_configuration() {
    let dir = project(
        r#"
models:
  Product:
    class: App\Product
    list:
      sort: [name, sideways]
"#,
    );

    backoffice(dir.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("The backend configuration is invalid"))
        .stderr(predicate::str::contains("SIDEWAYS"));
}

#[test]
fn test_resolve_path() {
    let dir = project(CONFIG);

    backoffice(dir.path())
        .args(["resolve", "--path", "models.Product.list.sort", "--compact"])
        .assert()
        .success()
        .stdout(predicate::str::diff("{\"field\":\"name\",\"direction\":\"ASC\"}\n"));
}

#[test]
fn test_resolve_unknown_path() {
    let dir = project(CONFIG);

    backoffice(dir.path())
        .args(["resolve", "--path", "design.nothing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("design.nothing"));
}

#[test]
fn test_model_by_name_and_class() {
    let dir = project(CONFIG);

    backoffice(dir.path())
        .args(["model", "Category"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"class\": \"App\\\\Category\""));

    backoffice(dir.path())
        .args(["model", "--class", "App\\Product"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Product\""));

    backoffice(dir.path())
        .args(["model", "Order"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Undefined model \"Order\""));

    backoffice(dir.path())
        .args(["model", "--class", "App\\Order"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No model manages the class App\\Order"));
}

#[test]
fn test_file_cache_is_written_and_cleared() {
    let dir = project(CONFIG);
    let cache_dir = dir.path().join("cache");

    backoffice(dir.path())
        .args(["resolve", "--path", "site_name", "--cache-dir"])
        .arg(&cache_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Shop admin"));
    assert_eq!(fs::read_dir(&cache_dir).unwrap().count(), 1);

    backoffice(dir.path())
        .arg("clear-cache")
        .arg("--cache-dir")
        .arg(&cache_dir)
        .assert()
        .success();
    assert_eq!(fs::read_dir(&cache_dir).unwrap().count(), 0);
}

#[test]
fn test_missing_configuration_file() {
    let dir = TempDir::new().unwrap();

    backoffice(dir.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}
