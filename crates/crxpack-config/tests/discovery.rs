//! Tests for layout file discovery and loading
//!
//! Only `crxpack.toml` and the `crxpack` field of package.json are supported.

use crxpack_config::{ConfigDiscovery, ConfigError, ConfigGenerator, FixedEntry, Mode};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn discovers_crxpack_toml() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("crxpack.toml"),
        r#"
output_dir = "dist"

[[entries]]
entry = "./src/popup.ts"
bundle = "popup.js"
"#,
    )
    .unwrap();

    let discovery = ConfigDiscovery::new(dir.path());
    let found = discovery.find().unwrap();
    assert_eq!(found.file_name().unwrap(), "crxpack.toml");

    let layout = discovery.load().unwrap();
    assert_eq!(layout.output_dir, PathBuf::from("dist"));
    assert_eq!(layout.entries, vec![FixedEntry::new("./src/popup.ts", "popup.js")]);
}

#[test]
fn discovers_package_json() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{
  "name": "extension",
  "crxpack": {
    "custom_dir": "ts/Userscripts"
  }
}"#,
    )
    .unwrap();

    let discovery = ConfigDiscovery::new(dir.path());
    assert_eq!(discovery.find().unwrap().file_name().unwrap(), "package.json");

    let layout = discovery.load().unwrap();
    assert_eq!(layout.custom_dir, PathBuf::from("ts/Userscripts"));
    assert_eq!(layout.entries.len(), 4);
}

#[test]
fn toml_takes_precedence_over_package_json() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("crxpack.toml"), "loader = \"toml-loader\"\n").unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{ "crxpack": { "loader": "pkg-loader" } }"#,
    )
    .unwrap();

    let layout = ConfigDiscovery::new(dir.path()).load().unwrap();
    assert_eq!(layout.loader, "toml-loader");
}

#[test]
fn null_package_json_field_is_not_a_config() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("package.json"), r#"{ "crxpack": null }"#).unwrap();

    let result = ConfigDiscovery::new(dir.path()).load();
    assert!(matches!(result, Err(ConfigError::NotFound)));
}

#[test]
fn relative_root_resolves_against_discovery_dir() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("extension/ts/Custom")).unwrap();
    fs::write(dir.path().join("extension/ts/Custom/X.ts"), "").unwrap();
    fs::write(dir.path().join("crxpack.toml"), "root = \"extension\"\n").unwrap();

    let layout = ConfigDiscovery::new(dir.path()).load().unwrap();
    assert_eq!(layout.root, dir.path().join("extension"));

    let targets = ConfigGenerator::new(layout)
        .generate(None, Mode::Production)
        .unwrap();
    assert_eq!(targets.len(), 5);
    assert_eq!(targets[4].output_name, "custom/X.js");
}
