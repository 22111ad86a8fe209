//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::{AddressMode, BlendMode};
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_parse_error() {
    let result = load_from_path(Path::new("/tmp/nonexistent_rectkit_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, rectkit_common::ConfigError::ParseError(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[window]
title = "sprites"
width = 800

[renderer]
blend = "replace"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.window.title, "sprites");
    assert_eq!(config.window.width, 800);
    assert_eq!(config.renderer.blend, BlendMode::Replace);
    // Defaults preserved
    assert_eq!(config.window.height, 720);
    assert_eq!(config.atlas.address_mode, AddressMode::ClampToEdge);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, rectkit_common::ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_returns_parsed_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[renderer]\ninitial_instance_capacity = 0\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.renderer.initial_instance_capacity, 0);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rectkit").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.window.title, "rectkit");
    assert_eq!(config.renderer.clear_color, "#1a1a1a");
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::RectkitConfig;

    let config: RectkitConfig = toml::from_str(default_config_toml()).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("rectkit"));
        assert!(path_str.ends_with("config.toml"));
    }
}
