//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use serial_test::serial;
use std::path::PathBuf;
use std::time::Duration;
use wire3d_terminal::cli::Cli;
use wire3d_terminal::config::{AppConfig, ConfigError};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
#[serial]
fn test_file_config_loading() {
    let config = AppConfig::load_from(Some(fixture("two_shapes.toml").as_path())).unwrap();
    assert_eq!(config.animation.tick_ms, 25);
    assert_eq!(config.scene.meshes.len(), 2);
    assert_eq!(config.scene.meshes[1].shear, Some([0.5, 0.0]));
    assert_eq!(config.logging.level, "debug");

    let animation = config.animation_config().unwrap();
    assert_eq!(animation.total_ticks(), 160);
    assert_eq!(animation.highlight_every(), 40);
    assert_eq!(animation.spins.len(), 1);

    let meshes = config.meshes().unwrap();
    assert_eq!(meshes[0].bounds_magnitude(), 30.0);
    assert_eq!(meshes[1].edges().len(), 6);
    assert_eq!(meshes[0].position(), wire3d_core::Vec3::zeros());
    assert_eq!(meshes[1].position(), wire3d_core::Vec3::new(0.0, 30.0, 0.0));
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("WIRE3D_ANIMATION__TICK_MS", "10");
    let config = AppConfig::load_from(Some(fixture("two_shapes.toml").as_path())).unwrap();
    std::env::remove_var("WIRE3D_ANIMATION__TICK_MS");

    assert_eq!(config.animation.tick_ms, 10);
    assert_eq!(
        config.animation_config().unwrap().tick,
        Duration::from_millis(10)
    );
}

#[test]
#[serial]
fn test_cli_overrides_file_and_env() {
    std::env::set_var("WIRE3D_ANIMATION__DURATION_SECS", "8.0");
    let config = AppConfig::load_from(Some(fixture("two_shapes.toml").as_path())).unwrap();
    std::env::remove_var("WIRE3D_ANIMATION__DURATION_SECS");
    assert_eq!(config.animation.duration_secs, 8.0);

    let cli = Cli {
        duration: Some(1.0),
        shapes: vec!["tetra".to_string()],
        ..Cli::default()
    };
    let config = cli.apply(config);
    assert_eq!(config.animation.duration_secs, 1.0);
    assert_eq!(config.meshes().unwrap().len(), 1);
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    let err = AppConfig::load_from(Some(fixture("does_not_exist.toml").as_path())).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound(_)));
}

#[test]
#[serial]
fn test_bad_env_value_is_an_error() {
    std::env::set_var("WIRE3D_ANIMATION__TICK_MS", "fast");
    let result = AppConfig::load();
    std::env::remove_var("WIRE3D_ANIMATION__TICK_MS");
    assert!(matches!(result, Err(ConfigError::Load(_))));
}
