//! Integration tests for loading and saving field configs.

use taichi_field::prelude::*;
use taichi_field::visuals::BlendMode;

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("field.json");

    let mut config = FieldConfig {
        name: "Seeded".into(),
        particle_count: 256,
        seed: Some(17),
        initial_mode: Mode::Scatter,
        ..FieldConfig::default()
    };
    config.motion.breathing_amplitude = 0.0;
    config.visuals.blend_mode(BlendMode::Normal).opacity(0.6);
    config.save(&path).unwrap();

    let loaded = FieldConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = FieldConfig::load(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_load_rejects_bad_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ particle_count: ").unwrap();
    assert!(matches!(FieldConfig::load(&path).unwrap_err(), ConfigError::Json(_)));
}

#[test]
fn test_load_rejects_unknown_mode() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mode.json");
    std::fs::write(
        &path,
        r#"{ "particle_count": 10, "sphere_radius": 1.0, "initial_mode": "swirl" }"#,
    )
    .unwrap();
    assert!(matches!(FieldConfig::load(&path).unwrap_err(), ConfigError::Json(_)));
}

#[test]
fn test_load_rejects_invalid_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.json");
    std::fs::write(&path, r#"{ "particle_count": 0, "sphere_radius": 1.0 }"#).unwrap();
    let err = FieldConfig::load(&path).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid(FieldError::InvalidParticleCount(0))
    ));
}

#[test]
fn test_loaded_config_builds_same_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seeded.json");
    let config = FieldConfig {
        particle_count: 128,
        seed: Some(4),
        ..FieldConfig::default()
    };
    config.save(&path).unwrap();

    let loaded = FieldConfig::load(&path).unwrap();
    let a = ParticleField::from_config(&config).unwrap();
    let b = ParticleField::from_config(&loaded).unwrap();
    assert_eq!(a.target_positions(), b.target_positions());
    assert_eq!(a.colors(), b.colors());
}
