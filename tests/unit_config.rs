// tests/unit_config.rs
use fixturegen_core::aggregate::RenderOrder;
use fixturegen_core::config::Config;
use fixturegen_core::error::FixtureError;
use std::fs;
use std::path::PathBuf;

#[test]
fn test_load_toml() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("fixturegen.toml");
    fs::write(&path, "[input]\npath = \"lights.csv\"\n[output]\nbuffered = true\n").unwrap();
    let c = Config::load_from(&path).unwrap();
    assert_eq!(c.input.path, PathBuf::from("lights.csv"));
    assert!(c.input.header);
    assert!(c.output.buffered);
    assert_eq!(c.output.path, PathBuf::from("output.txt"));
    assert_eq!(c.render.order, RenderOrder::FirstSeen);
}

#[test]
fn test_missing_explicit_config() {
    let d = tempfile::tempdir().unwrap();
    let err = Config::load_from(&d.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, FixtureError::Io { .. }));
}

#[test]
fn test_invalid_toml() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("fixturegen.toml");
    fs::write(&path, "[input\nheader = yes").unwrap();
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, FixtureError::Config { .. }));
    assert!(err.to_string().contains("fixturegen.toml"));
}

#[test]
fn test_wrong_type() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("fixturegen.toml");
    fs::write(&path, "[input]\nheader = \"sometimes\"\n").unwrap();
    assert!(Config::load_from(&path).is_err());
}
