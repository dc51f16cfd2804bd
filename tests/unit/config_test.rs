use std::path::PathBuf;

use tempfile::TempDir;

use scanform::config::ScannerConfig;
use scanform::errors::ConfigError;

#[test]
fn missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = ScannerConfig::load(&dir.path().join("scanform.json")).unwrap();
    assert_eq!(config, ScannerConfig::default());
    assert_eq!(config.export_dir, PathBuf::from("."));
    assert_eq!(config.sheet_title, "Сканированные данные");
    assert_eq!(config.log_filter, "scanform=info");
}

#[test]
fn partial_file_overrides_only_given_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scanform.json");
    std::fs::write(&path, r#"{ "export_dir": "/srv/scans" }"#).unwrap();

    let config = ScannerConfig::load(&path).unwrap();
    assert_eq!(config.export_dir, PathBuf::from("/srv/scans"));
    assert_eq!(config.sheet_title, ScannerConfig::default().sheet_title);
}

#[test]
fn unknown_field_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scanform.json");
    std::fs::write(&path, r#"{ "file_name": "other.xlsx" }"#).unwrap();

    assert!(matches!(ScannerConfig::load(&path), Err(ConfigError::Parse(_))));
}

#[test]
fn malformed_json_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scanform.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(ScannerConfig::load(&path), Err(ConfigError::Parse(_))));
}

#[test]
fn directory_instead_of_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(
        ScannerConfig::load(dir.path()),
        Err(ConfigError::Io(_))
    ));
}
