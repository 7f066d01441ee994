//! Tests for CityscoutError type

use super::*;

#[test]
fn test_config_read_error_display_includes_path() {
    let error = CityscoutError::ConfigRead {
        path: PathBuf::from("/tmp/cityscout/config.toml"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
    };
    let msg = error.to_string();
    assert!(msg.contains("/tmp/cityscout/config.toml"));
    assert!(msg.contains("no such file"));
}

#[test]
fn test_config_parse_error_from_toml() {
    let toml_err = toml::from_str::<toml::Table>("[suggest").unwrap_err();
    let error = CityscoutError::from(toml_err);
    assert!(matches!(error, CityscoutError::ConfigParse(_)));
    assert!(error.to_string().starts_with("Invalid config"));
}

#[test]
fn test_history_encode_error_from_serde_json() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error = CityscoutError::from(json_err);
    assert!(matches!(error, CityscoutError::HistoryEncode(_)));
}

#[test]
fn test_io_error_from_std_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "test error");
    let error = CityscoutError::from(io_err);
    assert!(matches!(error, CityscoutError::Io(_)));
    assert!(error.to_string().contains("test error"));
}

#[test]
fn test_config_read_error_exposes_source() {
    use std::error::Error as _;

    let error = CityscoutError::ConfigRead {
        path: PathBuf::from("config.toml"),
        source: std::io::Error::other("disk on fire"),
    };
    let source = error.source().expect("source should be set");
    assert!(source.to_string().contains("disk on fire"));
}
