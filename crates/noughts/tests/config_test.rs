//! Tests for loading adapter configuration from disk.

use noughts::AdapterConfig;
use std::io::Write;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "min_delay_ms = 10\nmax_delay_ms = 20\nseed = 99").unwrap();

    let config = AdapterConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.min_delay_ms(), 10);
    assert_eq!(*config.max_delay_ms(), 20);
    assert_eq!(*config.seed(), Some(99));
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AdapterConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AdapterConfig::default());
}

#[test]
fn test_missing_file_is_an_error_for_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = AdapterConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "min_delay_ms = \"soon\"").unwrap();
    let err = AdapterConfig::load_or_default(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_inverted_delays_in_file_are_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "min_delay_ms = 900\nmax_delay_ms = 100").unwrap();
    let err = AdapterConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("exceeds"));
}
