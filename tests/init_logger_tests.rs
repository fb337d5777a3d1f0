use card_catalog::config::Config;
use card_catalog::{init, CatalogError, StorageType};
use assert_matches::assert_matches;
use serial_test::serial;
use std::fs;
use tempfile::tempdir;

#[test]
#[serial]
fn test_init_fails_when_logger_already_set() {
    // Pre-initialize logger
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempdir().unwrap();
    let config_path = dir.path().join("cfg.toml");
    let mut cfg = Config::default();
    cfg.storage.storage_type = StorageType::Memory;
    cfg.storage.base_path = "".into();
    fs::write(&config_path, cfg.to_toml().unwrap()).unwrap();

    let result = init(Some(config_path.to_str().unwrap()));
    assert_matches!(result, Err(CatalogError::InvalidInput(_)));
    assert!(card_catalog::config().is_none());
}

#[test]
#[serial]
fn test_init_rejects_invalid_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("cfg.toml");
    fs::write(&config_path, "[query]\npage_size = 0\n").unwrap();

    let result = init(Some(config_path.to_str().unwrap()));
    assert_matches!(result, Err(CatalogError::ConfigError(_)));
}
