//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use crate::config::{ConfigLoader, DictionaryConfig, HuaoleloConfig, LogConfig, Validate};
use crate::error::config::ConfigError;
use crate::tests::TestFixture;
use std::path::PathBuf;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = HuaoleloConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.dictionary.default_completions, 3);
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = HuaoleloConfig::default();

    config.dictionary.default_completions = 0;
    assert!(config.validate().is_err());

    // Fix and test another invalid value
    config.dictionary.default_completions = 5;
    config.dictionary.max_word_length = 0;
    assert!(config.validate().is_err());

    // Fix and test another invalid value
    config.dictionary.max_word_length = 32;
    config.log.level = "loud".to_string();
    assert!(config.validate().is_err());

    config.log.level = "debug".to_string();
    assert!(config.validate().is_ok());
}

/// Test loading configuration from a TOML file.
#[test]
fn test_load_toml_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file(
            "huaolelo.toml",
            r##"
[dictionary]
word_list = "/usr/share/dict/words"
default_completions = 7
comment_prefix = "#"

[log]
level = "debug"
json = true
"##,
        )
        .unwrap();

    let config = ConfigLoader::new(Some(&path), "HUAOLELO_TEST_TOML").load().unwrap();

    assert_eq!(
        config.dictionary,
        DictionaryConfig {
            word_list: Some(PathBuf::from("/usr/share/dict/words")),
            default_completions: 7,
            comment_prefix: Some("#".to_string()),
            ..DictionaryConfig::default()
        }
    );
    assert_eq!(
        config.log,
        LogConfig {
            level: "debug".to_string(),
            json: true,
            ..LogConfig::default()
        }
    );
}

/// Test loading configuration from a JSON file.
#[test]
fn test_load_json_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file(
            "huaolelo.json",
            r#"{ "dictionary": { "max_word_length": 12 } }"#,
        )
        .unwrap();

    let config = ConfigLoader::new(Some(&path), "HUAOLELO_TEST_JSON").load().unwrap();

    assert_eq!(config.dictionary.max_word_length, 12);
    assert_eq!(config.log, LogConfig::default());
}

/// Test that an invalid value in a file is caught by validation.
#[test]
fn test_load_rejects_invalid_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file("bad.toml", "[dictionary]\ndefault_completions = 0\n")
        .unwrap();

    let result = ConfigLoader::new(Some(&path), "HUAOLELO_TEST_BAD").load();

    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}

/// Test that a missing configuration file is reported as such.
#[test]
fn test_missing_file() {
    let result = ConfigLoader::new(Some("/nonexistent/huaolelo.toml"), "HUAOLELO_TEST_MISSING").load();

    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

/// Test that an unknown file extension is rejected.
#[test]
fn test_unsupported_extension() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_file("huaolelo.ini", "x = 1").unwrap();

    let result = ConfigLoader::new(Some(&path), "HUAOLELO_TEST_INI").load();

    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

/// Test that the default configuration serializes to TOML and back.
#[test]
fn test_default_config_toml() {
    let text = toml::to_string_pretty(&HuaoleloConfig::default()).unwrap();
    let parsed: HuaoleloConfig = toml::from_str(&text).unwrap();

    assert_eq!(parsed, HuaoleloConfig::default());
}
