//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and the
//! conversion of settings into a trie configuration.

use crate::config::{
    loader::LoaderSettings, trie::TrieSettings, ConfigLoader, LanaiConfig, LogConfig, Validate,
};
use crate::data_structures::lanai_trie::{Limit, Locale, MismatchPolicy};
use crate::error::config::ConfigError;
use crate::tests::TestFixture;
use std::fs;
use tempfile::tempdir;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = LanaiConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.trie.match_almost_diff, 0);
    assert_eq!(config.trie.num_return_values, -1);
    assert!(config.trie.case_folding);
    assert_eq!(config.loader.separator, "\t");
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = LanaiConfig::default();

    config.trie.locale = "klingon".to_string();
    assert!(config.validate().is_err());

    config.trie.locale = "tr".to_string();
    config.loader.separator = String::new();
    assert!(config.validate().is_err());

    config.loader.separator = ",".to_string();
    config.log.level = "loud".to_string();
    assert!(config.validate().is_err());

    config.log.level = "warn".to_string();
    assert!(config.validate().is_ok());
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config_file_test.toml");

    let config_content = r#"
    [trie]
    match_almost_diff = 2
    num_return_values = 10
    locale = "tr"
    tie_break_seed = 42

    [loader]
    separator = "|"
    "#;

    fs::write(&config_path, config_content).unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE");
    let config = loader.load().unwrap();

    assert_eq!(config.trie.match_almost_diff, 2);
    assert_eq!(config.trie.num_return_values, 10);
    assert_eq!(config.trie.locale, "tr");
    assert_eq!(config.trie.tie_break_seed, Some(42));
    assert_eq!(config.loader.separator, "|");

    // Other values should be defaults
    assert!(config.loader.accumulate_duplicates);
    assert_eq!(config.log.level, "info");
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("config_env_test.toml", "[trie]\nmatch_almost_diff = 1\n")
        .unwrap();

    fixture.set_env("TEST_ENV__TRIE__MATCH_ALMOST_DIFF", "3");
    fixture.set_env("TEST_ENV__LOG__LEVEL", "debug");

    let loader = ConfigLoader::new(Some(&config_path), "TEST_ENV");
    let config = loader.load().unwrap();

    // Environment variables take precedence over the file
    assert_eq!(config.trie.match_almost_diff, 3);
    assert_eq!(config.log.level, "debug");
}

/// Test that a missing file is reported as such.
#[test]
fn test_missing_config_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("absent.toml");

    let loader = ConfigLoader::new(Some(&config_path), "TEST_MISSING");
    match loader.load() {
        Err(ConfigError::FileNotFound(path)) => assert_eq!(path, config_path),
        other => panic!("expected FileNotFound, got {other:?}"),
    }
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("invalid.toml");

    let config_content = r#"
    [trie
    locale = root"
    "#;

    fs::write(&config_path, config_content).unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_INVALID");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test that an unknown locale fails validation after loading.
#[test]
fn test_load_rejects_unknown_locale() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("locale.toml", "[trie]\nlocale = \"xx\"\n")
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_LOCALE");
    assert!(matches!(
        loader.load(),
        Err(ConfigError::ValidationError(_))
    ));
}

/// Test that JSON files are accepted as well as TOML.
#[test]
fn test_load_json_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("config.json", r#"{"loader": {"skip_malformed": true}}"#)
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_JSON");
    let config = loader.load().unwrap();
    assert!(config.loader.skip_malformed);
}

/// Test that out-of-range diffs are clamped rather than rejected.
#[test]
fn test_trie_settings_clamp_diff() {
    let settings = TrieSettings {
        match_almost_diff: 9,
        ..TrieSettings::default()
    };
    assert!(settings.validate().is_ok());
    assert_eq!(settings.to_trie_config().unwrap().match_almost_diff, 3);

    let settings = TrieSettings {
        match_almost_diff: -4,
        ..TrieSettings::default()
    };
    assert_eq!(settings.to_trie_config().unwrap().match_almost_diff, 0);
}

/// Test the conversion into a trie configuration.
#[test]
fn test_trie_settings_to_trie_config() {
    let settings = TrieSettings {
        match_almost_diff: 1,
        num_return_values: 5,
        case_folding: true,
        locale: "az".to_string(),
        tie_break_seed: Some(7),
    };
    let config = settings.to_trie_config().unwrap();

    assert_eq!(config.num_return_values, Limit::AtMost(5));
    assert_eq!(config.folder.locale(), Locale::Turkic);
    assert_eq!(config.tie_break_seed, Some(7));

    let plain = TrieSettings {
        case_folding: false,
        ..TrieSettings::default()
    }
    .to_trie_config()
    .unwrap();
    assert!(!plain.folder.is_enabled());
}

/// Test that a built trie follows the settings it was built from.
#[test]
fn test_build_trie_uses_settings() {
    let settings = TrieSettings {
        match_almost_diff: 1,
        num_return_values: 1,
        ..TrieSettings::default()
    };
    let mut trie = settings.build_trie::<u32>().unwrap();
    trie.put("cat", 1).unwrap();
    trie.put("cot", 2).unwrap();
    trie.put("cut", 3).unwrap();

    assert_eq!(trie.match_prefix_default("c"), vec!["cat"]);
    assert_eq!(
        trie.match_almost("cat", -1, MismatchPolicy::Exact),
        vec!["cot", "cut"]
    );
}

/// Test that the default configuration survives a TOML round trip.
#[test]
fn test_default_config_serializes_to_toml() {
    let rendered = toml::to_string_pretty(&LanaiConfig::default()).unwrap();
    assert!(rendered.contains("[trie]"));
    assert!(rendered.contains("[loader]"));

    let parsed: LanaiConfig = toml::from_str(&rendered).unwrap();
    assert_eq!(parsed.loader, LoaderSettings::default());
    assert_eq!(parsed.log.level, LogConfig::default().level);
}
