/*!
 * Tests for application configuration loading and validation
 */

use yartwai::app_config::{Config, LogLevel};

/// Test that the default configuration is valid
#[test]
fn test_defaultConfig_shouldPassValidation() {
    let config = Config::default();

    assert!(config.validate().is_ok());
    assert_eq!(config.readme_path, "README.md");
    assert_eq!(config.output_dir, "locales");
    assert_eq!(config.min_chunk_chars, 50);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test that an empty oracle model fails validation
#[test]
fn test_validate_withEmptyModel_shouldFail() {
    let mut config = Config::default();
    config.oracle.model = String::new();

    assert!(config.validate().is_err());
}

/// Test that a zero merge threshold fails validation
#[test]
fn test_validate_withZeroMinChunkChars_shouldFail() {
    let mut config = Config::default();
    config.min_chunk_chars = 0;

    assert!(config.validate().is_err());
}

/// Test that an empty readme path fails validation
#[test]
fn test_validate_withEmptyReadmePath_shouldFail() {
    let mut config = Config::default();
    config.readme_path = "  ".to_string();

    assert!(config.validate().is_err());
}

/// Test that a partial config file fills the rest with defaults
#[test]
fn test_deserialize_withPartialJson_shouldFillDefaults() {
    let json = r#"{ "oracle": { "model": "mistral:7b" } }"#;

    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.oracle.model, "mistral:7b");
    assert_eq!(config.oracle.endpoint, "http://localhost:11434");
    assert_eq!(config.readme_path, "README.md");
    assert_eq!(config.min_chunk_chars, 50);
}

/// Test that log levels deserialize from lowercase names
#[test]
fn test_deserialize_withLogLevel_shouldParseLowercase() {
    let json = r#"{ "log_level": "debug" }"#;

    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.log_level, LogLevel::Debug);
}

/// Test that a config round-trips through JSON
#[test]
fn test_serialize_shouldRoundTrip() {
    let mut config = Config::default();
    config.oracle.model = "aya-expanse:32b".to_string();
    config.min_chunk_chars = 80;

    let json = serde_json::to_string(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.oracle.model, "aya-expanse:32b");
    assert_eq!(parsed.min_chunk_chars, 80);
}
