/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use std::time::Duration;
use tempfile::TempDir;

use translation_agent::app_config::{ClipboardBackend, Config, LogLevel};
use translation_agent::providers::mock::PLACEHOLDER_TRANSLATION;
use translation_agent::Profile;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.profile, Profile::Strict);
    assert_eq!(config.source_language, "en");
    assert_eq!(config.target_language, "ar");
    assert_eq!(config.max_source_chars, 10_000);
    assert_eq!(config.output_format, "PDF");
    assert_eq!(config.placeholder_translation, PLACEHOLDER_TRANSLATION);
    assert_eq!(config.clipboard, ClipboardBackend::System);
    assert_eq!(config.log_level, LogLevel::Warn);

    assert_eq!(config.timing.translation_delay(), Duration::from_millis(1500));
    assert_eq!(config.timing.error_display(), Duration::from_secs(5));
    assert_eq!(config.timing.copied_feedback(), Duration::from_secs(2));
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    // Invalid source language
    config.source_language = "xyz".to_string();
    assert!(config.validate().is_err());
    config.source_language = "en".to_string();

    // Invalid target language
    config.target_language = "".to_string();
    assert!(config.validate().is_err());
    config.target_language = "ara".to_string();
    assert!(config.validate().is_ok());

    config.max_source_chars = 0;
    assert!(config.validate().is_err());
    config.max_source_chars = 500;

    config.output_format = "  ".to_string();
    assert!(config.validate().is_err());
    config.output_format = "DOCX".to_string();

    config.placeholder_translation.clear();
    assert!(config.validate().is_err());
}

/// Missing keys fall back to their defaults
#[test]
fn test_from_file_withPartialJson_shouldFillDefaults() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("conf.json");
    std::fs::write(
        &path,
        r#"{ "profile": "relaxed", "timing": { "translation_delay_ms": 10 }, "log_level": "debug" }"#,
    )?;

    let config = Config::from_file(&path)?;
    assert_eq!(config.profile, Profile::Relaxed);
    assert_eq!(config.timing.translation_delay_ms, 10);
    assert_eq!(config.timing.error_display_ms, 5000);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.target_language, "ar");
    Ok(())
}

/// Saved configuration reads back unchanged
#[test]
fn test_save_withCustomValues_shouldReadBackEqual() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("conf.json");

    let mut config = Config::default();
    config.profile = Profile::Relaxed;
    config.clipboard = ClipboardBackend::Memory;
    config.output_format = "DOCX".to_string();
    config.save(&path)?;

    let loaded = Config::from_file(&path)?;
    assert_eq!(loaded, config);

    let raw = std::fs::read_to_string(&path)?;
    assert!(raw.contains("\"clipboard\": \"memory\""));
    Ok(())
}

/// Broken files produce a descriptive error
#[test]
fn test_from_file_withInvalidJson_shouldFail() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("conf.json");
    std::fs::write(&path, "{ not json")?;

    let err = Config::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));

    let missing = Config::from_file(&dir.path().join("missing.json")).unwrap_err();
    assert!(missing.to_string().contains("Failed to open config file"));
    Ok(())
}
