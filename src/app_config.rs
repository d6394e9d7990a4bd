use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use crate::categories::Profile;
use crate::providers::mock::{DEFAULT_DELAY, PLACEHOLDER_TRANSLATION};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Which fields the form shows and whether they are mandatory
    #[serde(default)]
    pub profile: Profile,

    /// Source language code (ISO)
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Target language code (ISO)
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Delays and feedback durations
    #[serde(default)]
    pub timing: TimingConfig,

    /// Maximum source text length in characters
    #[serde(default = "default_max_source_chars")]
    pub max_source_chars: usize,

    /// Text produced by the mock translation
    #[serde(default = "default_placeholder_translation")]
    pub placeholder_translation: String,

    /// Format tag written to every audit entry
    #[serde(default = "default_output_format")]
    pub output_format: String,

    /// Where copied output goes
    #[serde(default)]
    pub clipboard: ClipboardBackend,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Timer configuration, all values in milliseconds
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TimingConfig {
    // @field: Simulated translation latency
    #[serde(default = "default_translation_delay_ms")]
    pub translation_delay_ms: u64,

    // @field: How long an error stays in the banner
    #[serde(default = "default_error_display_ms")]
    pub error_display_ms: u64,

    // @field: How long the "Copied!" feedback stays
    #[serde(default = "default_copied_feedback_ms")]
    pub copied_feedback_ms: u64,
}

impl TimingConfig {
    pub fn translation_delay(&self) -> Duration {
        Duration::from_millis(self.translation_delay_ms)
    }

    pub fn error_display(&self) -> Duration {
        Duration::from_millis(self.error_display_ms)
    }

    pub fn copied_feedback(&self) -> Duration {
        Duration::from_millis(self.copied_feedback_ms)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            translation_delay_ms: default_translation_delay_ms(),
            error_display_ms: default_error_display_ms(),
            copied_feedback_ms: default_copied_feedback_ms(),
        }
    }
}

/// Clipboard backend
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    // @backend: Host clipboard
    #[default]
    System,
    // @backend: In-process only
    Memory,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

fn default_source_language() -> String {
    "en".to_string()
}

fn default_target_language() -> String {
    "ar".to_string()
}

fn default_translation_delay_ms() -> u64 {
    DEFAULT_DELAY.as_millis() as u64
}

fn default_error_display_ms() -> u64 {
    5000
}

fn default_copied_feedback_ms() -> u64 {
    2000
}

fn default_max_source_chars() -> usize {
    10_000
}

fn default_placeholder_translation() -> String {
    PLACEHOLDER_TRANSLATION.to_string()
}

fn default_output_format() -> String {
    "PDF".to_string()
}

impl Config {
    /// Read a configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .context(format!("Failed to open config file: {}", path.display()))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", path.display()))
    }

    /// Write the configuration as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;
        std::fs::write(path, config_json)
            .context(format!("Failed to write config to file: {}", path.display()))
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // Validate languages
        let _source_name = crate::language_utils::get_language_name(&self.source_language)?;
        let _target_name = crate::language_utils::get_language_name(&self.target_language)?;

        if self.max_source_chars == 0 {
            return Err(anyhow!("max_source_chars must be greater than zero"));
        }

        if self.output_format.trim().is_empty() {
            return Err(anyhow!("output_format must not be empty"));
        }

        if self.placeholder_translation.is_empty() {
            return Err(anyhow!("placeholder_translation must not be empty"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            profile: Profile::default(),
            source_language: default_source_language(),
            target_language: default_target_language(),
            timing: TimingConfig::default(),
            max_source_chars: default_max_source_chars(),
            placeholder_translation: default_placeholder_translation(),
            output_format: default_output_format(),
            clipboard: ClipboardBackend::default(),
            log_level: LogLevel::default(),
        }
    }
}
