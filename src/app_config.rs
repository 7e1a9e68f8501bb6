use anyhow::{Context, Result, anyhow};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;
use url::Url;

use crate::language_utils;
use crate::widget::options::{WidgetOptions, WidgetVariant};
use crate::widget::resize::{DEFAULT_MAX_HEIGHT, TextMetrics};
use crate::widget::word_limit::DEFAULT_MAX_WORDS;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the translation service
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Language selector options
    #[serde(default)]
    pub languages: LanguageConfig,

    /// Widget behavior
    #[serde(default)]
    pub widget: WidgetConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Options of both language selectors
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LanguageConfig {
    /// Codes offered by the source selector, in display order
    #[serde(default = "default_language_options")]
    pub source_options: Vec<String>,

    /// Codes offered by the target selector, in display order
    #[serde(default = "default_language_options")]
    pub target_options: Vec<String>,

    /// Option the source selector starts on and resets to
    #[serde(default = "default_source_language")]
    pub default_source: String,

    /// Option the target selector starts on and resets to
    #[serde(default = "default_target_language")]
    pub default_target: String,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            source_options: default_language_options(),
            target_options: default_language_options(),
            default_source: default_source_language(),
            default_target: default_target_language(),
        }
    }
}

/// Widget behavior configuration
///
/// `variant` picks a preset; the optional switches override single parts of it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WidgetConfig {
    #[serde(default)]
    pub variant: WidgetVariant,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforce_word_limit: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submit_on_enter: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reject_same_language: Option<bool>,

    /// Maximum words in the source field
    #[serde(default = "default_max_words")]
    pub max_words: usize,

    /// Maximum text area height
    #[serde(default = "default_max_height")]
    pub max_height: u32,

    /// Text layout metrics used for auto-resize
    #[serde(default)]
    pub metrics: TextMetrics,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            variant: WidgetVariant::default(),
            enforce_word_limit: None,
            submit_on_enter: None,
            reject_same_language: None,
            max_words: default_max_words(),
            max_height: default_max_height(),
            metrics: TextMetrics::default(),
        }
    }
}

impl WidgetConfig {
    /// Resolve the preset and overrides into widget options
    pub fn to_options(&self) -> WidgetOptions {
        let preset = WidgetOptions::from(self.variant);
        WidgetOptions {
            enforce_word_limit: self.enforce_word_limit.unwrap_or(preset.enforce_word_limit),
            submit_on_enter: self.submit_on_enter.unwrap_or(preset.submit_on_enter),
            reject_same_language: self.reject_same_language.unwrap_or(preset.reject_same_language),
            max_words: self.max_words,
            max_height: self.max_height,
            metrics: self.metrics,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_endpoint() -> String {
    // Port the reference backend listens on
    "http://127.0.0.1:8080".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_language_options() -> Vec<String> {
    ["en", "fr", "el", "hi"].iter().map(|c| c.to_string()).collect()
}

fn default_source_language() -> String {
    "en".to_string()
}

fn default_target_language() -> String {
    "fr".to_string()
}

fn default_max_words() -> usize {
    DEFAULT_MAX_WORDS
}

fn default_max_height() -> u32 {
    DEFAULT_MAX_HEIGHT
}

impl Config {
    /// Load the configuration at `path`, writing a default one if it is missing
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            let file = File::open(path)
                .with_context(|| format!("Failed to open config file: {}", path.display()))?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))
        } else {
            warn!("Config file not found at '{}', creating default config.", path.display());
            let config = Config::default();
            config.save(path)?;
            Ok(config)
        }
    }

    /// Write the configuration as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;
        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write config to file: {}", path.display()))
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.endpoint)
            .with_context(|| format!("Invalid endpoint URL: {}", self.endpoint))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(anyhow!("Endpoint must use http or https: {}", self.endpoint));
        }

        if self.timeout_secs == 0 {
            return Err(anyhow!("Timeout must be at least one second"));
        }

        Self::validate_options("source", &self.languages.source_options, &self.languages.default_source)?;
        Self::validate_options("target", &self.languages.target_options, &self.languages.default_target)?;

        if self.widget.max_words == 0 {
            return Err(anyhow!("Maximum word count must be greater than zero"));
        }
        if self.widget.max_height == 0 {
            return Err(anyhow!("Maximum text area height must be greater than zero"));
        }

        Ok(())
    }

    fn validate_options(side: &str, options: &[String], default_code: &str) -> Result<()> {
        if options.is_empty() {
            return Err(anyhow!("No {} language options configured", side));
        }

        for code in options {
            language_utils::validate_language_code(code)
                .with_context(|| format!("Invalid {} language option", side))?;
        }

        if !options.iter().any(|code| code.eq_ignore_ascii_case(default_code.trim())) {
            return Err(anyhow!(
                "Default {} language '{}' is not one of the options",
                side,
                default_code
            ));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            languages: LanguageConfig::default(),
            widget: WidgetConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
