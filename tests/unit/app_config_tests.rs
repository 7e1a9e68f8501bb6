/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use transwidget::app_config::{Config, LogLevel, WidgetConfig};
use transwidget::widget::WidgetVariant;

use crate::common::{create_temp_dir, create_test_file};

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.endpoint, "http://127.0.0.1:8080");
    assert_eq!(config.timeout_secs, 30);
    assert_eq!(config.languages.default_source, "en");
    assert_eq!(config.languages.default_target, "fr");
    assert_eq!(config.widget.variant, WidgetVariant::WordLimited);
    assert_eq!(config.widget.max_words, 80);
    assert_eq!(config.widget.max_height, 300);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();

    config.endpoint = "not a url".to_string();
    assert!(config.validate().is_err());
    config.endpoint = "ftp://example.com".to_string();
    assert!(config.validate().is_err());
    config.endpoint = "https://translate.example.com/api".to_string();
    assert!(config.validate().is_ok());

    config.languages.source_options.push("xyz".to_string());
    assert!(config.validate().is_err());
    config.languages.source_options.pop();

    config.languages.default_target = "de".to_string();
    assert!(config.validate().is_err());
    config.languages.default_target = "hi".to_string();
    assert!(config.validate().is_ok());

    config.widget.max_words = 0;
    assert!(config.validate().is_err());
    config.widget.max_words = 80;

    config.languages.target_options.clear();
    assert!(config.validate().is_err());
}

#[test]
fn test_widgetConfig_withOverrides_shouldReplacePresetSwitches() {
    let widget = WidgetConfig {
        variant: WidgetVariant::Plain,
        submit_on_enter: Some(true),
        max_words: 50,
        ..WidgetConfig::default()
    };

    let options = widget.to_options();
    assert!(!options.enforce_word_limit);
    assert!(options.submit_on_enter);
    assert!(!options.reject_same_language);
    assert_eq!(options.max_words, 50);
}

#[test]
fn test_config_deserialize_withPartialJson_shouldFillDefaults() -> Result<()> {
    let json = r#"{
        "endpoint": "http://localhost:5000",
        "widget": { "variant": "plain", "metrics": { "columns": 40 } },
        "log_level": "debug"
    }"#;

    let config: Config = serde_json::from_str(json)?;

    assert_eq!(config.endpoint, "http://localhost:5000");
    assert_eq!(config.widget.variant, WidgetVariant::Plain);
    assert_eq!(config.widget.metrics.columns, 40);
    assert_eq!(config.widget.metrics.line_height, 20);
    assert_eq!(config.widget.max_words, 80);
    assert_eq!(config.languages.source_options, vec!["en", "fr", "el", "hi"]);
    assert_eq!(config.log_level, LogLevel::Debug);
    Ok(())
}

#[test]
fn test_loadOrCreate_withMissingFile_shouldWriteDefaults() -> Result<()> {
    let dir = create_temp_dir()?;
    let path = dir.path().join("conf.json");

    let created = Config::load_or_create(&path)?;
    assert!(path.exists());

    let reloaded = Config::load_or_create(&path)?;
    assert_eq!(reloaded.endpoint, created.endpoint);
    assert_eq!(reloaded.languages, created.languages);
    assert_eq!(reloaded.widget, created.widget);
    Ok(())
}

#[test]
fn test_loadOrCreate_withInvalidJson_shouldFail() -> Result<()> {
    let dir = create_temp_dir()?;
    let path = create_test_file(dir.path(), "conf.json", "{ not json")?;

    let error = Config::load_or_create(&path).unwrap_err();
    assert!(error.to_string().contains("Failed to parse config file"));
    Ok(())
}

#[test]
fn test_logLevel_shouldMapToLevelFilter() {
    assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}
