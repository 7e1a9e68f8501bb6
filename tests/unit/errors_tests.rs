/*!
 * Tests for error types and conversions
 */

use transwidget::errors::{AppError, ProviderError, WidgetError};

#[test]
fn test_providerError_apiError_shouldDisplayStatusAndMessage() {
    let error = ProviderError::ApiError {
        status_code: 400,
        message: "Missing required parameters".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("400"));
    assert!(display.contains("Missing required parameters"));
}

#[test]
fn test_providerError_timeout_shouldDisplayCorrectly() {
    let error = ProviderError::Timeout("after 30s".to_string());
    assert_eq!(error.to_string(), "Request timed out: after 30s");
}

#[test]
fn test_widgetError_sameLanguage_shouldUseUserMessage() {
    let error = WidgetError::SameLanguage { language: "en".to_string() };
    assert_eq!(
        error.to_string(),
        "Source language and target language cannot be the same. Please select different languages."
    );
}

#[test]
fn test_appError_fromWidgetError_shouldWrapCorrectly() {
    let app_error: AppError = WidgetError::Detached.into();
    assert!(matches!(app_error, AppError::Widget(WidgetError::Detached)));
    assert!(app_error.to_string().contains("Widget has been detached"));
}

#[test]
fn test_appError_fromProviderError_shouldWrapCorrectly() {
    let app_error: AppError = ProviderError::ParseError("bad json".to_string()).into();
    assert!(matches!(app_error, AppError::Provider(ProviderError::ParseError(_))));
}

#[test]
fn test_appError_fromIoError_shouldBecomeFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "conf.json missing");
    let app_error: AppError = io_error.into();
    assert!(matches!(app_error, AppError::File(ref msg) if msg.contains("conf.json")));
}

#[test]
fn test_appError_fromJsonError_shouldBecomeConfigError() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let app_error: AppError = json_error.into();
    assert!(matches!(app_error, AppError::Config(_)));
}
