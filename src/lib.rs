/*!
 * # transwidget - headless text translation widget
 *
 * A Rust library modelling a small translation widget: a source text area,
 * two language selectors, an output text area, a remaining-words label and
 * translate/reset buttons, backed by a remote `POST /translate` service.
 *
 * ## Features
 *
 * - Auto-resizing text areas with a height cap
 * - Optional hard word limit with truncation (80 words by default)
 * - Enter-to-submit in the source field
 * - Same-language validation before any request is sent
 * - Non-blocking notifications, with acknowledge-required ones for
 *   validation and word-limit messages
 * - Overlapping requests with last-response-wins semantics
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `widget`: The widget controller and its controls:
 *   - `widget::controller`: Event handlers and request lifecycle
 *   - `widget::word_limit`: Word tokenization and truncation
 *   - `widget::resize`: Auto-resize height model
 *   - `widget::notify`: User notifications
 * - `app_controller`: Event loop running requests as tasks
 * - `language_utils`: ISO language code utilities
 * - `providers`: Translation backends:
 *   - `providers::http`: The remote translation service
 *   - `providers::mock`: In-process mock backend
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod language_utils;
pub mod providers;
pub mod widget;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, WidgetEvent};
pub use errors::{AppError, ProviderError, WidgetError};
pub use language_utils::{get_language_name, language_codes_match};
pub use providers::{TranslateRequest, TranslateResponse, TranslationBackend};
pub use widget::{TranslationWidget, WidgetOptions, WidgetVariant};
