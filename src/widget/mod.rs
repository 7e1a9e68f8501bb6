/*!
 * Headless translation widget.
 *
 * - `controls`: typed handles for selectors, text areas, label and buttons
 * - `resize`: content-height model behind text area auto-resize
 * - `word_limit`: word tokenization and hard word-limit truncation
 * - `notify`: non-blocking notifications replacing modal alerts
 * - `options`: behavior switches and the variant presets
 * - `controller`: the widget itself and its event handlers
 */

pub mod controller;
pub mod controls;
pub mod notify;
pub mod options;
pub mod resize;
pub mod word_limit;

pub use controller::{CompletionOutcome, Key, KeyOutcome, RequestState, TranslationTicket, TranslationWidget};
pub use controls::{LanguageOption, LanguageSelector};
pub use notify::{LogNotifier, Notification, NotificationKind, Notifier, RecordingNotifier};
pub use options::{WidgetOptions, WidgetVariant};
pub use word_limit::WordLimit;
