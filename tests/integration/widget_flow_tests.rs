/*!
 * End-to-end widget behavior: typing, word limit, translate, reset
 */

use transwidget::errors::WidgetError;
use transwidget::providers::mock::MockBackend;
use transwidget::widget::{
    CompletionOutcome, Key, KeyOutcome, NotificationKind, RequestState, WidgetOptions, WidgetVariant,
};

use crate::common::{numbered_words, test_widget, test_widget_with_options};

#[test]
fn test_sourceInput_withWords_shouldUpdateRemainingCount() {
    let (mut widget, notifier) = test_widget(WidgetVariant::WordLimited);

    widget.on_source_input("The quick brown fox, jumps!").unwrap();
    assert_eq!(widget.remaining_words(), Some(75));

    widget.on_source_input("The quick").unwrap();
    assert_eq!(widget.remaining_words(), Some(78));
    assert!(notifier.notifications().is_empty());
}

#[test]
fn test_sourceInput_overLimit_shouldTruncateAndRequireAck() {
    let (mut widget, notifier) = test_widget(WidgetVariant::WordLimited);

    widget.on_source_input(numbered_words(81, " ")).unwrap();

    assert_eq!(widget.source_text(), numbered_words(80, " "));
    assert_eq!(widget.remaining_words(), Some(0));

    let notifications = notifier.notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, NotificationKind::WordLimitReached);
    assert_eq!(notifications[0].message, "You have reached the maximum limit of 80 words.");
    assert!(notifications[0].requires_ack);
    assert!(widget.pending_notification().is_some());
}

#[test]
fn test_typing_pastLimit_shouldRevertToLimit() {
    let (mut widget, _) = test_widget(WidgetVariant::WordLimited);
    widget.on_source_input(numbered_words(80, " ")).unwrap();
    assert_eq!(widget.remaining_words(), Some(0));

    widget.on_source_key_down(Key::Char(' ')).unwrap();
    assert!(widget.pending_notification().is_none());
    widget.on_source_key_down(Key::Char('e')).unwrap();

    assert_eq!(widget.source_text(), numbered_words(80, " "));
    assert_eq!(widget.remaining_words(), Some(0));
    let notification = widget.acknowledge().expect("limit notification is pending");
    assert_eq!(notification.kind, NotificationKind::WordLimitReached);

    // Typing continues once acknowledged
    widget.on_source_key_down(Key::Backspace).unwrap();
    assert_eq!(widget.source_text(), numbered_words(80, " ").trim_end_matches('0').to_string());
}

#[test]
fn test_truncation_shouldResizeSourceToTruncatedContent() {
    let (mut widget, _) = test_widget(WidgetVariant::WordLimited);
    let long_lines = numbered_words(200, "\n");

    widget.on_source_input(long_lines).unwrap();

    // 80 words on one line, wrapped at 60 columns
    let expected_lines = numbered_words(80, " ").chars().count().div_ceil(60) as u32;
    assert_eq!(widget.controls().source_text.height(), expected_lines * 20 + 16);
}

#[test]
fn test_translate_withSameLanguages_shouldNotSendRequest() {
    let (mut widget, notifier) = test_widget(WidgetVariant::WordLimited);
    widget.on_source_input("Hello").unwrap();
    widget.select_target_language("en").unwrap();

    let result = widget.on_translate_click();

    assert_eq!(result, Err(WidgetError::SameLanguage { language: "en".to_string() }));
    assert_eq!(widget.state(), RequestState::Idle);
    assert_eq!(notifier.kinds(), vec![NotificationKind::SameLanguage]);
    assert_eq!(
        notifier.notifications()[0].message,
        "Source language and target language cannot be the same. Please select different languages."
    );
}

#[tokio::test]
async fn test_translateWith_sameLanguages_shouldNeverReachBackend() {
    let (mut widget, _) = test_widget(WidgetVariant::WordLimited);
    let backend = MockBackend::working();
    widget.select_source_language("fr").unwrap();

    let result = widget.translate_with(&backend).await;

    assert!(matches!(result, Err(WidgetError::SameLanguage { .. })));
    assert_eq!(backend.request_count(), 0);
}

#[tokio::test]
async fn test_plainVariant_withSameLanguages_shouldStillTranslate() {
    let (mut widget, notifier) = test_widget(WidgetVariant::Plain);
    let backend = MockBackend::working();
    widget.select_target_language("en").unwrap();
    widget.on_source_input("Hello").unwrap();

    let outcome = widget.translate_with(&backend).await.unwrap();

    assert!(matches!(outcome, CompletionOutcome::Applied));
    assert_eq!(backend.request_count(), 1);
    assert!(notifier.notifications().is_empty());
}

#[tokio::test]
async fn test_translate_enToFr_shouldWriteResponseVerbatim() {
    let (mut widget, _) = test_widget(WidgetVariant::WordLimited);
    let backend = MockBackend::working().with_custom_response(|_| "Bonjour".to_string());
    widget.on_source_input("Hello").unwrap();

    widget.translate_with(&backend).await.unwrap();

    assert_eq!(widget.translated_text(), "Bonjour");
    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].source_text, "Hello");
    assert_eq!(requests[0].source_lang, "en");
    assert_eq!(requests[0].target_lang, "fr");
}

#[tokio::test]
async fn test_translate_withLongResponse_shouldResizeOutput() {
    let (mut widget, _) = test_widget(WidgetVariant::WordLimited);
    let backend = MockBackend::working().with_custom_response(|_| "ligne\n".repeat(30));
    let initial = widget.controls().translated_text.height();
    widget.on_source_input("Hello").unwrap();

    widget.translate_with(&backend).await.unwrap();

    assert!(initial < 300);
    assert_eq!(widget.controls().translated_text.height(), 300);
}

#[tokio::test]
async fn test_translate_withFailingBackend_shouldLeaveOutputUnchanged() {
    let (mut widget, notifier) = test_widget(WidgetVariant::WordLimited);
    widget.on_source_input("Hello").unwrap();
    widget
        .translate_with(&MockBackend::working().with_custom_response(|_| "Bonjour".to_string()))
        .await
        .unwrap();

    for backend in [MockBackend::failing(), MockBackend::malformed()] {
        let outcome = widget.translate_with(&backend).await.unwrap();
        assert!(matches!(outcome, CompletionOutcome::Failed(_)));
        assert_eq!(backend.request_count(), 1);
    }

    assert_eq!(widget.translated_text(), "Bonjour");
    assert_eq!(widget.state(), RequestState::Idle);
    assert_eq!(
        notifier.kinds(),
        vec![NotificationKind::RequestFailed, NotificationKind::RequestFailed]
    );
    assert!(widget.pending_notification().is_none());
}

#[tokio::test]
async fn test_reset_afterAnyState_shouldRestoreDefaults() {
    let (mut widget, _) = test_widget(WidgetVariant::WordLimited);
    let backend = MockBackend::working();
    widget.on_source_input("Hello there\nsecond line").unwrap();
    widget.select_source_language("hi").unwrap();
    widget.select_target_language("en").unwrap();
    widget.translate_with(&backend).await.unwrap();
    let empty_height = {
        let (fresh, _) = test_widget(WidgetVariant::WordLimited);
        fresh.controls().source_text.height()
    };

    widget.on_reset_click().unwrap();

    let controls = widget.controls();
    assert_eq!(widget.source_text(), "");
    assert_eq!(widget.translated_text(), "");
    assert_eq!(controls.source_language.selected_index(), controls.source_language.default_index());
    assert_eq!(controls.target_language.selected_index(), controls.target_language.default_index());
    assert_eq!(widget.source_language(), "en");
    assert_eq!(widget.target_language(), "fr");
    assert_eq!(widget.remaining_words(), Some(80));
    assert_eq!(controls.source_text.height(), empty_height);
    assert_eq!(controls.translated_text.height(), empty_height);
}

#[test]
fn test_reset_plainVariant_shouldHaveNoWordCount() {
    let (mut widget, _) = test_widget(WidgetVariant::Plain);
    widget.on_source_input("Hello").unwrap();

    widget.on_reset_click().unwrap();

    assert_eq!(widget.source_text(), "");
    assert_eq!(widget.remaining_words(), None);
}

#[test]
fn test_enterKey_withSubmitOnEnter_shouldSubmitWithoutLineBreak() {
    let (mut widget, _) = test_widget(WidgetVariant::WordLimited);
    widget.on_source_input("Hello").unwrap();

    let outcome = widget.on_source_key_down(Key::Enter).unwrap();

    let KeyOutcome::Submitted(ticket) = outcome else {
        panic!("Enter should submit, got {:?}", outcome);
    };
    assert_eq!(ticket.request.source_text, "Hello");
    assert!(!widget.source_text().contains('\n'));
    assert_eq!(widget.state(), RequestState::AwaitingResponse);
}

#[test]
fn test_enterKey_sameAsButton_shouldProduceSameRequest() {
    let (mut by_key, _) = test_widget(WidgetVariant::WordLimited);
    let (mut by_button, _) = test_widget(WidgetVariant::WordLimited);
    by_key.on_source_input("Good morning").unwrap();
    by_button.on_source_input("Good morning").unwrap();

    let KeyOutcome::Submitted(key_ticket) = by_key.on_source_key_down(Key::Enter).unwrap() else {
        panic!("Enter should submit");
    };
    let button_ticket = by_button.on_translate_click().unwrap();

    assert_eq!(key_ticket, button_ticket);
}

#[test]
fn test_enterKey_withSameLanguages_shouldNotInsertLineBreak() {
    let (mut widget, notifier) = test_widget(WidgetVariant::WordLimited);
    widget.on_source_input("Hello").unwrap();
    widget.select_target_language("en").unwrap();

    let result = widget.on_source_key_down(Key::Enter);

    assert!(matches!(result, Err(WidgetError::SameLanguage { .. })));
    assert_eq!(widget.source_text(), "Hello");
    assert_eq!(notifier.kinds(), vec![NotificationKind::SameLanguage]);
}

#[test]
fn test_customOptions_withSmallLimit_shouldUseConfiguredMaximum() {
    let options = WidgetOptions {
        max_words: 3,
        ..WidgetOptions::from(WidgetVariant::WordLimited)
    };
    let (mut widget, notifier) = test_widget_with_options(options);

    widget.on_source_input("one two three four").unwrap();

    assert_eq!(widget.source_text(), "one two three");
    assert_eq!(
        notifier.notifications()[0].message,
        "You have reached the maximum limit of 3 words."
    );
}
