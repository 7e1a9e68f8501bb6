/*!
 * The translation widget controller.
 *
 * `TranslationWidget` owns the controls and reacts to user interaction. It
 * never performs I/O itself: a translate trigger yields a `TranslationTicket`
 * carrying the request, and whoever sends it reports the outcome back through
 * `complete_translation`. `translate_with` runs both halves against a backend
 * for callers that do not need overlapping requests.
 */

use log::{debug, error, info, warn};
use std::collections::BTreeSet;

use crate::errors::{ProviderError, WidgetError};
use crate::language_utils;
use crate::providers::{TranslateRequest, TranslateResponse, TranslationBackend};
use crate::widget::controls::{Button, LanguageSelector, TextArea, WidgetControls, WordCountDisplay};
use crate::widget::notify::{Notification, NotificationKind, Notifier};
use crate::widget::options::WidgetOptions;
use crate::widget::word_limit::WordLimit;

/// Keys the source field reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Line break
    Enter,
    /// A printable character
    Char(char),
    /// Delete the last character
    Backspace,
}

/// Request lifecycle as seen by the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    AwaitingResponse,
}

/// A dispatched translation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationTicket {
    /// Sequence number, unique per widget
    pub id: u64,
    /// Payload to send to the backend
    pub request: TranslateRequest,
}

/// What a key press did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The key's default edit was applied to the source field
    Edited,
    /// Enter was intercepted and a translation was dispatched
    Submitted(TranslationTicket),
}

/// What reporting a response did to the widget
#[derive(Debug)]
pub enum CompletionOutcome {
    /// The translation was written to the output field
    Applied,
    /// The request failed; the output field is unchanged
    Failed(ProviderError),
    /// The widget was detached before the response arrived, or the ticket
    /// was not outstanding
    Discarded,
}

/// Headless translation widget
#[derive(Debug)]
pub struct TranslationWidget {
    controls: WidgetControls,
    options: WidgetOptions,
    word_limit: Option<WordLimit>,
    notifier: Box<dyn Notifier>,
    pending_ack: Option<Notification>,
    outstanding: BTreeSet<u64>,
    next_ticket: u64,
    attached: bool,
}

impl TranslationWidget {
    /// Build a widget around two language selectors
    pub fn new(
        options: WidgetOptions,
        source_language: LanguageSelector,
        target_language: LanguageSelector,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        let word_limit = options
            .enforce_word_limit
            .then(|| WordLimit::new(options.max_words));

        let controls = WidgetControls {
            source_language,
            target_language,
            source_text: TextArea::new(options.metrics, options.max_height),
            translated_text: TextArea::new(options.metrics, options.max_height),
            word_count: word_limit.map(|limit| WordCountDisplay::new(limit.max_words())),
            translate_button: Button::new(),
            reset_button: Button::new(),
        };

        debug!(
            "Widget attached (word limit: {:?}, submit on enter: {})",
            word_limit.map(|l| l.max_words()),
            options.submit_on_enter
        );

        Self {
            controls,
            options,
            word_limit,
            notifier,
            pending_ack: None,
            outstanding: BTreeSet::new(),
            next_ticket: 1,
            attached: true,
        }
    }

    pub fn controls(&self) -> &WidgetControls {
        &self.controls
    }

    pub fn options(&self) -> &WidgetOptions {
        &self.options
    }

    pub fn source_text(&self) -> &str {
        self.controls.source_text.value()
    }

    pub fn translated_text(&self) -> &str {
        self.controls.translated_text.value()
    }

    pub fn source_language(&self) -> &str {
        self.controls.source_language.value()
    }

    pub fn target_language(&self) -> &str {
        self.controls.target_language.value()
    }

    /// Remaining word budget shown to the user; `None` without a word limit
    pub fn remaining_words(&self) -> Option<usize> {
        self.controls.word_count.as_ref().map(WordCountDisplay::remaining)
    }

    pub fn state(&self) -> RequestState {
        if !self.outstanding.is_empty() {
            RequestState::AwaitingResponse
        } else {
            RequestState::Idle
        }
    }

    /// Number of requests dispatched and not yet completed
    pub fn in_flight(&self) -> usize {
        self.outstanding.len()
    }

    /// Acknowledge-required notification that is still open
    pub fn pending_notification(&self) -> Option<&Notification> {
        self.pending_ack.as_ref()
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Acknowledge the open notification, returning it
    pub fn acknowledge(&mut self) -> Option<Notification> {
        self.pending_ack.take()
    }

    /// Source field content changed
    pub fn on_source_input(&mut self, text: impl Into<String>) -> Result<(), WidgetError> {
        self.ensure_interactive()?;
        self.controls.source_text.set_value(text);
        self.controls.source_text.adjust_height();
        self.enforce_word_limit();
        Ok(())
    }

    /// Key pressed while the source field has focus
    pub fn on_source_key_down(&mut self, key: Key) -> Result<KeyOutcome, WidgetError> {
        self.ensure_interactive()?;

        if key == Key::Enter && self.options.submit_on_enter {
            return self.begin_translation().map(KeyOutcome::Submitted);
        }

        let mut text = self.controls.source_text.value().to_string();
        match key {
            Key::Enter => text.push('\n'),
            Key::Char(c) => text.push(c),
            Key::Backspace => {
                text.pop();
            }
        }
        self.on_source_input(text)?;
        Ok(KeyOutcome::Edited)
    }

    pub fn select_source_language(&mut self, code: &str) -> Result<(), WidgetError> {
        self.ensure_interactive()?;
        self.controls.source_language.select(code)
    }

    pub fn select_target_language(&mut self, code: &str) -> Result<(), WidgetError> {
        self.ensure_interactive()?;
        self.controls.target_language.select(code)
    }

    /// Translate button clicked
    pub fn on_translate_click(&mut self) -> Result<TranslationTicket, WidgetError> {
        self.ensure_interactive()?;
        self.begin_translation()
    }

    /// Reset button clicked
    pub fn on_reset_click(&mut self) -> Result<(), WidgetError> {
        self.ensure_interactive()?;

        self.controls.source_text.clear();
        self.controls.translated_text.clear();
        self.controls.source_language.reset();
        self.controls.target_language.reset();
        self.controls.source_text.adjust_height();
        self.controls.translated_text.adjust_height();

        if let (Some(display), Some(limit)) = (self.controls.word_count.as_mut(), self.word_limit) {
            display.set(limit.max_words());
        }

        debug!("Widget reset");
        Ok(())
    }

    /// Report the outcome of a dispatched request
    ///
    /// Responses are applied in arrival order; when requests overlap, the
    /// last one to arrive determines the output.
    pub fn complete_translation(
        &mut self,
        ticket_id: u64,
        result: Result<TranslateResponse, ProviderError>,
    ) -> CompletionOutcome {
        if !self.outstanding.remove(&ticket_id) {
            warn!("Ignoring response for unknown request #{}", ticket_id);
            return CompletionOutcome::Discarded;
        }

        if !self.attached {
            debug!("Discarding response for request #{} after detach", ticket_id);
            return CompletionOutcome::Discarded;
        }

        match result {
            Ok(response) => {
                info!(
                    "Request #{} translated ({} chars)",
                    ticket_id,
                    response.translated_text.chars().count()
                );
                self.controls.translated_text.set_value(response.translated_text);
                self.controls.translated_text.adjust_height();
                CompletionOutcome::Applied
            }
            Err(e) => {
                error!("Translation request #{} failed: {}", ticket_id, e);
                self.notifier.notify(&Notification::toast(
                    NotificationKind::RequestFailed,
                    format!("Translation failed: {}", e),
                ));
                CompletionOutcome::Failed(e)
            }
        }
    }

    /// Trigger a translation and wait for `backend` to answer
    pub async fn translate_with<B>(&mut self, backend: &B) -> Result<CompletionOutcome, WidgetError>
    where
        B: TranslationBackend + ?Sized,
    {
        let ticket = self.on_translate_click()?;
        let result = backend.translate(&ticket.request).await;
        Ok(self.complete_translation(ticket.id, result))
    }

    /// Detach all handlers; later events are rejected and late responses dropped
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        self.controls.translate_button.set_enabled(false);
        self.controls.reset_button.set_enabled(false);
        debug!("Widget detached with {} request(s) in flight", self.in_flight());
    }

    fn ensure_interactive(&self) -> Result<(), WidgetError> {
        if !self.attached {
            return Err(WidgetError::Detached);
        }
        if let Some(notification) = &self.pending_ack {
            return Err(WidgetError::AwaitingAcknowledgement(notification.message.clone()));
        }
        Ok(())
    }

    fn begin_translation(&mut self) -> Result<TranslationTicket, WidgetError> {
        let source_lang = self.controls.source_language.value().to_string();
        let target_lang = self.controls.target_language.value().to_string();

        if self.options.reject_same_language && language_utils::language_codes_match(&source_lang, &target_lang) {
            let error = WidgetError::SameLanguage { language: source_lang };
            warn!("Translation blocked: {}", error);
            self.raise_blocking(NotificationKind::SameLanguage, error.to_string());
            return Err(error);
        }

        let ticket = TranslationTicket {
            id: self.next_ticket,
            request: TranslateRequest::new(self.controls.source_text.value(), source_lang, target_lang),
        };
        self.next_ticket += 1;
        self.outstanding.insert(ticket.id);

        debug!(
            "Dispatching request #{} ({} -> {}), {} in flight",
            ticket.id,
            ticket.request.source_lang,
            ticket.request.target_lang,
            self.in_flight()
        );
        Ok(ticket)
    }

    fn enforce_word_limit(&mut self) {
        let Some(limit) = self.word_limit else {
            return;
        };

        let outcome = limit.enforce(self.controls.source_text.value());
        if let Some(display) = self.controls.word_count.as_mut() {
            display.set(outcome.remaining);
        }

        if let Some(truncated) = outcome.truncated {
            debug!("Source text cut from {} to {} words", outcome.word_count, limit.max_words());
            self.controls.source_text.set_value(truncated);
            self.raise_blocking(NotificationKind::WordLimitReached, limit.limit_message());
            self.controls.source_text.adjust_height();
        }
    }

    fn raise_blocking(&mut self, kind: NotificationKind, message: String) {
        let notification = Notification::blocking(kind, message);
        self.notifier.notify(&notification);
        self.pending_ack = Some(notification);
    }
}
