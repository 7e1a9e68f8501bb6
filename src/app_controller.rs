use anyhow::{Context, Result};
use log::{debug, warn};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::app_config::Config;
use crate::errors::{ProviderError, WidgetError};
use crate::providers::http::HttpBackend;
use crate::providers::{TranslateResponse, TranslationBackend};
use crate::widget::controls::LanguageSelector;
use crate::widget::{CompletionOutcome, Key, KeyOutcome, Notifier, TranslationTicket, TranslationWidget};

// @module: Event loop driving the translation widget

/// User interaction delivered to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    /// Source field content replaced
    SourceInput(String),
    /// Key pressed in the source field
    SourceKeyDown(Key),
    SelectSourceLanguage(String),
    SelectTargetLanguage(String),
    TranslateClicked,
    ResetClicked,
    /// Open notification acknowledged
    Acknowledge,
}

/// Response of a spawned request, routed back to the loop
#[derive(Debug)]
pub struct Completion {
    pub ticket_id: u64,
    pub result: Result<TranslateResponse, ProviderError>,
}

/// Owns the widget and its backend; requests run as spawned tasks
pub struct Controller {
    // @field: Widget state, only touched from the loop
    widget: TranslationWidget,
    // @field: Shared backend used by request tasks
    backend: Arc<dyn TranslationBackend>,
    completions_tx: UnboundedSender<Completion>,
    completions_rx: UnboundedReceiver<Completion>,
}

impl Controller {
    pub fn new(widget: TranslationWidget, backend: Arc<dyn TranslationBackend>) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            widget,
            backend,
            completions_tx,
            completions_rx,
        }
    }

    // @method: Build widget and HTTP backend from configuration
    pub fn with_config(config: &Config, notifier: Box<dyn Notifier>) -> Result<Self> {
        let backend = HttpBackend::new(&config.endpoint, config.timeout())
            .context("Failed to create translation backend")?;
        let widget = Self::widget_from_config(config, notifier)?;
        Ok(Self::new(widget, Arc::new(backend)))
    }

    /// Build the widget described by `config`
    pub fn widget_from_config(config: &Config, notifier: Box<dyn Notifier>) -> Result<TranslationWidget> {
        let languages = &config.languages;
        let source = LanguageSelector::with_default(languages.source_options.iter().cloned(), &languages.default_source)
            .context("Invalid source language options")?;
        let target = LanguageSelector::with_default(languages.target_options.iter().cloned(), &languages.default_target)
            .context("Invalid target language options")?;

        Ok(TranslationWidget::new(config.widget.to_options(), source, target, notifier))
    }

    pub fn widget(&self) -> &TranslationWidget {
        &self.widget
    }

    pub fn backend(&self) -> &Arc<dyn TranslationBackend> {
        &self.backend
    }

    /// Detach the widget; later events are rejected and late responses dropped
    pub fn detach(&mut self) {
        self.widget.detach();
    }

    /// Apply one user event; translate triggers spawn a request task
    pub fn handle_event(&mut self, event: WidgetEvent) -> Result<(), WidgetError> {
        debug!("Event: {:?}", event);
        match event {
            WidgetEvent::SourceInput(text) => self.widget.on_source_input(text),
            WidgetEvent::SourceKeyDown(key) => match self.widget.on_source_key_down(key)? {
                KeyOutcome::Submitted(ticket) => {
                    self.dispatch(ticket);
                    Ok(())
                }
                KeyOutcome::Edited => Ok(()),
            },
            WidgetEvent::SelectSourceLanguage(code) => self.widget.select_source_language(&code),
            WidgetEvent::SelectTargetLanguage(code) => self.widget.select_target_language(&code),
            WidgetEvent::TranslateClicked => {
                let ticket = self.widget.on_translate_click()?;
                self.dispatch(ticket);
                Ok(())
            }
            WidgetEvent::ResetClicked => self.widget.on_reset_click(),
            WidgetEvent::Acknowledge => {
                self.widget.acknowledge();
                Ok(())
            }
        }
    }

    /// Wait for the next response and apply it; `None` when nothing is in flight
    pub async fn next_completion(&mut self) -> Option<CompletionOutcome> {
        if self.widget.in_flight() == 0 {
            return None;
        }
        let completion = self.completions_rx.recv().await?;
        Some(self.widget.complete_translation(completion.ticket_id, completion.result))
    }

    /// Apply responses until no request is in flight
    pub async fn settle(&mut self) -> Vec<CompletionOutcome> {
        let mut outcomes = Vec::new();
        while let Some(outcome) = self.next_completion().await {
            outcomes.push(outcome);
        }
        outcomes
    }

    /// Process events until the sender side closes, then detach the widget
    ///
    /// Responses are applied as they arrive, interleaved with events.
    pub async fn run(mut self, mut events: UnboundedReceiver<WidgetEvent>) -> TranslationWidget {
        loop {
            tokio::select! {
                event = events.recv() => match event {
                    Some(event) => {
                        if let Err(e) = self.handle_event(event) {
                            warn!("Event rejected: {}", e);
                        }
                    }
                    None => break,
                },
                Some(completion) = self.completions_rx.recv() => {
                    self.widget.complete_translation(completion.ticket_id, completion.result);
                }
            }
        }

        self.detach();
        self.widget
    }

    fn dispatch(&self, ticket: TranslationTicket) {
        let backend = Arc::clone(&self.backend);
        let tx = self.completions_tx.clone();
        tokio::spawn(async move {
            let result = backend.translate(&ticket.request).await;
            // Receiver is gone once the controller is dropped
            let _ = tx.send(Completion {
                ticket_id: ticket.id,
                result,
            });
        });
    }
}
