/*!
 * Typed handles for the controls the translation widget owns.
 */

use crate::errors::WidgetError;
use crate::language_utils;
use crate::widget::resize::{TextMetrics, fit_height};

/// Multi-line text control with an auto-resized height
#[derive(Debug, Clone)]
pub struct TextArea {
    value: String,
    height: u32,
    metrics: TextMetrics,
    max_height: u32,
}

impl TextArea {
    /// Create an empty text area already sized for its empty content
    pub fn new(metrics: TextMetrics, max_height: u32) -> Self {
        let mut area = Self {
            value: String::new(),
            height: 0,
            metrics,
            max_height,
        };
        area.adjust_height();
        area
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the content; height is left alone until `adjust_height`
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fit the height to the content, up to the cap
    pub fn adjust_height(&mut self) {
        self.height = fit_height(&self.value, &self.metrics, self.max_height);
    }
}

/// One entry in a language selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOption {
    /// Code sent to the backend
    pub code: String,
    /// Human readable label
    pub name: String,
}

impl LanguageOption {
    pub fn new(code: impl Into<String>) -> Self {
        let code = code.into();
        let name = language_utils::display_name(&code);
        Self { code, name }
    }
}

/// Drop-down of language options with a default selection
#[derive(Debug, Clone)]
pub struct LanguageSelector {
    options: Vec<LanguageOption>,
    selected: usize,
    default_index: usize,
}

impl LanguageSelector {
    /// Build a selector from option codes, defaulting to the first option
    pub fn new<I, S>(codes: I) -> Result<Self, WidgetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<LanguageOption> = codes.into_iter().map(LanguageOption::new).collect();
        if options.is_empty() {
            return Err(WidgetError::NoLanguageOptions);
        }

        Ok(Self {
            options,
            selected: 0,
            default_index: 0,
        })
    }

    /// Build a selector whose default (and initial) option is `default_code`
    pub fn with_default<I, S>(codes: I, default_code: &str) -> Result<Self, WidgetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selector = Self::new(codes)?;
        let index = selector.index_of(default_code)?;
        selector.default_index = index;
        selector.selected = index;
        Ok(selector)
    }

    pub fn options(&self) -> &[LanguageOption] {
        &self.options
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn default_index(&self) -> usize {
        self.default_index
    }

    pub fn selected(&self) -> &LanguageOption {
        &self.options[self.selected]
    }

    /// Code of the selected option
    pub fn value(&self) -> &str {
        &self.selected().code
    }

    /// Select the option with the given code
    pub fn select(&mut self, code: &str) -> Result<(), WidgetError> {
        self.selected = self.index_of(code)?;
        Ok(())
    }

    /// Restore the default option
    pub fn reset(&mut self) {
        self.selected = self.default_index;
    }

    fn index_of(&self, code: &str) -> Result<usize, WidgetError> {
        let wanted = code.trim();
        self.options
            .iter()
            .position(|option| option.code.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| WidgetError::UnknownLanguage(code.to_string()))
    }
}

/// Read-only label showing how many words may still be typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCountDisplay {
    remaining: usize,
}

impl WordCountDisplay {
    pub fn new(remaining: usize) -> Self {
        Self { remaining }
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn set(&mut self, remaining: usize) {
        self.remaining = remaining;
    }

    /// Text content of the label
    pub fn text(&self) -> String {
        self.remaining.to_string()
    }
}

/// Push button, enabled until the widget is detached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    enabled: bool,
}

impl Button {
    pub fn new() -> Self {
        Self { enabled: true }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

impl Default for Button {
    fn default() -> Self {
        Self::new()
    }
}

/// Every control the widget holds a handle to
#[derive(Debug, Clone)]
pub struct WidgetControls {
    pub source_language: LanguageSelector,
    pub target_language: LanguageSelector,
    pub source_text: TextArea,
    pub translated_text: TextArea,
    pub word_count: Option<WordCountDisplay>,
    pub translate_button: Button,
    pub reset_button: Button,
}
