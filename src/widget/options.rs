use serde::{Deserialize, Serialize};

use crate::widget::resize::{DEFAULT_MAX_HEIGHT, TextMetrics};
use crate::widget::word_limit::DEFAULT_MAX_WORDS;

/// Preset behavior sets for the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetVariant {
    /// Word limit, Enter submits, identical languages rejected
    #[default]
    WordLimited,
    /// No word limit, Enter inserts a line break, no language check
    Plain,
}

impl WidgetVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WordLimited => "word-limited",
            Self::Plain => "plain",
        }
    }
}

impl std::fmt::Display for WidgetVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for WidgetVariant {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "word-limited" | "word_limited" | "wordlimited" => Ok(Self::WordLimited),
            "plain" => Ok(Self::Plain),
            _ => Err(anyhow::anyhow!("Invalid widget variant: {}", s)),
        }
    }
}

/// Resolved behavior switches of a widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetOptions {
    /// Cut the source text back to `max_words`
    pub enforce_word_limit: bool,
    /// Enter in the source field submits instead of inserting a line break
    pub submit_on_enter: bool,
    /// Refuse to translate when source and target language are the same
    pub reject_same_language: bool,
    pub max_words: usize,
    /// Height cap of both text areas
    pub max_height: u32,
    pub metrics: TextMetrics,
}

impl From<WidgetVariant> for WidgetOptions {
    fn from(variant: WidgetVariant) -> Self {
        let word_limited = variant == WidgetVariant::WordLimited;
        Self {
            enforce_word_limit: word_limited,
            submit_on_enter: word_limited,
            reject_same_language: word_limited,
            max_words: DEFAULT_MAX_WORDS,
            max_height: DEFAULT_MAX_HEIGHT,
            metrics: TextMetrics::default(),
        }
    }
}

impl Default for WidgetOptions {
    fn default() -> Self {
        WidgetVariant::default().into()
    }
}
