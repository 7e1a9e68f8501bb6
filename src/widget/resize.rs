//! Auto-resize model for text controls.

use serde::{Deserialize, Serialize};

/// Default height cap of an auto-resized text control
pub const DEFAULT_MAX_HEIGHT: u32 = 300;

/// Font and layout metrics used to estimate a control's content height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextMetrics {
    /// Height of one rendered line
    #[serde(default = "default_line_height")]
    pub line_height: u32,
    /// Top plus bottom padding of the control
    #[serde(default = "default_padding")]
    pub padding: u32,
    /// Characters that fit on one rendered line before wrapping
    #[serde(default = "default_columns")]
    pub columns: usize,
}

fn default_line_height() -> u32 {
    20
}

fn default_padding() -> u32 {
    16
}

fn default_columns() -> usize {
    60
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            line_height: default_line_height(),
            padding: default_padding(),
            columns: default_columns(),
        }
    }
}

impl TextMetrics {
    /// Number of rendered lines after soft wrapping; never less than one
    pub fn visual_lines(&self, text: &str) -> usize {
        let columns = self.columns.max(1);
        text.split('\n')
            .map(|line| line.chars().count().div_ceil(columns).max(1))
            .sum()
    }

    /// Full scroll height of the text, ignoring any cap
    pub fn content_height(&self, text: &str) -> u32 {
        let lines = u32::try_from(self.visual_lines(text)).unwrap_or(u32::MAX);
        lines.saturating_mul(self.line_height).saturating_add(self.padding)
    }
}

/// Height an auto-resized control takes for `text`: its content height, capped
pub fn fit_height(text: &str, metrics: &TextMetrics, max_height: u32) -> u32 {
    metrics.content_height(text).min(max_height)
}
