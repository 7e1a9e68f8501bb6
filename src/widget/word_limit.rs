/*!
 * Word counting and hard word-limit enforcement for the source field.
 *
 * A word is a maximal run of word characters (letters, digits, marks and
 * underscores). Punctuation and whitespace only ever separate words.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Default maximum number of words accepted by the source field
pub const DEFAULT_MAX_WORDS: usize = 80;

static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w+\b").expect("word pattern is a valid regex"));

/// Split text into word tokens, in order of appearance
pub fn word_tokens(text: &str) -> Vec<&str> {
    WORD_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Count the word tokens in text
pub fn count_words(text: &str) -> usize {
    WORD_PATTERN.find_iter(text).count()
}

/// Result of checking a text against the word limit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordLimitOutcome {
    /// Number of words in the checked text
    pub word_count: usize,
    /// Remaining words to display; 0 when the limit was exceeded
    pub remaining: usize,
    /// Replacement content when the text had to be cut back to the limit
    pub truncated: Option<String>,
}

impl WordLimitOutcome {
    /// Whether the text went over the limit
    pub fn exceeded(&self) -> bool {
        self.truncated.is_some()
    }
}

/// Hard word limit: text over the limit is cut back to exactly `max_words` tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordLimit {
    max_words: usize,
}

impl WordLimit {
    pub fn new(max_words: usize) -> Self {
        Self { max_words }
    }

    pub fn max_words(&self) -> usize {
        self.max_words
    }

    /// Remaining word budget for the text
    pub fn remaining(&self, text: &str) -> usize {
        self.max_words.saturating_sub(count_words(text))
    }

    /// Message shown when the limit is reached
    pub fn limit_message(&self) -> String {
        format!("You have reached the maximum limit of {} words.", self.max_words)
    }

    /// Check text against the limit and compute the truncation, if any
    ///
    /// Truncated content keeps the first `max_words` tokens joined by single
    /// spaces; the original punctuation and line breaks are dropped.
    pub fn enforce(&self, text: &str) -> WordLimitOutcome {
        let tokens = word_tokens(text);
        let word_count = tokens.len();

        if word_count > self.max_words {
            WordLimitOutcome {
                word_count,
                remaining: 0,
                truncated: Some(tokens[..self.max_words].join(" ")),
            }
        } else {
            WordLimitOutcome {
                word_count,
                remaining: self.max_words - word_count,
                truncated: None,
            }
        }
    }
}

impl Default for WordLimit {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_WORDS)
    }
}
