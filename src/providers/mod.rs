/*!
 * Translation backends the widget can send requests to.
 *
 * - `http`: the remote `POST /translate` service
 * - `mock`: in-process backend for tests and offline runs
 */

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Body of a translation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateRequest {
    /// Text to translate
    pub source_text: String,
    /// Language code of the text
    pub source_lang: String,
    /// Language code to translate into
    pub target_lang: String,
}

impl TranslateRequest {
    pub fn new(
        source_text: impl Into<String>,
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
    ) -> Self {
        Self {
            source_text: source_text.into(),
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
        }
    }
}

/// Body of a successful translation response; unknown fields are ignored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateResponse {
    /// Translated text, shown verbatim
    pub translated_text: String,
}

/// Common trait for translation backends
///
/// Implementations are shared between the event loop and spawned request
/// tasks, so they must be `Send + Sync`.
#[async_trait]
pub trait TranslationBackend: Send + Sync + Debug {
    /// Translate one request
    ///
    /// # Arguments
    /// * `request` - The text and language pair to translate
    ///
    /// # Returns
    /// * `Result<TranslateResponse, ProviderError>` - The translation or an error
    async fn translate(&self, request: &TranslateRequest) -> Result<TranslateResponse, ProviderError>;

    /// Short name used in log messages
    fn name(&self) -> &str;
}

pub mod http;
pub mod mock;
