/*!
 * Mock backend implementations for testing.
 *
 * - `MockBackend::working()` - Always succeeds with a tagged translation
 * - `MockBackend::failing()` - Always fails with an API error
 * - `MockBackend::malformed()` - Fails the way an unparsable body does
 */

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::errors::ProviderError;
use crate::providers::{TranslateRequest, TranslateResponse, TranslationBackend};

/// Behavior mode for the mock backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds
    Working,
    /// Always fails with an error status
    Failing,
    /// Succeeds at transport level but the body cannot be parsed
    Malformed,
}

/// Mock backend for testing widget behavior
#[derive(Debug, Clone)]
pub struct MockBackend {
    /// Behavior mode
    behavior: MockBehavior,
    /// Every request received, in arrival order; shared between clones
    requests: Arc<Mutex<Vec<TranslateRequest>>>,
    /// Request counter; shared between clones
    request_count: Arc<AtomicUsize>,
    /// Custom response generator (optional)
    custom_response: Option<fn(&TranslateRequest) -> String>,
    /// Per-request delay in milliseconds (optional)
    delay_ms: Option<fn(&TranslateRequest) -> u64>,
}

impl MockBackend {
    /// Create a new mock backend with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            requests: Arc::new(Mutex::new(Vec::new())),
            request_count: Arc::new(AtomicUsize::new(0)),
            custom_response: None,
            delay_ms: None,
        }
    }

    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    pub fn malformed() -> Self {
        Self::new(MockBehavior::Malformed)
    }

    /// Set a custom response generator
    pub fn with_custom_response(mut self, generator: fn(&TranslateRequest) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Delay each response by a per-request number of milliseconds
    pub fn with_delay(mut self, delay_ms: fn(&TranslateRequest) -> u64) -> Self {
        self.delay_ms = Some(delay_ms);
        self
    }

    /// Number of requests received
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<TranslateRequest> {
        self.requests.lock().clone()
    }

    fn default_translation(request: &TranslateRequest) -> String {
        format!("[{}] {}", request.target_lang, request.source_text)
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::working()
    }
}

#[async_trait]
impl TranslationBackend for MockBackend {
    async fn translate(&self, request: &TranslateRequest) -> Result<TranslateResponse, ProviderError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().push(request.clone());

        if let Some(delay) = self.delay_ms {
            tokio::time::sleep(Duration::from_millis(delay(request))).await;
        }

        match self.behavior {
            MockBehavior::Working => {
                let translated_text = match self.custom_response {
                    Some(generator) => generator(request),
                    None => Self::default_translation(request),
                };
                Ok(TranslateResponse { translated_text })
            }
            MockBehavior::Failing => Err(ProviderError::ApiError {
                status_code: 500,
                message: "Translation failed.".to_string(),
            }),
            MockBehavior::Malformed => Err(ProviderError::ParseError(
                "missing field `translated_text`".to_string(),
            )),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
