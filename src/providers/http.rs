use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

use crate::errors::ProviderError;
use crate::providers::{TranslateRequest, TranslateResponse, TranslationBackend};

/// Path of the translation route, relative to the endpoint
const TRANSLATE_PATH: &str = "translate";

/// Error body returned by the backend on 4xx/5xx
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for the remote translation service
#[derive(Debug, Clone)]
pub struct HttpBackend {
    /// Fully resolved `.../translate` URL
    translate_url: Url,
    /// HTTP client for making requests
    client: Client,
}

impl HttpBackend {
    /// Create a client for the service rooted at `endpoint`
    ///
    /// `endpoint` may carry a path prefix (`http://host/api`); the translate
    /// route is resolved beneath it.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, ProviderError> {
        let translate_url = Self::resolve_translate_url(endpoint)?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::RequestFailed(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { translate_url, client })
    }

    /// URL the client posts translation requests to
    pub fn translate_url(&self) -> &Url {
        &self.translate_url
    }

    fn resolve_translate_url(endpoint: &str) -> Result<Url, ProviderError> {
        let mut base = Url::parse(endpoint.trim())
            .map_err(|e| ProviderError::RequestFailed(format!("Invalid endpoint '{}': {}", endpoint, e)))?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(ProviderError::RequestFailed(format!(
                "Unsupported endpoint scheme '{}'",
                base.scheme()
            )));
        }

        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        base.join(TRANSLATE_PATH)
            .map_err(|e| ProviderError::RequestFailed(format!("Invalid endpoint '{}': {}", endpoint, e)))
    }

    fn truncate_for_log(text: &str) -> String {
        if text.chars().count() > 500 {
            text.chars().take(500).collect()
        } else {
            text.to_string()
        }
    }
}

#[async_trait]
impl TranslationBackend for HttpBackend {
    async fn translate(&self, request: &TranslateRequest) -> Result<TranslateResponse, ProviderError> {
        debug!(
            "POST {} ({} -> {}, {} chars)",
            self.translate_url,
            request.source_lang,
            request.target_lang,
            request.source_text.chars().count()
        );

        let response = self
            .client
            .post(self.translate_url.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or_else(|_| Self::truncate_for_log(&body));
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        serde_json::from_str::<TranslateResponse>(&body).map_err(|e| {
            error!(
                "Failed to parse translation response: {}. Raw response (first 500 chars): {}",
                e,
                Self::truncate_for_log(&body)
            );
            ProviderError::ParseError(e.to_string())
        })
    }

    fn name(&self) -> &str {
        "http"
    }
}
