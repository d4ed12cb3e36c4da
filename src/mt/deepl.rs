//! DeepL API provider for machine translation
//!
//! This module integrates with the DeepL v2 `translate` endpoint.
//!
//! # Authentication
//!
//! The provider loads the API key from the `DEEPL_API_KEY` environment
//! variable. Free-tier keys end in `:fx` and are routed to
//! `api-free.deepl.com`; all other keys go to `api.deepl.com`.
//!
//! # Example
//!
//! ```ignore
//! use hortina_l10n::mt::{DeepLProvider, MachineTranslator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = DeepLProvider::from_env()?;
//!     let result = provider.translate_auto_source("regar", "EN").await?;
//!     println!("{} (from {})", result.text, result.detected_source_language);
//!     Ok(())
//! }
//! ```

use crate::mt::error::{MtError, MtResult};
use crate::mt::translator::{
    MachineTranslator, TranslationResult, normalize_lang, validate_lang, validate_text,
};
use async_trait::async_trait;
use serde::Deserialize;

/// DeepL API v2 provider
#[derive(Clone)]
pub struct DeepLProvider {
    /// API key for authentication
    api_key: String,
    /// HTTP client for async requests
    client: reqwest::Client,
    /// Base URL, without the `/v2/translate` path
    base_url: String,
}

/// Response body of `POST /v2/translate`
#[derive(Debug, Deserialize)]
struct DeepLResponse {
    translations: Vec<DeepLTranslation>,
}

#[derive(Debug, Deserialize)]
struct DeepLTranslation {
    #[serde(default)]
    detected_source_language: Option<String>,
    text: String,
}

impl DeepLProvider {
    const FREE_API_URL: &'static str = "https://api-free.deepl.com";
    const PRO_API_URL: &'static str = "https://api.deepl.com";

    /// Suffix DeepL appends to free-tier authentication keys
    const FREE_KEY_SUFFIX: &'static str = ":fx";

    /// Maximum request body DeepL accepts (128 KiB); text beyond that is rejected early
    const MAX_TEXT_BYTES: usize = 128 * 1024;

    /// Create a new DeepLProvider with an explicit API key
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` - New provider instance
    /// * `Err(MtError)` - If API key is empty or HTTP client creation fails
    pub fn new(api_key: String) -> MtResult<Self> {
        if api_key.trim().is_empty() {
            return Err(MtError::ConfigError("API key cannot be empty".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| MtError::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        let base_url = Self::default_base_url(&api_key).to_string();

        Ok(Self {
            api_key,
            client,
            base_url,
        })
    }

    /// Create a DeepLProvider from the `DEEPL_API_KEY` environment variable
    pub fn from_env() -> MtResult<Self> {
        Self::from_env_value(std::env::var("DEEPL_API_KEY").ok())
    }

    fn from_env_value(api_key: Option<String>) -> MtResult<Self> {
        let api_key = api_key.ok_or_else(|| {
            MtError::ConfigError("DEEPL_API_KEY environment variable not set".to_string())
        })?;

        Self::new(api_key)
    }

    /// Point the provider at a different host (proxy, local stub server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn default_base_url(api_key: &str) -> &'static str {
        if api_key.trim().ends_with(Self::FREE_KEY_SUFFIX) {
            Self::FREE_API_URL
        } else {
            Self::PRO_API_URL
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/v2/translate", self.base_url)
    }

    /// Build the form fields for one request
    ///
    /// `source_lang` is omitted entirely when `None` so the provider detects it.
    fn form_fields(
        text: &str,
        source_lang: Option<&str>,
        target_lang: &str,
    ) -> Vec<(&'static str, String)> {
        let mut fields = vec![("text", text.to_string())];
        if let Some(source) = source_lang {
            fields.push(("source_lang", normalize_lang(source)));
        }
        fields.push(("target_lang", normalize_lang(target_lang)));
        fields.push(("enable_beta_languages", "1".to_string()));
        fields
    }

    /// Pick the first translation out of a response body
    fn parse_response(body: &str) -> MtResult<TranslationResult> {
        let response: DeepLResponse = serde_json::from_str(body).map_err(|e| {
            MtError::TranslationError(format!("Failed to parse API response: {}", e))
        })?;

        let first = response.translations.into_iter().next().ok_or_else(|| {
            MtError::TranslationError("Invalid API response: empty 'translations' array".to_string())
        })?;

        Ok(TranslationResult::new(
            first.text,
            first.detected_source_language.unwrap_or_default(),
        ))
    }

    fn validate_request(text: &str, source_lang: Option<&str>, target_lang: &str) -> MtResult<()> {
        validate_text(text)?;
        if let Some(source) = source_lang {
            validate_lang(source)?;
        }
        validate_lang(target_lang)?;

        if text.len() > Self::MAX_TEXT_BYTES {
            return Err(MtError::InvalidInput(format!(
                "Text exceeds maximum length of {} bytes",
                Self::MAX_TEXT_BYTES
            )));
        }
        Ok(())
    }

    /// Issue exactly one translate request
    async fn request(
        &self,
        text: &str,
        source_lang: Option<&str>,
        target_lang: &str,
    ) -> MtResult<TranslationResult> {
        Self::validate_request(text, source_lang, target_lang)?;

        let response = self
            .client
            .post(self.endpoint())
            .header(
                reqwest::header::AUTHORIZATION,
                format!("DeepL-Auth-Key {}", self.api_key),
            )
            .form(&Self::form_fields(text, source_lang, target_lang))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(if status.is_client_error() {
                MtError::ConfigError(format!("API client error ({}): {}", status, error_text))
            } else {
                MtError::TranslationError(format!("API server error ({}): {}", status, error_text))
            });
        }

        let body = response.text().await?;
        Self::parse_response(&body)
    }
}

impl std::fmt::Debug for DeepLProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeepLProvider")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl MachineTranslator for DeepLProvider {
    async fn translate_with_source(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> MtResult<TranslationResult> {
        self.request(text, Some(source_lang), target_lang).await
    }

    async fn translate_auto_source(
        &self,
        text: &str,
        target_lang: &str,
    ) -> MtResult<TranslationResult> {
        self.request(text, None, target_lang).await
    }

    fn provider_name(&self) -> &str {
        "DeepL"
    }
}
