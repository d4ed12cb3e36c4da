//! Machine Translation trait and utilities
//!
//! This module defines the `MachineTranslator` trait for provider abstraction,
//! so the localization policy can run against DeepL in production and a
//! deterministic mock in tests.
//!
//! # Example
//!
//! ```ignore
//! use hortina_l10n::mt::{DeepLProvider, MachineTranslator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = DeepLProvider::from_env()?;
//!
//!     // Caller asserts the source language
//!     let result = provider.translate_with_source("tomate", "ES", "EN").await?;
//!     println!("{}", result.text); // "tomato"
//!
//!     // Provider detects the source language
//!     let result = provider.translate_auto_source("tomate", "EN").await?;
//!     println!("{} ({})", result.text, result.detected_source_language);
//!
//!     Ok(())
//! }
//! ```

use crate::mt::error::{MtError, MtResult};
use async_trait::async_trait;

/// Outcome of a single provider call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    /// The translated text
    pub text: String,
    /// ISO code the provider inferred or echoed for the source, upper-cased.
    /// Empty when the provider did not report one.
    pub detected_source_language: String,
}

impl TranslationResult {
    pub fn new(text: impl Into<String>, detected_source_language: impl AsRef<str>) -> Self {
        Self {
            text: text.into(),
            detected_source_language: detected_source_language.as_ref().to_uppercase(),
        }
    }
}

/// Generic trait for machine translation providers
///
/// Every call performs exactly one outbound request. Implementations never
/// retry and never cache; both concerns belong to the caller.
#[async_trait]
pub trait MachineTranslator: Send + Sync {
    /// Translate `text` from an explicitly asserted source language
    ///
    /// # Arguments
    ///
    /// * `text` - The text to translate, non-empty
    /// * `source_lang` - Source language code (e.g., "ES", "pt-BR")
    /// * `target_lang` - Target language code (e.g., "EN", "en-GB")
    ///
    /// # Returns
    ///
    /// * `Ok(TranslationResult)` - The translated text and the source language
    /// * `Err(MtError)` - On invalid arguments, network or provider failure
    async fn translate_with_source(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> MtResult<TranslationResult>;

    /// Translate `text`, letting the provider detect the source language
    ///
    /// The detected language is reported in
    /// [`TranslationResult::detected_source_language`].
    async fn translate_auto_source(
        &self,
        text: &str,
        target_lang: &str,
    ) -> MtResult<TranslationResult>;

    /// Get the name of this translation provider
    ///
    /// Used for logging to identify which provider handled a translation.
    fn provider_name(&self) -> &str;
}

/// Normalize a language code to the upper-case form DeepL expects
///
/// - `es` → `ES`
/// - `en-gb` → `EN-GB`
/// - `pt_br` → `PT-BR`
pub fn normalize_lang(lang: &str) -> String {
    lang.trim().replace('_', "-").to_uppercase()
}

/// Base language subtag of a code, upper-cased
///
/// `EN-GB` → `EN`, `zh-Hans` → `ZH`, `es` → `ES`
pub fn base_lang(lang: &str) -> String {
    let normalized = normalize_lang(lang);
    normalized
        .split('-')
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Validate that a language code is in acceptable format
///
/// Checks that the code is non-empty and contains only alphanumeric
/// characters, hyphens, and underscores.
///
/// ```ignore
/// validate_lang("ES")?; // OK
/// validate_lang("en-GB")?; // OK
/// validate_lang("invalid@code").unwrap_err(); // Error
/// ```
pub fn validate_lang(lang: &str) -> MtResult<()> {
    if lang.trim().is_empty() {
        return Err(MtError::InvalidLocale("Language code is empty".to_string()));
    }

    if !lang
        .trim()
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(MtError::InvalidLocale(format!(
            "Invalid characters in language code: {}",
            lang
        )));
    }

    Ok(())
}

/// Reject empty text before it reaches a provider
pub fn validate_text(text: &str) -> MtResult<()> {
    if text.is_empty() {
        return Err(MtError::InvalidInput("Text to translate is empty".to_string()));
    }
    Ok(())
}
