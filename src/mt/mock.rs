//! Mock Machine Translator for testing
//!
//! This module provides a deterministic, API-free translator for testing
//! the localization pipeline without API keys or network access. Every call
//! is counted and recorded so tests can assert how many requests a policy
//! issued and with which arguments.
//!
//! # Example
//!
//! ```ignore
//! use hortina_l10n::mt::{MachineTranslator, MockMode, MockTranslator};
//!
//! #[tokio::test]
//! async fn test_translation() {
//!     let mock = MockTranslator::new(MockMode::Suffix);
//!     let result = mock.translate_auto_source("tomate", "EN").await.unwrap();
//!     assert_eq!(result.text, "tomate_EN");
//!     assert_eq!(mock.call_count(), 1);
//! }
//! ```

use crate::mt::error::{MtError, MtResult};
use crate::mt::translator::{MachineTranslator, TranslationResult};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::time::Duration;

/// Mock translation modes for testing different scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Append target suffix: "tomate" → "tomate_EN"
    Suffix,

    /// Use predefined mappings for realistic translations
    /// (text, target_lang) → translation; unknown pairs fall back to suffix
    Mappings(HashMap<(String, String), String>),

    /// Simulate provider errors on every call
    Error(String),

    /// No-op: return input unchanged
    NoOp,
}

/// One recorded provider call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    WithSource {
        text: String,
        source_lang: String,
        target_lang: String,
    },
    AutoSource {
        text: String,
        target_lang: String,
    },
}

/// Mock translator that simulates various translation scenarios
#[derive(Debug)]
pub struct MockTranslator {
    mode: MockMode,
    /// Optional simulated network delay (in milliseconds)
    delay_ms: u64,
    /// Language reported by auto-detection unless overridden per text
    detected_language: String,
    detections: HashMap<String, String>,
    /// (text, source_lang, target_lang) → translation, explicit-source calls only
    source_mappings: HashMap<(String, String, String), String>,
    /// Source languages whose explicit-source calls fail
    failing_sources: HashSet<String>,
    /// Texts that fail on every call
    failing_texts: HashSet<String>,
    calls: Mutex<Vec<MockCall>>,
}

impl MockTranslator {
    /// Create a new MockTranslator with the given mode
    ///
    /// Auto-detection reports `ES` until configured otherwise.
    pub fn new(mode: MockMode) -> Self {
        Self {
            mode,
            delay_ms: 0,
            detected_language: "ES".to_string(),
            detections: HashMap::new(),
            source_mappings: HashMap::new(),
            failing_sources: HashSet::new(),
            failing_texts: HashSet::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Create a MockTranslator with simulated network delay
    pub fn with_delay(mode: MockMode, delay_ms: u64) -> Self {
        Self {
            delay_ms,
            ..Self::new(mode)
        }
    }

    /// Language auto-detection reports for every text without an override
    pub fn with_detected_language(mut self, lang: &str) -> Self {
        self.detected_language = lang.to_uppercase();
        self
    }

    /// Language auto-detection reports for one specific text
    pub fn with_detection(mut self, text: &str, lang: &str) -> Self {
        self.detections.insert(text.to_string(), lang.to_uppercase());
        self
    }

    /// Translation returned only when the caller asserts `source_lang`
    pub fn with_source_mapping(
        mut self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
        translation: &str,
    ) -> Self {
        self.source_mappings.insert(
            (
                text.to_string(),
                source_lang.to_uppercase(),
                target_lang.to_uppercase(),
            ),
            translation.to_string(),
        );
        self
    }

    /// Make explicit-source calls from `source_lang` fail
    pub fn with_failing_source(mut self, source_lang: &str) -> Self {
        self.failing_sources.insert(source_lang.to_uppercase());
        self
    }

    /// Make every call for `text` fail, whatever the languages
    pub fn with_failing_text(mut self, text: &str) -> Self {
        self.failing_texts.insert(text.to_string());
        self
    }

    /// Total number of provider calls issued so far
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn auto_call_count(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|c| matches!(c, MockCall::AutoSource { .. }))
            .count()
    }

    pub fn explicit_call_count(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|c| matches!(c, MockCall::WithSource { .. }))
            .count()
    }

    /// Snapshot of every call, in issue order
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().clone()
    }

    async fn apply_delay(&self) {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }

    /// Apply translation logic based on the mode
    fn apply_translation(&self, text: &str, target: &str) -> MtResult<String> {
        match &self.mode {
            MockMode::Suffix => Ok(format!("{}_{}", text, target)),
            MockMode::Mappings(map) => {
                let key = (text.to_string(), target.to_string());
                Ok(map
                    .get(&key)
                    .cloned()
                    .unwrap_or_else(|| format!("{}_{}", text, target)))
            }
            MockMode::Error(msg) => Err(MtError::TranslationError(msg.clone())),
            MockMode::NoOp => Ok(text.to_string()),
        }
    }

    fn check_failing_text(&self, text: &str) -> MtResult<()> {
        if self.failing_texts.contains(text) {
            return Err(MtError::NetworkError(format!(
                "Simulated failure for text '{}'",
                text
            )));
        }
        Ok(())
    }

    fn detect(&self, text: &str) -> String {
        self.detections
            .get(text)
            .cloned()
            .unwrap_or_else(|| self.detected_language.clone())
    }
}

#[async_trait]
impl MachineTranslator for MockTranslator {
    async fn translate_with_source(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> MtResult<TranslationResult> {
        self.calls.lock().push(MockCall::WithSource {
            text: text.to_string(),
            source_lang: source_lang.to_string(),
            target_lang: target_lang.to_string(),
        });
        self.apply_delay().await;

        self.check_failing_text(text)?;
        let source = source_lang.to_uppercase();
        if self.failing_sources.contains(&source) {
            return Err(MtError::NetworkError(format!(
                "Simulated failure for source {}",
                source
            )));
        }

        let key = (text.to_string(), source.clone(), target_lang.to_uppercase());
        let translated = match self.source_mappings.get(&key) {
            Some(mapped) => mapped.clone(),
            None => self.apply_translation(text, target_lang)?,
        };
        // DeepL echoes the asserted source language
        Ok(TranslationResult::new(translated, source))
    }

    async fn translate_auto_source(
        &self,
        text: &str,
        target_lang: &str,
    ) -> MtResult<TranslationResult> {
        self.calls.lock().push(MockCall::AutoSource {
            text: text.to_string(),
            target_lang: target_lang.to_string(),
        });
        self.apply_delay().await;

        self.check_failing_text(text)?;
        let translated = self.apply_translation(text, target_lang)?;
        Ok(TranslationResult::new(translated, self.detect(text)))
    }

    fn provider_name(&self) -> &str {
        "Mock Translator"
    }
}
