//! Translation policy for user-facing backend text
//!
//! [`Localizer`] decides how a string gets translated, consults the shared
//! [`TranslationCache`] first, and degrades to the original text whenever the
//! provider fails. None of its operations return an error: in the worst case
//! the text simply stays in its original language.
//!
//! # Short-word disambiguation
//!
//! Provider language detection is unreliable on very short inputs such as
//! plant names or one-word statuses. When an auto-detected translation comes
//! back for a single token of at most five characters and the reported
//! source is not one of the app languages (`ES`, `GL`, `EN`), the text is
//! translated again asserting Spanish as the source, and that result wins.

use crate::localizable::Localizable;
use crate::mt::translator::{base_lang, normalize_lang};
use crate::mt::{
    DeepLProvider, MachineTranslator, MtResult, SourceLang, TranslationCache, TranslationKey,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Languages the app ships UI strings for; detections outside this set are suspect
const PLAUSIBLE_SOURCES: [&str; 3] = ["ES", "GL", "EN"];

/// Source asserted when short-word detection is rejected
const FALLBACK_SOURCE: &str = "ES";

const SHORT_WORD_MAX_CHARS: usize = 5;

#[derive(Clone)]
pub struct Localizer {
    translator: Arc<dyn MachineTranslator>,
    cache: Arc<TranslationCache>,
}

impl Localizer {
    pub fn new(translator: Arc<dyn MachineTranslator>, cache: Arc<TranslationCache>) -> Self {
        Self { translator, cache }
    }

    /// DeepL-backed localizer with a fresh cache, key from `DEEPL_API_KEY`
    pub fn deepl_from_env() -> MtResult<Self> {
        let provider = DeepLProvider::from_env()?;
        Ok(Self::new(
            Arc::new(provider),
            Arc::new(TranslationCache::new()),
        ))
    }

    pub fn cache(&self) -> &Arc<TranslationCache> {
        &self.cache
    }

    pub fn provider_name(&self) -> &str {
        self.translator.provider_name()
    }

    /// Translate `text` into `target_lang`, detecting the source language
    ///
    /// Blank input is returned unchanged without touching cache or network.
    /// Applies the short-word disambiguation fallback and caches the final
    /// choice under the auto-detect namespace.
    pub async fn translate_auto(&self, text: &str, target_lang: &str) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }

        let target = normalize_lang(target_lang);
        let key = TranslationKey::auto(&target, text);
        if let Some(hit) = self.cache.get(&key) {
            debug!(key = %key, "translation cache hit");
            return hit;
        }

        let detected = match self.translator.translate_auto_source(text, &target).await {
            Ok(result) => result,
            Err(e) => {
                warn!(
                    error = %e,
                    provider = self.provider_name(),
                    target = %target,
                    "auto translation failed, keeping original text"
                );
                return text.to_string();
            }
        };

        let translated = if needs_disambiguation(text, &detected.detected_source_language) {
            debug!(
                text,
                detected = %detected.detected_source_language,
                "implausible source for short word, retrying as {}",
                FALLBACK_SOURCE
            );
            match self
                .translator
                .translate_with_source(text, FALLBACK_SOURCE, &target)
                .await
            {
                Ok(result) => result.text,
                Err(e) => {
                    warn!(error = %e, "fallback translation failed, keeping detected result");
                    detected.text
                }
            }
        } else {
            detected.text
        };

        self.cache.put(key, translated)
    }

    /// Translate `text` from `source_lang` into `target_lang`
    ///
    /// A blank (or `"auto"`) source lets the provider detect the language;
    /// anything else is asserted as the source. No short-word fallback is
    /// applied on this path. Results are cached per literal source, so a
    /// detected translation and an explicit one never share an entry.
    pub async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }

        let target = normalize_lang(target_lang);
        let source = source_lang.trim();
        let source = if source.is_empty() || source.eq_ignore_ascii_case("auto") {
            SourceLang::Detect
        } else {
            SourceLang::Explicit(normalize_lang(source))
        };

        let key = TranslationKey::new(source, &target, text);
        if let Some(hit) = self.cache.get(&key) {
            debug!(key = %key, "translation cache hit");
            return hit;
        }

        let outcome = match &key.source {
            SourceLang::Explicit(code) => {
                self.translator
                    .translate_with_source(text, code, &target)
                    .await
            }
            _ => self.translator.translate_auto_source(text, &target).await,
        };

        match outcome {
            Ok(result) => self.cache.put(key, result.text),
            Err(e) => {
                warn!(
                    error = %e,
                    provider = self.provider_name(),
                    key = %key,
                    "translation failed, keeping original text"
                );
                text.to_string()
            }
        }
    }

    /// [`translate_auto`](Self::translate_auto) for optional fields; `None` stays `None`
    pub async fn translate_opt(&self, text: Option<&str>, target_lang: &str) -> Option<String> {
        match text {
            Some(text) => Some(self.translate_auto(text, target_lang).await),
            None => None,
        }
    }

    /// Translate each string independently, preserving order
    pub async fn translate_all(&self, texts: &[String], target_lang: &str) -> Vec<String> {
        let mut translated = Vec::with_capacity(texts.len());
        for text in texts {
            translated.push(self.translate_auto(text, target_lang).await);
        }
        translated
    }

    /// Localized copy of one entity; the original is left untouched
    pub async fn localize<T: Localizable>(&self, entity: &T, target_lang: &str) -> T {
        debug!(fields = ?T::TRANSLATABLE_FIELDS, target = target_lang, "localizing record");
        entity.localized(self, target_lang).await
    }

    /// Localize every entity of a list independently
    pub async fn localize_all<T: Localizable>(&self, entities: &[T], target_lang: &str) -> Vec<T> {
        debug!(
            fields = ?T::TRANSLATABLE_FIELDS,
            count = entities.len(),
            target = target_lang,
            "localizing records"
        );
        let mut localized = Vec::with_capacity(entities.len());
        for entity in entities {
            localized.push(entity.localized(self, target_lang).await);
        }
        localized
    }
}

impl std::fmt::Debug for Localizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Localizer")
            .field("provider", &self.provider_name())
            .field("cached", &self.cache.len())
            .finish()
    }
}

/// Single whitespace-delimited token of at most five characters
fn is_short_single_word(text: &str) -> bool {
    let mut tokens = text.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(token), None) => token.chars().count() <= SHORT_WORD_MAX_CHARS,
        _ => false,
    }
}

fn is_plausible_source(detected: &str) -> bool {
    PLAUSIBLE_SOURCES.contains(&base_lang(detected).as_str())
}

fn needs_disambiguation(text: &str, detected: &str) -> bool {
    is_short_single_word(text) && !is_plausible_source(detected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mt::{MockCall, MockMode, MockTranslator};
    use std::collections::HashMap;

    fn localizer_with(mock: MockTranslator) -> (Localizer, Arc<MockTranslator>) {
        let mock = Arc::new(mock);
        let translator: Arc<dyn MachineTranslator> = mock.clone();
        let localizer = Localizer::new(translator, Arc::new(TranslationCache::new()));
        (localizer, mock)
    }

    fn mappings(pairs: &[(&str, &str, &str)]) -> MockMode {
        let map: HashMap<(String, String), String> = pairs
            .iter()
            .map(|(text, target, translated)| {
                ((text.to_string(), target.to_string()), translated.to_string())
            })
            .collect();
        MockMode::Mappings(map)
    }

    // ========== Helper Tests ==========

    #[test]
    fn test_is_short_single_word() {
        assert!(is_short_single_word("pera"));
        assert!(is_short_single_word("  regar "));
        assert!(!is_short_single_word("tomate"));
        assert!(!is_short_single_word("tomate cherry"));
        assert!(!is_short_single_word("ajo rojo"));
        assert!(!is_short_single_word(""));
    }

    #[test]
    fn test_short_word_counts_characters_not_bytes() {
        // five characters, more than five bytes
        assert!(is_short_single_word("piñón"));
    }

    #[test]
    fn test_is_plausible_source() {
        assert!(is_plausible_source("ES"));
        assert!(is_plausible_source("gl"));
        assert!(is_plausible_source("EN-GB"));
        assert!(!is_plausible_source("FR"));
        assert!(!is_plausible_source("PT"));
        assert!(!is_plausible_source(""));
    }

    // ========== translate_auto ==========

    #[tokio::test]
    async fn test_second_call_is_served_from_cache() {
        let (localizer, mock) = localizer_with(MockTranslator::new(mappings(&[(
            "tomate", "EN", "tomato",
        )])));

        let first = localizer.translate_auto("tomate", "EN").await;
        let second = localizer.translate_auto("tomate", "EN").await;

        assert_eq!(first, "tomato");
        assert_eq!(second, "tomato");
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_target_case_shares_cache_entry() {
        let (localizer, mock) = localizer_with(MockTranslator::new(MockMode::Suffix));
        localizer.translate_auto("tomate", "en").await;
        localizer.translate_auto("tomate", "EN").await;
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_blank_input_passes_through() {
        let (localizer, mock) = localizer_with(MockTranslator::new(MockMode::Suffix));

        assert_eq!(localizer.translate_auto("", "EN").await, "");
        assert_eq!(localizer.translate_auto("   ", "EN").await, "   ");
        assert_eq!(localizer.translate_auto("\t\n", "EN").await, "\t\n");

        assert_eq!(mock.call_count(), 0);
        assert!(localizer.cache().is_empty());
    }

    #[tokio::test]
    async fn test_provider_failure_keeps_original() {
        let (localizer, mock) =
            localizer_with(MockTranslator::new(MockMode::Error("boom".to_string())));

        assert_eq!(localizer.translate_auto("tomate", "EN").await, "tomate");
        assert_eq!(mock.call_count(), 1);
        // failures are not cached, the next call tries again
        assert!(localizer.cache().is_empty());
        localizer.translate_auto("tomate", "EN").await;
        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn test_invalid_target_degrades_through_provider_error() {
        let deepl = DeepLProvider::new("k".to_string()).unwrap();
        let localizer = Localizer::new(Arc::new(deepl), Arc::new(TranslationCache::new()));

        // DeepL rejects the code before any request is sent
        assert_eq!(localizer.translate_auto("tomate", "e@n").await, "tomate");
        assert!(localizer.cache().is_empty());
    }

    #[tokio::test]
    async fn test_short_word_fallback_triggers_on_implausible_source() {
        let mock = MockTranslator::new(mappings(&[("pera", "EN", "X")]))
            .with_detection("pera", "FR")
            .with_source_mapping("pera", "ES", "EN", "pear");
        let (localizer, mock) = localizer_with(mock);

        let result = localizer.translate_auto("pera", "EN").await;

        assert_eq!(result, "pear");
        assert_eq!(
            mock.calls(),
            vec![
                MockCall::AutoSource {
                    text: "pera".to_string(),
                    target_lang: "EN".to_string(),
                },
                MockCall::WithSource {
                    text: "pera".to_string(),
                    source_lang: "ES".to_string(),
                    target_lang: "EN".to_string(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_fallback_result_is_what_gets_cached() {
        let mock = MockTranslator::new(mappings(&[("pera", "EN", "X")]))
            .with_detection("pera", "FR")
            .with_source_mapping("pera", "ES", "EN", "pear");
        let (localizer, mock) = localizer_with(mock);

        localizer.translate_auto("pera", "EN").await;
        assert_eq!(
            localizer.cache().get(&TranslationKey::auto("EN", "pera")),
            Some("pear".to_string())
        );
        assert_eq!(localizer.translate_auto("pera", "EN").await, "pear");
        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn test_short_word_fallback_skipped_for_plausible_source() {
        for lang in ["EN", "ES", "GL"] {
            let mock = MockTranslator::new(mappings(&[("pera", "EN", "X")]))
                .with_detection("pera", lang)
                .with_source_mapping("pera", "ES", "EN", "pear");
            let (localizer, mock) = localizer_with(mock);

            assert_eq!(localizer.translate_auto("pera", "EN").await, "X");
            assert_eq!(mock.call_count(), 1);
            assert_eq!(mock.explicit_call_count(), 0);
        }
    }

    #[tokio::test]
    async fn test_multi_word_input_never_falls_back() {
        let mock = MockTranslator::new(mappings(&[("tomate cherry", "EN", "cherry tomato")]))
            .with_detected_language("FR");
        let (localizer, mock) = localizer_with(mock);

        assert_eq!(
            localizer.translate_auto("tomate cherry", "EN").await,
            "cherry tomato"
        );
        assert_eq!(mock.explicit_call_count(), 0);
    }

    #[tokio::test]
    async fn test_long_single_word_never_falls_back() {
        let mock = MockTranslator::new(MockMode::Suffix).with_detected_language("IT");
        let (localizer, mock) = localizer_with(mock);

        localizer.translate_auto("calabacín", "EN").await;
        assert_eq!(mock.explicit_call_count(), 0);
    }

    #[tokio::test]
    async fn test_fallback_failure_keeps_auto_result() {
        let mock = MockTranslator::new(mappings(&[("pera", "EN", "X")]))
            .with_detection("pera", "FR")
            .with_failing_source("ES");
        let (localizer, mock) = localizer_with(mock);

        assert_eq!(localizer.translate_auto("pera", "EN").await, "X");
        assert_eq!(mock.call_count(), 2);
        assert_eq!(
            localizer.cache().get(&TranslationKey::auto("EN", "pera")),
            Some("X".to_string())
        );
    }

    // ========== translate ==========

    #[tokio::test]
    async fn test_translate_uses_source_when_given() {
        let (localizer, mock) = localizer_with(MockTranslator::new(MockMode::Suffix));

        localizer.translate("pera", "fr", "en").await;
        assert_eq!(
            mock.calls(),
            vec![MockCall::WithSource {
                text: "pera".to_string(),
                source_lang: "FR".to_string(),
                target_lang: "EN".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_translate_blank_or_auto_source_detects() {
        let (localizer, mock) = localizer_with(MockTranslator::new(MockMode::Suffix));

        localizer.translate("pera", "", "EN").await;
        localizer.translate("pera", "auto", "EN").await;
        localizer.translate("pera", " ", "EN").await;

        // same detect namespace, one request
        assert_eq!(mock.call_count(), 1);
        assert_eq!(mock.auto_call_count(), 1);
    }

    #[tokio::test]
    async fn test_translate_never_applies_short_word_fallback() {
        let mock = MockTranslator::new(MockMode::Suffix).with_detection("pera", "FR");
        let (localizer, mock) = localizer_with(mock);

        assert_eq!(localizer.translate("pera", "", "EN").await, "pera_EN");
        assert_eq!(mock.explicit_call_count(), 0);
    }

    #[tokio::test]
    async fn test_auto_and_explicit_paths_are_cached_separately() {
        let mock = MockTranslator::new(mappings(&[("pera", "EN", "pear")]))
            .with_source_mapping("pera", "FR", "EN", "per");
        let (localizer, mock) = localizer_with(mock);

        let detected = localizer.translate("pera", "", "EN").await;
        let explicit = localizer.translate("pera", "FR", "EN").await;

        assert_eq!(detected, "pear");
        assert_eq!(explicit, "per");
        assert_eq!(localizer.cache().len(), 2);

        // both stay cached side by side
        assert_eq!(localizer.translate("pera", "", "EN").await, "pear");
        assert_eq!(localizer.translate("pera", "FR", "EN").await, "per");
        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn test_translate_and_translate_auto_do_not_share_entries() {
        let mock = MockTranslator::new(mappings(&[("pera", "EN", "X")]))
            .with_detection("pera", "FR")
            .with_source_mapping("pera", "ES", "EN", "pear");
        let (localizer, _mock) = localizer_with(mock);

        assert_eq!(localizer.translate("pera", "", "EN").await, "X");
        assert_eq!(localizer.translate_auto("pera", "EN").await, "pear");
    }

    #[tokio::test]
    async fn test_translate_failure_keeps_original() {
        let (localizer, _mock) =
            localizer_with(MockTranslator::new(MockMode::Error("down".to_string())));
        assert_eq!(localizer.translate("regar", "ES", "EN").await, "regar");
        assert!(localizer.cache().is_empty());
    }

    // ========== translate_opt / translate_all ==========

    #[tokio::test]
    async fn test_translate_opt() {
        let (localizer, mock) = localizer_with(MockTranslator::new(MockMode::Suffix));

        assert_eq!(localizer.translate_opt(None, "EN").await, None);
        assert_eq!(
            localizer.translate_opt(Some("regar"), "EN").await,
            Some("regar_EN".to_string())
        );
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_translate_all_preserves_order_and_dedupes_via_cache() {
        let (localizer, mock) = localizer_with(MockTranslator::new(MockMode::Suffix));
        let texts = vec![
            "regar".to_string(),
            "".to_string(),
            "abonar".to_string(),
            "regar".to_string(),
        ];

        let translated = localizer.translate_all(&texts, "GL").await;

        assert_eq!(translated, vec!["regar_GL", "", "abonar_GL", "regar_GL"]);
        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_callers_share_cache() {
        let (localizer, _mock) = localizer_with(MockTranslator::with_delay(MockMode::Suffix, 5));
        let localizer = Arc::new(localizer);

        let mut handles = Vec::new();
        for _ in 0..4 {
            let localizer = Arc::clone(&localizer);
            handles.push(tokio::spawn(async move {
                localizer.translate_auto("tomate", "EN").await
            }));
        }
        for handle in handles {
            assert_eq!(handle.await.unwrap(), "tomate_EN");
        }
        assert_eq!(localizer.cache().len(), 1);
    }
}
