//! In-memory memoization of translation results
//!
//! Entries are keyed by a structured [`TranslationKey`] rather than a
//! concatenated string, so the auto-detect space and each explicit-source
//! space can never collide. Entries are write-once and live as long as the
//! cache; there is no eviction.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;

/// Source side of a cache key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SourceLang {
    /// Result of the auto-detect policy, after the short-word fallback
    Auto,
    /// Plain provider detection with no fallback applied
    Detect,
    /// Caller-asserted source language, upper-cased
    Explicit(String),
}

impl fmt::Display for SourceLang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceLang::Auto => write!(f, "auto"),
            SourceLang::Detect => write!(f, "detect"),
            SourceLang::Explicit(code) => write!(f, "{}", code),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TranslationKey {
    pub source: SourceLang,
    pub target: String,
    pub text: String,
}

impl TranslationKey {
    pub fn new(source: SourceLang, target: &str, text: &str) -> Self {
        Self {
            source,
            target: target.to_string(),
            text: text.to_string(),
        }
    }

    pub fn auto(target: &str, text: &str) -> Self {
        Self::new(SourceLang::Auto, target, text)
    }
}

/// Renders `{source}=>{target}::{text}` for logs
impl fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=>{}::{}", self.source, self.target, self.text)
    }
}

/// Thread-safe translation memo table
///
/// Construct one per process or session and share it through an `Arc`.
#[derive(Debug, Default)]
pub struct TranslationCache {
    entries: RwLock<HashMap<TranslationKey, String>>,
}

impl TranslationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &TranslationKey) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    /// Store `value` unless the key already holds one
    ///
    /// Returns the value the key maps to after the call. When two callers
    /// race on the same key the first write is kept.
    pub fn put(&self, key: TranslationKey, value: String) -> String {
        self.entries.write().entry(key).or_insert(value).clone()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_get_after_put() {
        let cache = TranslationCache::new();
        let key = TranslationKey::auto("EN", "tomate");
        assert_eq!(cache.get(&key), None);

        cache.put(key.clone(), "tomato".to_string());
        assert_eq!(cache.get(&key), Some("tomato".to_string()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_first_write_wins() {
        let cache = TranslationCache::new();
        let key = TranslationKey::auto("EN", "tomate");

        assert_eq!(cache.put(key.clone(), "tomato".to_string()), "tomato");
        assert_eq!(cache.put(key.clone(), "other".to_string()), "tomato");
        assert_eq!(cache.get(&key), Some("tomato".to_string()));
    }

    #[test]
    fn test_namespaces_are_isolated() {
        let cache = TranslationCache::new();
        let auto = TranslationKey::new(SourceLang::Auto, "EN", "pera");
        let detect = TranslationKey::new(SourceLang::Detect, "EN", "pera");
        let explicit = TranslationKey::new(SourceLang::Explicit("FR".to_string()), "EN", "pera");

        cache.put(auto.clone(), "pear".to_string());
        cache.put(detect.clone(), "pera".to_string());
        cache.put(explicit.clone(), "per".to_string());

        assert_eq!(cache.len(), 3);
        assert_eq!(cache.get(&auto), Some("pear".to_string()));
        assert_eq!(cache.get(&detect), Some("pera".to_string()));
        assert_eq!(cache.get(&explicit), Some("per".to_string()));
    }

    #[test]
    fn test_explicit_empty_source_is_not_auto() {
        // Even an explicit code that renders like a namespace name stays distinct
        let auto = TranslationKey::new(SourceLang::Auto, "EN", "x");
        let literal = TranslationKey::new(SourceLang::Explicit("auto".to_string()), "EN", "x");
        let empty = TranslationKey::new(SourceLang::Explicit(String::new()), "EN", "x");
        assert_ne!(auto, literal);
        assert_ne!(auto, empty);
        assert_eq!(auto.to_string(), literal.to_string());
    }

    #[test]
    fn test_target_is_part_of_key() {
        let cache = TranslationCache::new();
        cache.put(TranslationKey::auto("EN", "tomate"), "tomato".to_string());
        assert_eq!(cache.get(&TranslationKey::auto("GL", "tomate")), None);
    }

    #[test]
    fn test_key_display() {
        let key = TranslationKey::new(SourceLang::Explicit("ES".to_string()), "EN", "pera");
        assert_eq!(key.to_string(), "ES=>EN::pera");
        assert_eq!(TranslationKey::auto("GL", "regar").to_string(), "auto=>GL::regar");
    }

    #[test]
    fn test_concurrent_puts() {
        let cache = Arc::new(TranslationCache::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || {
                    for j in 0..100 {
                        cache.put(
                            TranslationKey::auto("EN", &format!("t{}", j)),
                            format!("v{}", i),
                        );
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(cache.len(), 100);
    }
}
