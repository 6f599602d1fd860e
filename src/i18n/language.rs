//! Display language selection
//!
//! The active language comes from the persisted preference when it names a
//! supported code, otherwise from the browser locale. The detected value is
//! written back so later visits skip detection.

use std::cell::Cell;

use serde::{Deserialize, Serialize};

use crate::persistence::PreferenceStore;

/// Storage key for the persisted language preference
pub const PREFERENCE_KEY: &str = "preferred-language";

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ko,
    Zh,
    Ja,
}

impl Language {
    /// Every supported language, in menu order
    pub const ALL: [Language; 4] = [Language::En, Language::Ko, Language::Zh, Language::Ja];

    /// Language used when nothing else resolves, and the fallback locale
    pub const DEFAULT: Language = Language::En;

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ko => "ko",
            Language::Zh => "zh",
            Language::Ja => "ja",
        }
    }

    /// Parse a bare language code. Only the exact lowercase codes match;
    /// use [`Language::detect`] for full locale strings.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "ko" => Some(Language::Ko),
            "zh" => Some(Language::Zh),
            "ja" => Some(Language::Ja),
            _ => None,
        }
    }

    /// Name of the language in the language itself
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ko => "한국어",
            Language::Zh => "中文",
            Language::Ja => "日本語",
        }
    }

    /// Map a browser locale such as `ko-KR` or `zh-Hant-TW` to a supported
    /// language by prefix. Unknown locales resolve to English.
    pub fn detect(locale: &str) -> Self {
        let locale = locale.trim().to_lowercase();
        [Language::Ko, Language::Zh, Language::Ja]
            .into_iter()
            .find(|lang| locale.starts_with(lang.as_code()))
            .unwrap_or(Language::DEFAULT)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Tracks the current language and keeps the persisted preference in sync
pub struct LanguageResolver<S> {
    store: S,
    key: String,
    current: Cell<Language>,
}

impl<S: PreferenceStore> LanguageResolver<S> {
    /// Resolve the initial language using the default storage key
    pub fn new(store: S, locale: Option<&str>) -> Self {
        Self::with_key(store, PREFERENCE_KEY, locale)
    }

    /// Resolve the initial language, reading and writing `key` in `store`
    pub fn with_key(store: S, key: &str, locale: Option<&str>) -> Self {
        let stored = store.get(key).and_then(|code| Language::from_code(&code));

        let current = match stored {
            Some(lang) => {
                log::info!("Using stored language preference: {}", lang);
                lang
            }
            None => {
                let detected = locale.map(Language::detect).unwrap_or(Language::DEFAULT);
                log::info!(
                    "No valid language preference, detected {} from locale {:?}",
                    detected,
                    locale
                );
                store.set(key, detected.as_code());
                detected
            }
        };

        Self {
            store,
            key: key.to_string(),
            current: Cell::new(current),
        }
    }

    pub fn current(&self) -> Language {
        self.current.get()
    }

    pub fn supported(&self) -> &'static [Language] {
        &Language::ALL
    }

    /// Code → display name pairs for UI menus
    pub fn language_names(&self) -> Vec<(&'static str, &'static str)> {
        Language::ALL
            .iter()
            .map(|lang| (lang.as_code(), lang.display_name()))
            .collect()
    }

    /// Switch to the language named by `code`.
    ///
    /// Unsupported codes are ignored. Returns whether the code was accepted.
    pub fn change_language(&self, code: &str) -> bool {
        match Language::from_code(code) {
            Some(lang) => {
                self.set_language(lang);
                true
            }
            None => {
                log::debug!("Ignoring unsupported language code {:?}", code);
                false
            }
        }
    }

    pub fn set_language(&self, lang: Language) {
        self.current.set(lang);
        self.store.set(&self.key, lang.as_code());
        log::info!("Language changed to {}", lang);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_detect_from_locale_prefix() {
        assert_eq!(Language::detect("ko-KR"), Language::Ko);
        assert_eq!(Language::detect("zh-Hant-TW"), Language::Zh);
        assert_eq!(Language::detect("JA"), Language::Ja);
        assert_eq!(Language::detect("en-GB"), Language::En);
        assert_eq!(Language::detect("fr-FR"), Language::En);
        assert_eq!(Language::detect(""), Language::En);
    }

    #[test]
    fn test_from_code_rejects_unknown() {
        assert_eq!(Language::from_code("ja"), Some(Language::Ja));
        assert_eq!(Language::from_code("KO"), None);
        assert_eq!(Language::from_code(" ja "), None);
        assert_eq!(Language::from_code("xx"), None);
        assert_eq!(Language::from_code("ko-KR"), None);
    }

    #[test]
    fn test_change_language_requires_exact_code() {
        let store = MemoryStore::new();
        let resolver = LanguageResolver::new(store.clone(), Some("en-US"));

        assert!(!resolver.change_language("KO"));
        assert_eq!(resolver.current(), Language::En);
        assert_eq!(store.get(PREFERENCE_KEY).as_deref(), Some("en"));
    }

    #[test]
    fn test_malformed_stored_preference_is_redetected() {
        let store = MemoryStore::new();
        store.set(PREFERENCE_KEY, " JA ");
        let resolver = LanguageResolver::new(store.clone(), Some("ko-KR"));
        assert_eq!(resolver.current(), Language::Ko);
        assert_eq!(store.get(PREFERENCE_KEY).as_deref(), Some("ko"));
    }

    #[test]
    fn test_initial_language_from_locale_is_persisted() {
        let store = MemoryStore::new();
        let resolver = LanguageResolver::new(store.clone(), Some("ko-KR"));
        assert_eq!(resolver.current(), Language::Ko);
        assert_eq!(store.get(PREFERENCE_KEY).as_deref(), Some("ko"));
    }

    #[test]
    fn test_stored_preference_wins_over_locale() {
        let store = MemoryStore::new();
        store.set(PREFERENCE_KEY, "ja");
        let resolver = LanguageResolver::new(store, Some("ko-KR"));
        assert_eq!(resolver.current(), Language::Ja);
    }

    #[test]
    fn test_invalid_stored_preference_is_replaced() {
        let store = MemoryStore::new();
        store.set(PREFERENCE_KEY, "klingon");
        let resolver = LanguageResolver::new(store.clone(), Some("zh-CN"));
        assert_eq!(resolver.current(), Language::Zh);
        assert_eq!(store.get(PREFERENCE_KEY).as_deref(), Some("zh"));
    }

    #[test]
    fn test_missing_locale_defaults_to_english() {
        let store = MemoryStore::new();
        let resolver = LanguageResolver::new(store.clone(), None);
        assert_eq!(resolver.current(), Language::En);
        assert_eq!(store.get(PREFERENCE_KEY).as_deref(), Some("en"));
    }

    #[test]
    fn test_change_language_unsupported_is_noop() {
        let store = MemoryStore::new();
        let resolver = LanguageResolver::new(store.clone(), Some("ja-JP"));

        assert!(!resolver.change_language("xx"));
        assert_eq!(resolver.current(), Language::Ja);
        assert_eq!(store.get(PREFERENCE_KEY).as_deref(), Some("ja"));
    }

    #[test]
    fn test_change_language_persists() {
        let store = MemoryStore::new();
        let resolver = LanguageResolver::new(store.clone(), Some("en-US"));

        assert!(resolver.change_language("ko"));
        assert_eq!(resolver.current(), Language::Ko);
        assert_eq!(store.get(PREFERENCE_KEY).as_deref(), Some("ko"));
    }

    #[test]
    fn test_language_names_cover_supported_set() {
        let resolver = LanguageResolver::new(MemoryStore::new(), None);
        let names = resolver.language_names();
        assert_eq!(names.len(), resolver.supported().len());
        assert!(names.contains(&("ko", "한국어")));
        assert!(names.contains(&("ja", "日本語")));
    }
}
