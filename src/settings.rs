//! Site configuration
//!
//! Every field has a default, so the page runs without any configuration.
//! `index.html` may override values with an inline JSON block:
//!
//! ```html
//! <script id="site-config" type="application/json">{"reveal": {"duration_ms": 600}}</script>
//! ```

use serde::{Deserialize, Serialize};

use crate::i18n::{Language, PREFERENCE_KEY};
use crate::reveal::CubicBezier;

/// Timing and thresholds of the logo reveal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RevealSettings {
    /// Scrolling down past this offset (px) reveals the content
    pub content_threshold: f64,
    /// Scrolling up to this offset (px) or above brings the logo back
    pub top_threshold: f64,
    /// Length of the scale/opacity animation
    pub duration_ms: u32,
    /// Pause after switching to the content before scrolling it into view
    pub settle_ms: u32,
    /// Pause after snapping to the enlarged pose before shrinking back
    pub reset_delay_ms: u32,
    /// Logo scale at the enlarged, transparent end of the animation
    pub enlarged_scale: f64,
    pub easing: CubicBezier,
    /// Replay the shrink-in animation once the first translations arrive,
    /// instead of assigning the natural pose directly
    pub replay_initial: bool,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            content_threshold: 50.0,
            top_threshold: 10.0,
            duration_ms: 800,
            settle_ms: 500,
            reset_delay_ms: 10,
            enlarged_scale: 10.0,
            easing: CubicBezier::EASE_OUT,
            replay_initial: true,
        }
    }
}

/// Page-wide configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// URL prefix of the per-language JSON documents
    pub locales_base: String,
    /// LocalStorage key holding the language preference
    pub storage_key: String,
    /// Language loaded when the selected one fails
    pub fallback_language: Language,
    pub reveal: RevealSettings,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            locales_base: "/locales".to_string(),
            storage_key: PREFERENCE_KEY.to_string(),
            fallback_language: Language::DEFAULT,
            reveal: RevealSettings::default(),
        }
    }
}

impl SiteConfig {
    /// Element id of the optional inline configuration block
    pub const ELEMENT_ID: &'static str = "site-config";

    /// Parse a configuration document; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// URL of the locale document for `language`
    pub fn locale_url(&self, language: Language) -> String {
        format!(
            "{}/{}.json",
            self.locales_base.trim_end_matches('/'),
            language.as_code()
        )
    }

    /// Load from the inline `<script id="site-config">` block (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        match json {
            Some(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded site configuration");
                    config
                }
                Err(e) => {
                    log::warn!("Invalid site configuration, using defaults: {}", e);
                    Self::default()
                }
            },
            None => {
                log::info!("Using default site configuration");
                Self::default()
            }
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config =
            SiteConfig::from_json(r#"{"locales_base": "/static/i18n/", "reveal": {"duration_ms": 600}}"#)
                .unwrap();
        assert_eq!(config.reveal.duration_ms, 600);
        assert_eq!(config.reveal.settle_ms, 500);
        assert_eq!(config.reveal.content_threshold, 50.0);
        assert_eq!(config.storage_key, "preferred-language");
        assert_eq!(config.locale_url(Language::Ja), "/static/i18n/ja.json");
    }

    #[test]
    fn test_default_locale_url() {
        let config = SiteConfig::default();
        assert_eq!(config.locale_url(Language::Ko), "/locales/ko.json");
        assert_eq!(config.fallback_language, Language::En);
    }

    #[test]
    fn test_language_parses_lowercase_code() {
        let config = SiteConfig::from_json(r#"{"fallback_language": "ja"}"#).unwrap();
        assert_eq!(config.fallback_language, Language::Ja);
        assert!(SiteConfig::from_json(r#"{"fallback_language": "xx"}"#).is_err());
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }
}
