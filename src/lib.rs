//! Wowoo landing page
//!
//! Core modules:
//! - `i18n`: Language selection, locale tables and loading
//! - `reveal`: Scroll-driven logo ⇄ content state machine
//! - `content`: Static links and token details
//! - `persistence`: Preference storage (LocalStorage on web)
//! - `settings`: Site configuration
//! - `platform`: Browser bindings (WASM only)

pub mod content;
pub mod error;
pub mod i18n;
pub mod persistence;
#[cfg(target_arch = "wasm32")]
pub mod platform;
pub mod reveal;
pub mod settings;

pub use error::LoadError;
pub use i18n::{Language, LanguageResolver, TranslationTable, Translator};
pub use reveal::{RevealSequencer, RevealState};
pub use settings::{RevealSettings, SiteConfig};
