//! Localization
//!
//! - `language`: supported languages and preference resolution
//! - `table`: nested key lookup over one locale document
//! - `loader`: fetching tables with fallback and stale-result protection

pub mod language;
pub mod loader;
pub mod table;

pub use language::{Language, LanguageResolver, PREFERENCE_KEY};
pub use loader::{LoadOutcome, TranslationSource, Translator};
pub use table::TranslationTable;
