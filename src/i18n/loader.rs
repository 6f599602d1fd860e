//! Translation loading with single-level fallback
//!
//! Every call to [`Translator::load`] starts a new generation. When a fetch
//! completes after a newer load has started, its result is dropped, so the
//! table always reflects the most recent selection no matter in which order
//! the responses arrive.

use std::cell::{Cell, Ref, RefCell};

use super::language::Language;
use super::table::TranslationTable;
use crate::error::LoadError;

/// Where locale documents come from
#[allow(async_fn_in_trait)]
pub trait TranslationSource {
    async fn fetch(&self, language: Language) -> Result<TranslationTable, LoadError>;
}

/// How a load ended. Informational only, failures are already logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The requested language's table is active
    Loaded(Language),
    /// The requested language failed and the default language is active
    FellBack { requested: Language },
    /// Both fetches failed; the table is now empty
    Failed { requested: Language },
    /// A newer load started before this one finished; nothing was applied
    Superseded,
}

impl LoadOutcome {
    /// True for outcomes that settled the current selection
    pub fn is_applied(&self) -> bool {
        !matches!(self, LoadOutcome::Superseded)
    }
}

/// Holds the active translation table and loads replacements
pub struct Translator<S> {
    source: S,
    fallback: Language,
    table: RefCell<TranslationTable>,
    generation: Cell<u64>,
    loading: Cell<bool>,
    active: Cell<Option<Language>>,
}

impl<S: TranslationSource> Translator<S> {
    pub fn new(source: S) -> Self {
        Self::with_fallback(source, Language::DEFAULT)
    }

    pub fn with_fallback(source: S, fallback: Language) -> Self {
        Self {
            source,
            fallback,
            table: RefCell::new(TranslationTable::new()),
            generation: Cell::new(0),
            loading: Cell::new(false),
            active: Cell::new(None),
        }
    }

    /// Fetch `language` and make it the active table.
    ///
    /// On failure the fallback language is fetched once. If that also fails
    /// the table is cleared. Results of loads superseded by a later call are
    /// discarded.
    pub async fn load(&self, language: Language) -> LoadOutcome {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        self.loading.set(true);
        log::debug!("Loading translations for {} (generation {})", language, generation);

        let (result, outcome) = match self.source.fetch(language).await {
            Ok(table) => (Some(table), LoadOutcome::Loaded(language)),
            Err(err) => {
                log::warn!("Failed to load translations for {}: {}", language, err);
                match self.source.fetch(self.fallback).await {
                    Ok(table) => (Some(table), LoadOutcome::FellBack { requested: language }),
                    Err(err) => {
                        log::error!(
                            "Failed to load fallback translations ({}): {}",
                            self.fallback,
                            err
                        );
                        (None, LoadOutcome::Failed { requested: language })
                    }
                }
            }
        };

        if self.generation.get() != generation {
            log::debug!(
                "Discarding stale translations for {} (generation {} < {})",
                language,
                generation,
                self.generation.get()
            );
            return LoadOutcome::Superseded;
        }

        let active = match outcome {
            LoadOutcome::Loaded(lang) => Some(lang),
            LoadOutcome::FellBack { .. } => Some(self.fallback),
            _ => None,
        };
        *self.table.borrow_mut() = result.unwrap_or_default();
        self.active.set(active);
        self.loading.set(false);
        outcome
    }

    /// Whether the most recent load is still in flight
    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    /// Language whose table is currently active, if any
    pub fn active_language(&self) -> Option<Language> {
        self.active.get()
    }

    pub fn table(&self) -> Ref<'_, TranslationTable> {
        self.table.borrow()
    }

    /// Resolve a key against the active table, echoing the key on a miss
    pub fn lookup(&self, key: &str) -> String {
        self.table.borrow().lookup(key)
    }
}
