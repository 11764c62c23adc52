//! The translation context: loading, lookups and language fallback.
//!
//! Lookups come in three flavors:
//! - [`ItemsLang::translate`] classifies an engine object and looks up its key
//! - [`ItemsLang::translate_exact`] looks up a full namespaced key
//! - [`ItemsLang::translate_anything`] tries a bare key under every namespace
//!
//! Each accepts the language either as a [`Language`] or as free text. Free
//! text that names no known locale falls back to the default language and
//! logs a warning unless warnings are hidden.
//!
//! A lookup returns `Ok(None)` when nothing matches. Looking up a language
//! that was never loaded is a caller error (`Error::LanguageNotLoaded`).

use crate::category::{classify, Category, Classification};
use crate::compat::{is_legacy_scheme, LegacyTable};
use crate::config::Settings;
use crate::error::Result;
use crate::i18n::{Language, LookupMetrics, TableValidator, ValidationReport};
use crate::object::Translatable;
use crate::source::{DirectorySource, Table, TranslationSource};
use crate::store::{fetch, LoadSummary, TranslationStore};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::warn;

/// A language argument: a parsed [`Language`] or free text.
pub trait LanguageArg {
    /// Turn the argument into a language, falling back to the context's
    /// default for unparseable text.
    fn resolve(self, api: &ItemsLang) -> Language;
}

impl LanguageArg for Language {
    fn resolve(self, _api: &ItemsLang) -> Language {
        self
    }
}

impl LanguageArg for &str {
    fn resolve(self, api: &ItemsLang) -> Language {
        api.resolve_language(self)
    }
}

impl LanguageArg for &String {
    fn resolve(self, api: &ItemsLang) -> Language {
        api.resolve_language(self)
    }
}

impl LanguageArg for String {
    fn resolve(self, api: &ItemsLang) -> Language {
        api.resolve_language(&self)
    }
}

/// Translation context.
///
/// Build one at startup, load the languages you need, then share it (it is
/// `Send + Sync`; wrap it in an `Arc` for multiple owners). Loading and
/// changing the default language are safe at any time: tables are swapped
/// under a write lock and the default language is guarded by its own lock.
pub struct ItemsLang {
    source: Box<dyn TranslationSource>,
    legacy: bool,
    // Held for a whole load so the legacy table is read at most once.
    loading: Mutex<()>,
    store: RwLock<TranslationStore>,
    default_language: RwLock<Language>,
    hide_warnings: AtomicBool,
    metrics: LookupMetrics,
}

impl ItemsLang {
    /// Create a context without loading anything.
    pub fn new(settings: &Settings, source: impl TranslationSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            legacy: is_legacy_scheme(&settings.engine_version),
            loading: Mutex::new(()),
            store: RwLock::new(TranslationStore::new()),
            default_language: RwLock::new(settings.default_language),
            hide_warnings: AtomicBool::new(settings.hide_warnings),
            metrics: LookupMetrics::new(),
        }
    }

    /// Create a context and load the default language plus `settings.preload`.
    pub fn init(settings: &Settings, source: impl TranslationSource + 'static) -> Self {
        let api = Self::new(settings, source);

        let mut languages = vec![settings.default_language];
        languages.extend(settings.preload.iter().copied());
        api.load(&languages);

        api
    }

    /// [`ItemsLang::init`] over the resource directory named in the settings.
    pub fn from_directory(settings: &Settings) -> Self {
        let source = DirectorySource::new(settings.resources_dir.clone());
        Self::init(settings, source)
    }

    // ==================== Loading ====================

    /// Load the given languages, replacing any table already loaded for them.
    ///
    /// On a legacy engine the first call also loads the legacy identifier
    /// table. Resources are read before the store is locked, so lookups keep
    /// running while files are parsed. Concurrent loads run one at a time.
    pub fn load(&self, languages: &[Language]) -> LoadSummary {
        let _loading = self.loading.lock().unwrap_or_else(PoisonError::into_inner);
        let include_legacy = self.legacy && self.read_store().legacy().is_none();
        let fetched = fetch(languages, self.source.as_ref(), include_legacy);
        self.write_store().apply(fetched)
    }

    /// Load every known language.
    ///
    /// Prefer [`ItemsLang::load`] with the languages you actually need; all
    /// tables together take a lot of memory.
    pub fn load_all(&self) -> LoadSummary {
        self.load(&Language::all())
    }

    pub fn is_loaded(&self, language: Language) -> bool {
        self.read_store().is_loaded(language)
    }

    pub fn loaded_languages(&self) -> Vec<Language> {
        self.read_store().loaded_languages()
    }

    /// Number of keys loaded for a language, `None` if it is not loaded.
    pub fn key_count(&self, language: Language) -> Option<usize> {
        self.read_store().key_count(language)
    }

    /// Number of legacy identifiers loaded (always 0 on modern engines).
    pub fn legacy_table_len(&self) -> usize {
        self.read_store().legacy().map_or(0, |table| table.len())
    }

    /// Copy of the table loaded for a language.
    pub fn language_table(&self, language: Language) -> Result<Table> {
        Ok(self.read_store().table(language)?.clone())
    }

    /// Copy of the `legacy id -> modern id` pairs (empty on modern engines).
    pub fn legacy_entries(&self) -> Table {
        let store = self.read_store();
        self.legacy_table(&store)
            .map(|table| table.entries().clone())
            .unwrap_or_default()
    }

    /// Modern identifier for a legacy `(base, variant)` pair, or `base`
    /// unchanged when there is no mapping.
    pub fn modern_identifier_for(&self, base: &str, variant: u16) -> String {
        let store = self.read_store();
        match self.legacy_table(&store) {
            Some(table) => table.modern_identifier_for(base, variant).to_string(),
            None => base.to_string(),
        }
    }

    // ==================== Lookups ====================

    /// Translate the name of an engine object.
    ///
    /// # Returns
    /// * `Ok(Some(_))` with the translated name
    /// * `Ok(None)` if the object is not translatable or has no entry
    /// * `Err` if the language is not loaded, or the engine declared an
    ///   effect/enchantment with no known key
    pub fn translate<T: Translatable + ?Sized>(
        &self,
        object: &T,
        language: impl LanguageArg,
    ) -> Result<Option<String>> {
        let language = language.resolve(self);
        let store = self.read_store();
        let table = store.table(language)?;

        let Some(classification) = classify(object, self.legacy_table(&store))? else {
            self.metrics.record_miss();
            return Ok(None);
        };

        let found = table.get(&classification.key).cloned();
        self.metrics.record_lookup(found.is_some());
        Ok(found)
    }

    /// Translate an exact namespaced key (e.g. `"block.minecraft.stone"`).
    /// The key is case-insensitive.
    pub fn translate_exact(
        &self,
        namespaced_key: &str,
        language: impl LanguageArg,
    ) -> Result<Option<String>> {
        let language = language.resolve(self);
        let store = self.read_store();

        let found = store.get_exact(language, namespaced_key)?.map(str::to_string);
        self.metrics.record_lookup(found.is_some());
        Ok(found)
    }

    /// Translate a key without knowing its namespace (e.g. `"clock"`).
    ///
    /// Every category namespace is tried in declaration order; the first
    /// entry found wins.
    pub fn translate_anything(&self, key: &str, language: impl LanguageArg) -> Result<Option<String>> {
        let language = language.resolve(self);
        let store = self.read_store();
        let table = store.table(language)?;

        let key = key.to_lowercase();
        let found = Category::all_namespaces()
            .find_map(|namespace| table.get(&format!("{}{}", namespace, key)))
            .cloned();
        self.metrics.record_lookup(found.is_some());
        Ok(found)
    }

    /// Classify an object without translating it.
    pub fn classify<T: Translatable + ?Sized>(&self, object: &T) -> Result<Option<Classification>> {
        let store = self.read_store();
        classify(object, self.legacy_table(&store))
    }

    /// Compare a loaded language against a loaded reference language.
    pub fn validate(&self, reference: Language, language: Language) -> Result<ValidationReport> {
        let store = self.read_store();
        Ok(TableValidator::validate(
            store.table(reference)?,
            store.table(language)?,
        ))
    }

    // ==================== Languages ====================

    /// Parse free text as a language, falling back to the default language.
    ///
    /// The fallback logs one warning naming the input unless warnings are
    /// hidden.
    pub fn resolve_language(&self, text: &str) -> Language {
        match Language::from_code(text) {
            Ok(language) => language,
            Err(_) => {
                let fallback = self.default_language();
                self.metrics.record_language_fallback();

                if !self.warnings_hidden() {
                    warn!(
                        "Some plugin is trying to translate an object to a non-existent language ({}). \
                         Object is now translated into {}.",
                        text, fallback
                    );
                    self.metrics.record_warning();
                }
                fallback
            }
        }
    }

    pub fn default_language(&self) -> Language {
        *self
            .default_language
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Change the fallback language. It is not loaded automatically.
    pub fn set_default_language(&self, language: Language) {
        *self
            .default_language
            .write()
            .unwrap_or_else(PoisonError::into_inner) = language;
    }

    /// Stop logging invalid-language warnings.
    pub fn hide_warnings(&self) {
        self.hide_warnings.store(true, Ordering::Relaxed);
    }

    pub fn warnings_hidden(&self) -> bool {
        self.hide_warnings.load(Ordering::Relaxed)
    }

    /// Whether the engine uses the legacy identifier scheme.
    pub fn is_legacy(&self) -> bool {
        self.legacy
    }

    pub fn metrics(&self) -> &LookupMetrics {
        &self.metrics
    }

    // ==================== Internals ====================

    fn legacy_table<'a>(&self, store: &'a TranslationStore) -> Option<&'a LegacyTable> {
        if self.legacy {
            store.legacy()
        } else {
            None
        }
    }

    // Tables are only ever replaced whole, so a poisoned lock still guards
    // consistent data.
    fn read_store(&self) -> RwLockReadGuard<'_, TranslationStore> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_store(&self) -> RwLockWriteGuard<'_, TranslationStore> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }
}
