//! Per-language translation tables.
//!
//! A language only has a table after it was loaded. Loading is split in two
//! steps so callers can do the blocking reads without holding a lock:
//! [`fetch`] reads and parses resources, [`TranslationStore::apply`] stores
//! the result.

use crate::compat::LegacyTable;
use crate::error::{Error, Result};
use crate::i18n::Language;
use crate::source::{read_language, read_legacy, Table, TranslationSource};
use std::collections::HashMap;
use tracing::{debug, info};

/// Parsed resources ready to be stored.
#[derive(Debug, Default)]
pub struct Fetched {
    languages: Vec<(Language, Table)>,
    legacy: Option<LegacyTable>,
}

/// Outcome of one load call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    /// Languages stored by this call, in request order
    pub loaded: Vec<Language>,

    /// Languages that ended up with an empty table (missing or broken file)
    pub empty: Vec<Language>,

    /// Total number of keys stored across `loaded`
    pub keys: usize,

    /// Whether this call stored the legacy identifier table
    pub legacy_loaded: bool,
}

/// Read and parse the given languages, plus the legacy table if asked to.
///
/// Duplicate languages are read once. Never fails: unreadable resources
/// come back as empty tables.
pub fn fetch(
    languages: &[Language],
    source: &dyn TranslationSource,
    include_legacy: bool,
) -> Fetched {
    info!("Loading language files...");
    let mut fetched = Fetched::default();

    for &language in languages {
        if fetched.languages.iter().any(|(seen, _)| *seen == language) {
            continue;
        }
        let table = read_language(source, language);
        debug!("Read {} keys for {}", table.len(), language);
        fetched.languages.push((language, table));
    }

    if include_legacy {
        let legacy = LegacyTable::from_entries(read_legacy(source));
        debug!("Read {} legacy identifiers", legacy.len());
        fetched.legacy = Some(legacy);
    }

    fetched
}

/// Translation tables for every loaded language.
#[derive(Debug, Default)]
pub struct TranslationStore {
    tables: HashMap<Language, Table>,
    legacy: Option<LegacyTable>,
}

impl TranslationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load languages from a source, replacing any previous table for them.
    ///
    /// When `legacy_mode` is set the legacy identifier table is loaded too,
    /// unless an earlier call already did.
    pub fn load(
        &mut self,
        languages: &[Language],
        source: &dyn TranslationSource,
        legacy_mode: bool,
    ) -> LoadSummary {
        let fetched = fetch(languages, source, legacy_mode && self.legacy.is_none());
        self.apply(fetched)
    }

    /// Store fetched resources.
    ///
    /// A legacy table is only taken if none is stored yet.
    pub fn apply(&mut self, fetched: Fetched) -> LoadSummary {
        let mut summary = LoadSummary {
            loaded: Vec::with_capacity(fetched.languages.len()),
            empty: Vec::new(),
            keys: 0,
            legacy_loaded: false,
        };

        for (language, table) in fetched.languages {
            if table.is_empty() {
                summary.empty.push(language);
            }
            summary.keys += table.len();
            summary.loaded.push(language);
            self.tables.insert(language, table);
        }

        if let Some(legacy) = fetched.legacy {
            if self.legacy.is_none() {
                info!("Loaded {} legacy identifiers", legacy.len());
                self.legacy = Some(legacy);
                summary.legacy_loaded = true;
            }
        }

        info!(
            "Loaded {} language file(s) successfully ({} keys)",
            summary.loaded.len(),
            summary.keys
        );
        summary
    }

    /// Look up a namespaced key. The key is lower-cased first.
    ///
    /// # Returns
    /// * `Ok(Some(_))` with the stored translation
    /// * `Ok(None)` if the language has no such key
    /// * `Err(Error::LanguageNotLoaded)` if the language was never loaded
    pub fn get_exact(&self, language: Language, key: &str) -> Result<Option<&str>> {
        let table = self.table(language)?;
        Ok(table.get(&key.to_lowercase()).map(String::as_str))
    }

    /// The whole table of a loaded language.
    pub fn table(&self, language: Language) -> Result<&Table> {
        self.tables
            .get(&language)
            .ok_or(Error::LanguageNotLoaded(language.code()))
    }

    pub fn is_loaded(&self, language: Language) -> bool {
        self.tables.contains_key(&language)
    }

    /// Loaded languages, sorted by locale tag.
    pub fn loaded_languages(&self) -> Vec<Language> {
        let mut languages: Vec<Language> = self.tables.keys().copied().collect();
        languages.sort();
        languages
    }

    /// Number of keys in a loaded language, `None` if it is not loaded.
    pub fn key_count(&self, language: Language) -> Option<usize> {
        self.tables.get(&language).map(HashMap::len)
    }

    /// The legacy identifier table, once loaded.
    pub fn legacy(&self) -> Option<&LegacyTable> {
        self.legacy.as_ref()
    }
}
