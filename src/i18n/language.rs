//! Language type: validated handle for one of the registry's locales.
//!
//! `Language` is a thin `Copy` wrapper around a registry locale tag. It can
//! only be constructed from a tag the registry knows, so every `Language`
//! value names a real language file.

use crate::error::{Error, Result};
use crate::i18n::{LanguageConfig, LanguageRegistry};
use std::fmt;
use std::str::FromStr;

/// A validated language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Language {
    /// Locale tag (e.g., "en_us", "es_es")
    code: &'static str,
}

impl Language {
    /// English (US), the canonical language and the initial default.
    pub const EN_US: Language = Language { code: "en_us" };

    /// Create a Language from free text.
    ///
    /// Matching is case-insensitive, so `"EN_US"`, `"en_us"` and `"En_Us"`
    /// all name the same language. Surrounding whitespace is not ignored.
    ///
    /// # Returns
    /// * `Ok(Language)` if the text names a known locale
    /// * `Err(Error::UnknownLanguage)` otherwise
    pub fn from_code(code: &str) -> Result<Language> {
        let normalized = code.to_lowercase();

        match LanguageRegistry::get().get_by_code(&normalized) {
            Some(config) => Ok(Language {
                code: config.code, // Use the static str from the registry
            }),
            None => Err(Error::UnknownLanguage(code.to_string())),
        }
    }

    /// Get the canonical language.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    /// Every known language, in registry order.
    pub fn all() -> Vec<Language> {
        LanguageRegistry::get()
            .list_all()
            .into_iter()
            .map(|config| Language { code: config.code })
            .collect()
    }

    /// Get the locale tag.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Name of the language file holding this locale (e.g., "en_us.json").
    pub fn file_name(&self) -> String {
        format!("{}.json", self.code)
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the locale tag is not found in the registry. This cannot
    /// happen for a Language built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Language name in its own language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Region name in its own language.
    pub fn region(&self) -> &'static str {
        self.config().region
    }

    /// Check if this is the canonical language.
    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::EN_US
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Language::from_code(s)
    }
}
