use crate::i18n::Language;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Settings for an [`ItemsLang`](crate::ItemsLang) context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Engine version string (e.g. "1.20.4", "1.12.2-R0.1-SNAPSHOT")
    pub engine_version: String,

    /// Language used when a free-text language cannot be parsed
    pub default_language: Language,

    /// Suppress invalid-language warnings
    pub hide_warnings: bool,

    /// Extra languages loaded by `ItemsLang::init` besides the default
    pub preload: Vec<Language>,

    /// Resource directory for a `DirectorySource`
    pub resources_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            engine_version: "1.20".to_string(),
            default_language: Language::EN_US,
            hide_warnings: false,
            preload: Vec::new(),
            resources_dir: PathBuf::from("resources"),
        }
    }
}

impl Settings {
    pub fn new(engine_version: impl Into<String>) -> Self {
        Self {
            engine_version: engine_version.into(),
            ..Self::default()
        }
    }

    pub fn with_default_language(mut self, language: Language) -> Self {
        self.default_language = language;
        self
    }

    pub fn with_hidden_warnings(mut self) -> Self {
        self.hide_warnings = true;
        self
    }

    pub fn with_preload(mut self, languages: impl IntoIterator<Item = Language>) -> Self {
        self.preload = languages.into_iter().collect();
        self
    }

    pub fn with_resources_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.resources_dir = dir.into();
        self
    }

    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            // Engine
            engine_version: std::env::var("ITEMS_LANG_ENGINE_VERSION")
                .context("ITEMS_LANG_ENGINE_VERSION not set")?,

            // Languages
            default_language: match std::env::var("ITEMS_LANG_DEFAULT") {
                Ok(code) => Language::from_code(code.trim())
                    .with_context(|| format!("Invalid ITEMS_LANG_DEFAULT '{}'", code))?,
                Err(_) => defaults.default_language,
            },
            hide_warnings: std::env::var("ITEMS_LANG_HIDE_WARNINGS")
                .ok()
                .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.hide_warnings),
            preload: match std::env::var("ITEMS_LANG_PRELOAD") {
                Ok(list) => parse_language_list(&list)
                    .context("Invalid ITEMS_LANG_PRELOAD")?,
                Err(_) => defaults.preload,
            },

            // Resources
            resources_dir: std::env::var("ITEMS_LANG_RESOURCES")
                .map(PathBuf::from)
                .unwrap_or(defaults.resources_dir),
        })
    }
}

/// Parse a comma-separated list of locale tags, skipping blank entries.
fn parse_language_list(list: &str) -> Result<Vec<Language>> {
    list.split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(|code| Language::from_code(code).with_context(|| format!("Unknown language '{}'", code)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "ITEMS_LANG_ENGINE_VERSION",
        "ITEMS_LANG_DEFAULT",
        "ITEMS_LANG_HIDE_WARNINGS",
        "ITEMS_LANG_PRELOAD",
        "ITEMS_LANG_RESOURCES",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.default_language, Language::EN_US);
        assert!(!settings.hide_warnings);
        assert!(settings.preload.is_empty());
    }

    #[test]
    fn test_builder() {
        let spanish = Language::from_code("es_es").unwrap();
        let settings = Settings::new("1.8.8")
            .with_default_language(spanish)
            .with_hidden_warnings()
            .with_preload([Language::EN_US]);

        assert_eq!(settings.engine_version, "1.8.8");
        assert_eq!(settings.default_language, spanish);
        assert!(settings.hide_warnings);
        assert_eq!(settings.preload, vec![Language::EN_US]);
    }

    #[test]
    fn test_parse_language_list() {
        let languages = parse_language_list(" en_us, ES_ES ,,").unwrap();
        assert_eq!(languages.len(), 2);
        assert_eq!(languages[1].code(), "es_es");

        assert!(parse_language_list("en_us,elvish").is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_requires_engine_version() {
        clear_env();
        let err = Settings::from_env().unwrap_err();
        assert!(err.to_string().contains("ITEMS_LANG_ENGINE_VERSION"));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        std::env::set_var("ITEMS_LANG_ENGINE_VERSION", "1.16.5");

        let settings = Settings::from_env().expect("Should load");
        assert_eq!(settings.engine_version, "1.16.5");
        assert_eq!(settings.default_language, Language::EN_US);
        assert!(!settings.hide_warnings);
        assert_eq!(settings.resources_dir, PathBuf::from("resources"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_all_values() {
        clear_env();
        std::env::set_var("ITEMS_LANG_ENGINE_VERSION", "1.12.2");
        std::env::set_var("ITEMS_LANG_DEFAULT", "DE_DE");
        std::env::set_var("ITEMS_LANG_HIDE_WARNINGS", "true");
        std::env::set_var("ITEMS_LANG_PRELOAD", "en_us,fr_fr");
        std::env::set_var("ITEMS_LANG_RESOURCES", "/opt/lang");

        let settings = Settings::from_env().expect("Should load");
        assert_eq!(settings.default_language.code(), "de_de");
        assert!(settings.hide_warnings);
        assert_eq!(settings.preload.len(), 2);
        assert_eq!(settings.resources_dir, PathBuf::from("/opt/lang"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_default() {
        clear_env();
        std::env::set_var("ITEMS_LANG_ENGINE_VERSION", "1.20");
        std::env::set_var("ITEMS_LANG_DEFAULT", "elvish");

        let err = Settings::from_env().unwrap_err();
        assert!(err.to_string().contains("ITEMS_LANG_DEFAULT"));

        clear_env();
    }
}
