//! Translation resources: where raw tables come from and how they are parsed.
//!
//! A [`TranslationSource`] hands out raw text for a language file or the
//! legacy identifier table. The parse functions here turn that text into
//! flat `key -> string` maps. A missing or broken resource never fails the
//! caller: it is logged and treated as an empty table.

use crate::i18n::Language;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Flat `namespaced key -> translated string` table.
pub type Table = HashMap<String, String>;

/// Name of the legacy identifier resource.
pub const LEGACY_FILE: &str = "legacy.yml";

/// Provider of raw translation resources.
///
/// `Ok(None)` means the resource does not exist; `Err` means it exists but
/// could not be read.
pub trait TranslationSource: Send + Sync {
    /// Raw JSON text of a language file.
    fn language_table(&self, language: Language) -> Result<Option<String>>;

    /// Raw YAML text of the legacy identifier table.
    fn legacy_table(&self) -> Result<Option<String>>;
}

impl<T: TranslationSource + ?Sized> TranslationSource for Arc<T> {
    fn language_table(&self, language: Language) -> Result<Option<String>> {
        (**self).language_table(language)
    }

    fn legacy_table(&self) -> Result<Option<String>> {
        (**self).legacy_table()
    }
}

/// Resources laid out on disk as `<root>/lang/<code>.json` and
/// `<root>/legacy.yml`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a language file under this source.
    pub fn language_path(&self, language: Language) -> PathBuf {
        self.root.join("lang").join(language.file_name())
    }

    /// Path of the legacy identifier table under this source.
    pub fn legacy_path(&self) -> PathBuf {
        self.root.join(LEGACY_FILE)
    }

    fn read_optional(path: &Path) -> Result<Option<String>> {
        if !path.exists() {
            return Ok(None);
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Some(text))
    }
}

impl TranslationSource for DirectorySource {
    fn language_table(&self, language: Language) -> Result<Option<String>> {
        Self::read_optional(&self.language_path(language))
    }

    fn legacy_table(&self) -> Result<Option<String>> {
        Self::read_optional(&self.legacy_path())
    }
}

/// Resources held in memory, for embedded tables and tests.
#[derive(Debug, Default)]
pub struct MemorySource {
    languages: HashMap<Language, String>,
    legacy: Option<String>,
    language_reads: AtomicUsize,
    legacy_reads: AtomicUsize,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the raw JSON text of a language.
    pub fn with_language(mut self, language: Language, json: impl Into<String>) -> Self {
        self.languages.insert(language, json.into());
        self
    }

    /// Set the raw YAML text of the legacy identifier table.
    pub fn with_legacy(mut self, yaml: impl Into<String>) -> Self {
        self.legacy = Some(yaml.into());
        self
    }

    /// How many times a language file was requested.
    pub fn language_reads(&self) -> usize {
        self.language_reads.load(Ordering::Relaxed)
    }

    /// How many times the legacy table was requested.
    pub fn legacy_reads(&self) -> usize {
        self.legacy_reads.load(Ordering::Relaxed)
    }
}

impl TranslationSource for MemorySource {
    fn language_table(&self, language: Language) -> Result<Option<String>> {
        self.language_reads.fetch_add(1, Ordering::Relaxed);
        Ok(self.languages.get(&language).cloned())
    }

    fn legacy_table(&self) -> Result<Option<String>> {
        self.legacy_reads.fetch_add(1, Ordering::Relaxed);
        Ok(self.legacy.clone())
    }
}

/// Read and parse one language, degrading to an empty table on any fault.
pub fn read_language(source: &dyn TranslationSource, language: Language) -> Table {
    let file = language.file_name();
    match source.language_table(language) {
        Ok(Some(text)) => parse_language_table(&text).unwrap_or_else(|e| {
            error!("Malformed language file {}: {:#}", file, e);
            Table::new()
        }),
        Ok(None) => {
            warn!("Language file {} does not exist", file);
            Table::new()
        }
        Err(e) => {
            error!("Could not read language file {}: {:#}", file, e);
            Table::new()
        }
    }
}

/// Read and parse the legacy identifier table, degrading to an empty table.
pub fn read_legacy(source: &dyn TranslationSource) -> Table {
    match source.legacy_table() {
        Ok(Some(text)) => parse_legacy_table(&text).unwrap_or_else(|e| {
            error!("Malformed {}: {:#}", LEGACY_FILE, e);
            Table::new()
        }),
        Ok(None) => {
            warn!("{} does not exist", LEGACY_FILE);
            Table::new()
        }
        Err(e) => {
            error!("Could not read {}: {:#}", LEGACY_FILE, e);
            Table::new()
        }
    }
}

/// Parse a JSON language file into a flat table.
///
/// Nested objects are flattened into dotted keys, so `{"item": {"minecraft":
/// {"clock": "Clock"}}}` and `{"item.minecraft.clock": "Clock"}` produce
/// the same entry. Object nodes themselves are never stored. Keys are
/// lower-cased. A leading byte-order mark is skipped.
pub fn parse_language_table(text: &str) -> Result<Table> {
    let value: serde_json::Value =
        serde_json::from_str(strip_bom(text)).context("Language file is not valid JSON")?;

    let serde_json::Value::Object(root) = value else {
        anyhow::bail!("Language file root must be an object");
    };

    let mut table = Table::new();
    for (key, child) in &root {
        flatten_json(key, child, &mut table);
    }
    Ok(table)
}

fn flatten_json(path: &str, value: &serde_json::Value, table: &mut Table) {
    use serde_json::Value;

    match value {
        Value::Object(children) => {
            for (key, child) in children {
                flatten_json(&format!("{}.{}", path, key), child, table);
            }
        }
        Value::String(text) => {
            table.insert(path.to_lowercase(), text.clone());
        }
        Value::Number(number) => {
            table.insert(path.to_lowercase(), number.to_string());
        }
        Value::Bool(flag) => {
            table.insert(path.to_lowercase(), flag.to_string());
        }
        Value::Null | Value::Array(_) => debug!("Skipping non-text entry {}", path),
    }
}

/// Parse the YAML legacy identifier table into a flat table.
pub fn parse_legacy_table(text: &str) -> Result<Table> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(strip_bom(text)).context("Legacy table is not valid YAML")?;

    let mut table = Table::new();
    match value {
        serde_yaml::Value::Mapping(root) => {
            for (key, child) in &root {
                if let Some(key) = yaml_scalar(key) {
                    flatten_yaml(&key, child, &mut table);
                }
            }
        }
        // An empty document
        serde_yaml::Value::Null => {}
        _ => anyhow::bail!("Legacy table root must be a mapping"),
    }
    Ok(table)
}

fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

fn flatten_yaml(path: &str, value: &serde_yaml::Value, table: &mut Table) {
    if let serde_yaml::Value::Mapping(children) = value {
        for (key, child) in children {
            if let Some(key) = yaml_scalar(key) {
                flatten_yaml(&format!("{}.{}", path, key), child, table);
            }
        }
    } else if let Some(text) = yaml_scalar(value) {
        table.insert(path.to_lowercase(), text);
    } else {
        debug!("Skipping non-text entry {}", path);
    }
}

fn yaml_scalar(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(text) => Some(text.clone()),
        serde_yaml::Value::Number(number) => Some(number.to_string()),
        serde_yaml::Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn spanish() -> Language {
        Language::from_code("es_es").unwrap()
    }

    // ==================== JSON Parsing Tests ====================

    #[test]
    fn test_parse_flat_table() {
        let table =
            parse_language_table(r#"{"item.minecraft.clock": "Clock", "block.minecraft.stone": "Stone"}"#)
                .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table["item.minecraft.clock"], "Clock");
    }

    #[test]
    fn test_parse_nested_table_skips_sections() {
        let table = parse_language_table(
            r#"{"item": {"minecraft": {"clock": "Clock", "compass": "Compass"}}}"#,
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table["item.minecraft.compass"], "Compass");
        assert!(!table.contains_key("item"));
        assert!(!table.contains_key("item.minecraft"));
    }

    #[test]
    fn test_parse_lowercases_keys() {
        let table = parse_language_table(r#"{"Item.Minecraft.CLOCK": "Clock"}"#).unwrap();
        assert_eq!(table["item.minecraft.clock"], "Clock");
    }

    #[test]
    fn test_parse_keeps_value_case() {
        let table = parse_language_table(r#"{"gui.done": "DONE!"}"#).unwrap();
        assert_eq!(table["gui.done"], "DONE!");
    }

    #[test]
    fn test_parse_scalars_and_skips_lists() {
        let table =
            parse_language_table(r#"{"a": 1, "b": true, "c": null, "d": ["x"]}"#).unwrap();

        assert_eq!(table["a"], "1");
        assert_eq!(table["b"], "true");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_parse_bom_prefixed_table() {
        let table =
            parse_language_table("\u{feff}{\"item.minecraft.clock\": \"Clock\"}").unwrap();
        assert_eq!(table.get("item.minecraft.clock").map(String::as_str), Some("Clock"));
    }

    #[test]
    fn test_parse_malformed_json() {
        assert!(parse_language_table("{\"item.minecraft.clock\": ").is_err());
        assert!(parse_language_table("[1, 2]").is_err());
    }

    // ==================== YAML Parsing Tests ====================

    #[test]
    fn test_parse_legacy_table() {
        let table = parse_legacy_table("wool-1: orange_wool\n35-14: red_wool\n").unwrap();

        assert_eq!(table["wool-1"], "orange_wool");
        assert_eq!(table["35-14"], "red_wool");
    }

    #[test]
    fn test_parse_bom_prefixed_legacy_table() {
        let table = parse_legacy_table("\u{feff}wool-1: orange_wool\n").unwrap();
        assert_eq!(table.get("wool-1").map(String::as_str), Some("orange_wool"));
    }

    #[test]
    fn test_parse_legacy_table_empty_mapping() {
        assert!(parse_legacy_table("{}").unwrap().is_empty());
    }

    #[test]
    fn test_parse_legacy_table_rejects_list() {
        assert!(parse_legacy_table("- a\n- b\n").is_err());
    }

    // ==================== Reader Tests ====================

    #[test]
    fn test_read_language_missing_is_empty() {
        let source = MemorySource::new();
        assert!(read_language(&source, Language::EN_US).is_empty());
        assert_eq!(source.language_reads(), 1);
    }

    #[test]
    fn test_read_language_malformed_is_empty() {
        let source = MemorySource::new().with_language(Language::EN_US, "not json");
        assert!(read_language(&source, Language::EN_US).is_empty());
    }

    #[test]
    fn test_read_legacy_missing_is_empty() {
        let source = MemorySource::new();
        assert!(read_legacy(&source).is_empty());
        assert_eq!(source.legacy_reads(), 1);
    }

    // ==================== Directory Source Tests ====================

    #[test]
    fn test_directory_source_reads_files() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::create_dir(temp_dir.path().join("lang")).unwrap();
        std::fs::write(
            temp_dir.path().join("lang").join("es_es.json"),
            r#"{"item.minecraft.clock": "Reloj"}"#,
        )
        .unwrap();
        std::fs::write(temp_dir.path().join("legacy.yml"), "wool-1: orange_wool\n").unwrap();

        let source = DirectorySource::new(temp_dir.path());

        let table = read_language(&source, spanish());
        assert_eq!(table["item.minecraft.clock"], "Reloj");

        let legacy = read_legacy(&source);
        assert_eq!(legacy["wool-1"], "orange_wool");
    }

    #[test]
    fn test_directory_source_missing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let source = DirectorySource::new(temp_dir.path());

        assert_eq!(source.language_table(spanish()).unwrap(), None);
        assert_eq!(source.legacy_table().unwrap(), None);
    }

    #[test]
    fn test_directory_source_paths() {
        let source = DirectorySource::new("/res");
        assert_eq!(
            source.language_path(Language::EN_US),
            PathBuf::from("/res/lang/en_us.json")
        );
        assert_eq!(source.legacy_path(), PathBuf::from("/res/legacy.yml"));
    }
}
