//! Translation table validation.
//!
//! Compares a translated language table against a reference table (usually
//! the canonical language) to find keys that were never translated and
//! entries whose format placeholders (`%s`, `%1$s`, `%d`) do not line up.

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a translated table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Critical errors that would break formatting at display time
    pub errors: Vec<String>,

    /// Non-critical warnings about coverage
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translated language tables.
pub struct TableValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl TableValidator {
    /// Validate a translated table against a reference table.
    ///
    /// This function checks that:
    /// - every reference key is present in the translation (warning)
    /// - the translation has no keys the reference lacks (warning)
    /// - shared keys carry the same number of format placeholders (error)
    ///
    /// Messages are sorted by key so reports are stable between runs.
    pub fn validate(
        reference: &HashMap<String, String>,
        translated: &HashMap<String, String>,
    ) -> ValidationReport {
        let mut report = ValidationReport::new();

        let mut reference_keys: Vec<&String> = reference.keys().collect();
        reference_keys.sort();

        for key in reference_keys {
            match translated.get(key) {
                None => report.warnings.push(format!("Missing key: {}", key)),
                Some(value) => {
                    if let Some(error) = Self::validate_entry(key, &reference[key], value) {
                        report.errors.push(error);
                    }
                }
            }
        }

        let mut extra_keys: Vec<&String> = translated
            .keys()
            .filter(|key| !reference.contains_key(*key))
            .collect();
        extra_keys.sort();

        for key in extra_keys {
            report.warnings.push(format!("Unexpected key: {}", key));
        }

        report
    }

    /// Check a single entry's placeholders against the reference string.
    fn validate_entry(key: &str, original: &str, translated: &str) -> Option<String> {
        let orig_count = Self::count_placeholders(original);
        let trans_count = Self::count_placeholders(translated);

        if orig_count != trans_count {
            return Some(format!(
                "Placeholder mismatch in {}: original has {}, translation has {}",
                key, orig_count, trans_count
            ));
        }
        None
    }

    /// Count format placeholders in a string.
    fn count_placeholders(text: &str) -> usize {
        let regex =
            PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"%(?:\d+\$)?[sd]").unwrap());

        regex.find_iter(text).count()
    }
}
