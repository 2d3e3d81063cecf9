//! Checks over the localization table.
//!
//! Every language needs a non-empty entry for every message key, and each
//! translated template must keep the `{placeholders}` of its English entry.

use crate::i18n::{LanguageRegistry, MessageKey};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Findings for one entry or for the whole table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Entries that would render wrongly
    pub errors: Vec<String>,

    /// Entries worth a second look
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Compares each translation with its canonical English template.
pub struct TranslationValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Validate a single translated template against the canonical one.
    ///
    /// A placeholder missing from the translation is an error (the value
    /// would never be shown); an extra placeholder is a warning.
    pub fn validate(original: &str, translated: &str) -> ValidationReport {
        let mut report = ValidationReport::new();

        if translated.trim().is_empty() {
            report.errors.push("Translation is empty".to_string());
            return report;
        }

        let orig_placeholders = Self::extract_placeholders(original);
        let trans_placeholders = Self::extract_placeholders(translated);

        let missing: Vec<_> = orig_placeholders.difference(&trans_placeholders).collect();
        if !missing.is_empty() {
            report
                .errors
                .push(format!("Missing placeholders: {:?}", missing));
        }

        let extra: Vec<_> = trans_placeholders.difference(&orig_placeholders).collect();
        if !extra.is_empty() {
            report
                .warnings
                .push(format!("Unexpected placeholders: {:?}", extra));
        }

        report
    }

    /// Validate every (language, key) pair in the registry.
    ///
    /// Each message is prefixed with `code/key` so the report can be read on
    /// its own.
    pub fn validate_table() -> ValidationReport {
        let registry = LanguageRegistry::get();
        let canonical = registry.canonical();
        let mut report = ValidationReport::new();

        for language in registry.list_all() {
            for key in MessageKey::ALL {
                let original = canonical.strings.get(key);
                let translated = language.strings.get(key);
                let entry = Self::validate(original, translated);

                let prefix = format!("{}/{}", language.code, key.as_str());
                report.merge(ValidationReport {
                    errors: entry
                        .errors
                        .into_iter()
                        .map(|e| format!("{}: {}", prefix, e))
                        .collect(),
                    warnings: entry
                        .warnings
                        .into_iter()
                        .map(|w| format!("{}: {}", prefix, w))
                        .collect(),
                });
            }
        }

        report
    }

    /// Extract the set of `{name}` placeholders from a template
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex =
            PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{([a-z_]+)\}").unwrap());

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Placeholder Extraction Tests ====================

    #[test]
    fn test_extract_placeholders_multiple() {
        let placeholders =
            TranslationValidator::extract_placeholders("{field} between {min} and {max}");
        let expected: BTreeSet<String> = ["field", "max", "min"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(placeholders, expected);
    }

    #[test]
    fn test_extract_placeholders_none() {
        assert!(TranslationValidator::extract_placeholders("Predict Price").is_empty());
    }

    #[test]
    fn test_extract_placeholders_adjacent_to_cjk() {
        let placeholders = TranslationValidator::extract_placeholders("{field}必须介于{min}和{max}之间");
        assert_eq!(placeholders.len(), 3);
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_validate_perfect_translation() {
        let report = TranslationValidator::validate(
            "{field} must be between {min} and {max}.",
            "{field} debe estar entre {min} y {max}.",
        );
        assert!(report.is_clean());
    }

    #[test]
    fn test_validate_missing_placeholder() {
        let report = TranslationValidator::validate(
            "{field} must be between {min} and {max}.",
            "{field} debe estar entre {min} y el máximo.",
        );
        assert!(report.has_errors());
        assert!(report.errors[0].contains("max"));
    }

    #[test]
    fn test_validate_extra_placeholder() {
        let report = TranslationValidator::validate("{field} is required.", "{field} {value}");
        assert!(!report.has_errors());
        assert!(report.has_warnings());
    }

    #[test]
    fn test_validate_empty_translation() {
        let report = TranslationValidator::validate("Settings", "   ");
        assert!(report.has_errors());
        assert!(report.errors[0].contains("empty"));
    }

    #[test]
    fn test_shipped_table_is_clean() {
        let report = TranslationValidator::validate_table();
        assert!(report.is_clean(), "{:?}", report);
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_report_cleanliness() {
        let mut report = ValidationReport::default();
        assert!(report.is_clean());

        report.warnings.push("es/title: looks untranslated".to_string());
        assert!(!report.is_clean());
        assert!(!report.has_errors());
    }

    #[test]
    fn test_table_errors_are_prefixed() {
        let mut report = ValidationReport::new();
        report.merge(ValidationReport {
            errors: vec!["es/title: Translation is empty".to_string()],
            warnings: vec![],
        });
        assert!(report.errors[0].starts_with("es/title"));
    }
}
