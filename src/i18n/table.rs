//! Localization table: `(language_code, message_key)` → display text.
//!
//! Lookups are read-only against the static registry. A missing entry is a
//! `MissingTranslationError` for callers that want to know; the `text`
//! helpers recover from it by falling back to the canonical language so the
//! end user never sees the error.

use crate::i18n::{Language, LanguageRegistry, MessageKey};
use crate::metrics::ServiceMetrics;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MissingTranslationError {
    #[error("Unknown or disabled language code: '{0}'")]
    UnknownLanguage(String),

    #[error("No '{key}' translation for language '{code}'")]
    MissingKey { code: &'static str, key: &'static str },
}

/// Static lookup over every registered language's strings.
pub struct LocalizationTable;

impl LocalizationTable {
    /// Strict lookup. Fails when the language is unknown/disabled or its
    /// entry for `key` is empty.
    pub fn lookup(code: &str, key: MessageKey) -> Result<&'static str, MissingTranslationError> {
        lookup_in(LanguageRegistry::get(), code, key)
    }

    /// Lookup that never fails: falls back to the canonical language, then to
    /// the key identifier itself.
    pub fn text(code: &str, key: MessageKey) -> &'static str {
        text_in(LanguageRegistry::get(), ServiceMetrics::global(), code, key)
    }

    /// Every UI string for a language, keyed by message identifier.
    pub fn bundle(language: Language) -> BTreeMap<&'static str, &'static str> {
        MessageKey::ALL
            .iter()
            .map(|&key| (key.as_str(), Self::text(language.code(), key)))
            .collect()
    }
}

fn lookup_in(
    registry: &LanguageRegistry,
    code: &str,
    key: MessageKey,
) -> Result<&'static str, MissingTranslationError> {
    let config = registry
        .get_by_code(code)
        .filter(|config| config.enabled)
        .ok_or_else(|| MissingTranslationError::UnknownLanguage(code.to_string()))?;

    let text = config.strings.get(key);
    if text.trim().is_empty() {
        return Err(MissingTranslationError::MissingKey {
            code: config.code,
            key: key.as_str(),
        });
    }

    Ok(text)
}

fn text_in(
    registry: &LanguageRegistry,
    metrics: &ServiceMetrics,
    code: &str,
    key: MessageKey,
) -> &'static str {
    match lookup_in(registry, code, key) {
        Ok(text) => text,
        Err(e) => {
            debug!("{}; using canonical text", e);
            metrics.record_translation_fallback();

            let fallback = registry.canonical().strings.get(key);
            if fallback.trim().is_empty() {
                key.as_str()
            } else {
                fallback
            }
        }
    }
}

/// Substitute `{name}` placeholders in a template.
///
/// Unknown placeholders are left untouched.
pub fn render(template: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(template.to_string(), |acc, (name, value)| {
        acc.replace(&format!("{{{}}}", name), value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::strings::{ENGLISH_STRINGS, SPANISH_STRINGS};
    use crate::i18n::{LanguageConfig, LanguageStrings, NumberFormat};

    // ==================== lookup Tests ====================

    #[test]
    fn test_lookup_existing_entry() {
        let text = LocalizationTable::lookup("es", MessageKey::ResultTitle).unwrap();
        assert_eq!(text, "Precio estimado");
    }

    #[test]
    fn test_lookup_unknown_language() {
        let err = LocalizationTable::lookup("xx", MessageKey::Title).unwrap_err();
        assert_eq!(err, MissingTranslationError::UnknownLanguage("xx".to_string()));
    }

    #[test]
    fn test_every_supported_pair_is_non_empty() {
        for config in LanguageRegistry::get().list_enabled() {
            for key in MessageKey::ALL {
                let text = LocalizationTable::lookup(config.code, key)
                    .unwrap_or_else(|e| panic!("{}", e));
                assert!(!text.trim().is_empty());
            }
        }
    }

    // ==================== text Tests ====================

    #[test]
    fn test_text_falls_back_to_english_for_unknown_language() {
        assert_eq!(
            LocalizationTable::text("xx", MessageKey::PredictBtn),
            "Predict Price"
        );
    }

    #[test]
    fn test_text_for_supported_language() {
        assert_eq!(LocalizationTable::text("fr", MessageKey::Currency), "Devise");
    }

    // ==================== Fallback Tests ====================

    const PARTIAL_ENGLISH: LanguageStrings = LanguageStrings {
        subtitle: "",
        ..ENGLISH_STRINGS
    };

    const PARTIAL_SPANISH: LanguageStrings = LanguageStrings {
        title: "",
        subtitle: "",
        predict_btn: "   ",
        ..SPANISH_STRINGS
    };

    fn config(
        code: &'static str,
        is_canonical: bool,
        strings: &'static LanguageStrings,
    ) -> LanguageConfig {
        LanguageConfig {
            code,
            name: code,
            native_name: code,
            is_canonical,
            enabled: true,
            number_format: NumberFormat::prefix(","),
            strings,
        }
    }

    fn partial_registry() -> LanguageRegistry {
        LanguageRegistry::build(vec![
            config("en", true, &PARTIAL_ENGLISH),
            config("es", false, &PARTIAL_SPANISH),
        ])
    }

    #[test]
    fn test_empty_entry_is_missing_key() {
        let registry = partial_registry();
        assert_eq!(
            lookup_in(&registry, "es", MessageKey::Title).unwrap_err(),
            MissingTranslationError::MissingKey {
                code: "es",
                key: "title"
            }
        );
        assert_eq!(
            lookup_in(&registry, "es", MessageKey::Bedrooms).unwrap(),
            "Dormitorios"
        );
    }

    #[test]
    fn test_whitespace_entry_is_missing_key() {
        let registry = partial_registry();
        assert!(matches!(
            lookup_in(&registry, "es", MessageKey::PredictBtn),
            Err(MissingTranslationError::MissingKey { .. })
        ));
    }

    #[test]
    fn test_missing_entry_falls_back_to_canonical() {
        let registry = partial_registry();
        let metrics = ServiceMetrics::new();

        assert_eq!(
            text_in(&registry, &metrics, "es", MessageKey::Title),
            ENGLISH_STRINGS.title
        );
        assert_eq!(
            text_in(&registry, &metrics, "es", MessageKey::PredictBtn),
            ENGLISH_STRINGS.predict_btn
        );
        assert_eq!(metrics.translation_fallbacks(), 2);
    }

    #[test]
    fn test_missing_everywhere_falls_back_to_key() {
        let registry = partial_registry();
        let metrics = ServiceMetrics::new();

        assert_eq!(
            text_in(&registry, &metrics, "es", MessageKey::Subtitle),
            "subtitle"
        );
        assert_eq!(metrics.translation_fallbacks(), 1);
    }

    #[test]
    fn test_present_entry_does_not_count_fallback() {
        let registry = partial_registry();
        let metrics = ServiceMetrics::new();

        assert_eq!(
            text_in(&registry, &metrics, "es", MessageKey::Bedrooms),
            "Dormitorios"
        );
        assert_eq!(metrics.translation_fallbacks(), 0);
    }

    #[test]
    fn test_unknown_language_counts_fallback() {
        let registry = partial_registry();
        let metrics = ServiceMetrics::new();

        assert_eq!(
            text_in(&registry, &metrics, "xx", MessageKey::Bedrooms),
            ENGLISH_STRINGS.bedrooms
        );
        assert_eq!(metrics.translation_fallbacks(), 1);
    }

    // ==================== bundle Tests ====================

    #[test]
    fn test_bundle_contains_every_key() {
        let bundle = LocalizationTable::bundle(Language::SPANISH);
        assert_eq!(bundle.len(), MessageKey::ALL.len());
        assert_eq!(bundle["predict_btn"], "Predecir precio");
    }

    // ==================== render Tests ====================

    #[test]
    fn test_render_replaces_placeholders() {
        let out = render(
            "{field} must be between {min} and {max}.",
            &[("field", "Bedrooms"), ("min", "1"), ("max", "10")],
        );
        assert_eq!(out, "Bedrooms must be between 1 and 10.");
    }

    #[test]
    fn test_render_leaves_unknown_placeholders() {
        assert_eq!(render("{field} {other}", &[("field", "x")]), "x {other}");
    }

    #[test]
    fn test_render_repeated_placeholder() {
        assert_eq!(render("{a}-{a}", &[("a", "1")]), "1-1");
    }
}
