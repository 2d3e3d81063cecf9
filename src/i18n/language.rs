//! `Language`: a code known to be registered and enabled.

use crate::i18n::{LanguageConfig, LanguageRegistry, LanguageStrings, MessageKey, NumberFormat};
use anyhow::{bail, Result};

/// Handle onto an enabled registry entry.
///
/// Constructed only through [`Language::from_code`], [`Language::resolve`],
/// [`Language::canonical`] or the constants, so every accessor can rely on the
/// code being registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };

    pub const SPANISH: Language = Language { code: "es" };

    /// Strict parse: unknown and disabled codes are errors.
    pub fn from_code(code: &str) -> Result<Language> {
        let Some(config) = LanguageRegistry::get().get_by_code(code.trim()) else {
            bail!("Unknown language code: '{}'", code);
        };
        if !config.enabled {
            bail!("Language '{}' is disabled", config.code);
        }
        Ok(Language { code: config.code })
    }

    /// Lenient parse used for request parameters: anything unusable becomes
    /// the canonical language.
    pub fn resolve(code: &str) -> Language {
        Language::from_code(code).unwrap_or_else(|e| {
            tracing::debug!("{}; falling back to {}", e, Language::canonical().code());
            Language::canonical()
        })
    }

    pub fn canonical() -> Language {
        Language {
            code: LanguageRegistry::get().canonical().code,
        }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Registry entry for this language.
    ///
    /// # Panics
    /// Only if a `Language` was built around an unregistered code, which the
    /// constructors rule out.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language handles always reference a registered code")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }

    pub fn strings(&self) -> &'static LanguageStrings {
        self.config().strings
    }

    pub fn number_format(&self) -> NumberFormat {
        self.config().number_format
    }

    /// Localized text for a key, with canonical fallback.
    pub fn text(&self, key: MessageKey) -> &'static str {
        crate::i18n::LocalizationTable::text(self.code, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_are_registered() {
        assert_eq!(Language::ENGLISH.name(), "English");
        assert!(Language::ENGLISH.is_canonical());
        assert_eq!(Language::SPANISH.native_name(), "Español");
        assert!(!Language::SPANISH.is_canonical());
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_korean() {
        let language = Language::from_code("ko").expect("Should succeed");
        assert_eq!(language.code(), "ko");
        assert_eq!(language.native_name(), "한국어");
    }

    #[test]
    fn test_from_code_uppercase() {
        let language = Language::from_code("DE").expect("Should succeed");
        assert_eq!(language.code(), "de");
    }

    #[test]
    fn test_from_code_trims_whitespace() {
        assert_eq!(Language::from_code(" it ").unwrap().code(), "it");
    }

    #[test]
    fn test_from_code_rejects_unknown_and_empty() {
        let err = Language::from_code("xx").unwrap_err();
        assert_eq!(err.to_string(), "Unknown language code: 'xx'");
        assert!(Language::from_code("").is_err());
    }

    // ==================== resolve Tests ====================

    #[test]
    fn test_resolve_known_code() {
        assert_eq!(Language::resolve("ja").code(), "ja");
    }

    #[test]
    fn test_resolve_unknown_code_falls_back_to_canonical() {
        assert_eq!(Language::resolve("klingon"), Language::canonical());
    }

    #[test]
    fn test_canonical_is_english() {
        assert_eq!(Language::canonical(), Language::ENGLISH);
    }

    #[test]
    fn test_strings_access() {
        assert_eq!(Language::SPANISH.strings().title, "IA Global de Vivienda");
    }

    #[test]
    fn test_text_uses_language_strings() {
        assert_eq!(Language::SPANISH.text(MessageKey::Bedrooms), "Dormitorios");
    }

    #[test]
    fn test_number_format_access() {
        assert!(Language::SPANISH.number_format().symbol_after);
        assert!(!Language::ENGLISH.number_format().symbol_after);
    }
}
