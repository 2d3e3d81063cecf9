//! The fifteen display languages and their number conventions.

use crate::i18n::strings::{
    LanguageStrings, ARABIC_STRINGS, BENGALI_STRINGS, CHINESE_STRINGS, ENGLISH_STRINGS,
    FRENCH_STRINGS, GERMAN_STRINGS, HINDI_STRINGS, INDONESIAN_STRINGS, ITALIAN_STRINGS,
    JAPANESE_STRINGS, KOREAN_STRINGS, PORTUGUESE_STRINGS, RUSSIAN_STRINGS, SPANISH_STRINGS,
    TURKISH_STRINGS,
};
use std::sync::OnceLock;

/// How digits are grouped when rendering whole amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// Groups of three: 1,234,567
    Thousands,
    /// Last three, then groups of two: 12,34,567
    Indian,
}

/// Locale conventions used when rendering a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub group_separator: &'static str,
    pub grouping: Grouping,
    /// Whether the currency symbol follows the number (`1.200 €`) or leads it (`$1,200`)
    pub symbol_after: bool,
}

impl NumberFormat {
    pub(crate) const fn prefix(group_separator: &'static str) -> Self {
        Self {
            group_separator,
            grouping: Grouping::Thousands,
            symbol_after: false,
        }
    }

    pub(crate) const fn suffix(group_separator: &'static str) -> Self {
        Self {
            group_separator,
            grouping: Grouping::Thousands,
            symbol_after: true,
        }
    }

    pub(crate) const fn indian() -> Self {
        Self {
            group_separator: ",",
            grouping: Grouping::Indian,
            symbol_after: false,
        }
    }
}

/// One displayable language: identity, number conventions and its strings.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 code, lowercase
    pub code: &'static str,

    /// Name in English, for logs and tooling
    pub name: &'static str,

    /// Name as shown in the language selector
    pub native_name: &'static str,

    /// Fallback for every missing entry. Exactly one language has this set.
    pub is_canonical: bool,

    pub enabled: bool,

    pub number_format: NumberFormat,

    pub strings: &'static LanguageStrings,
}

/// Process-wide table of languages, in selector order.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
    canonical: usize,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Shared registry, built on first use.
    ///
    /// # Panics
    /// Panics on first use if the built-in table does not mark exactly one
    /// language as canonical.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| Self::build(builtin_languages()))
    }

    /// Registry over an explicit language list.
    ///
    /// # Panics
    /// Panics unless exactly one language is canonical.
    pub(crate) fn build(languages: Vec<LanguageConfig>) -> Self {
        let mut canonical = languages
            .iter()
            .enumerate()
            .filter(|(_, lang)| lang.is_canonical)
            .map(|(index, _)| index);

        match (canonical.next(), canonical.next()) {
            (Some(index), None) => Self {
                languages,
                canonical: index,
            },
            (None, _) => panic!("Language table has no canonical language"),
            (Some(_), Some(_)) => panic!("Language table has more than one canonical language"),
        }
    }

    /// Case-insensitive lookup ("ES" finds "es"). Disabled languages are returned too.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages
            .iter()
            .find(|lang| lang.code.eq_ignore_ascii_case(code))
    }

    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// The fallback language for missing translations.
    pub fn canonical(&self) -> &LanguageConfig {
        &self.languages[self.canonical]
    }

    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code).is_some_and(|lang| lang.enabled)
    }
}

fn language(
    code: &'static str,
    name: &'static str,
    native_name: &'static str,
    number_format: NumberFormat,
    strings: &'static LanguageStrings,
) -> LanguageConfig {
    LanguageConfig {
        code,
        name,
        native_name,
        is_canonical: false,
        enabled: true,
        number_format,
        strings,
    }
}

/// English first (canonical), then the fourteen translations.
fn builtin_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            is_canonical: true,
            ..language(
                "en",
                "English",
                "English",
                NumberFormat::prefix(","),
                &ENGLISH_STRINGS,
            )
        },
        language(
            "es",
            "Spanish",
            "Español",
            NumberFormat::suffix("."),
            &SPANISH_STRINGS,
        ),
        language(
            "fr",
            "French",
            "Français",
            NumberFormat::suffix("\u{202f}"),
            &FRENCH_STRINGS,
        ),
        language(
            "de",
            "German",
            "Deutsch",
            NumberFormat::suffix("."),
            &GERMAN_STRINGS,
        ),
        language(
            "it",
            "Italian",
            "Italiano",
            NumberFormat::suffix("."),
            &ITALIAN_STRINGS,
        ),
        language(
            "pt",
            "Portuguese",
            "Português",
            NumberFormat::prefix("."),
            &PORTUGUESE_STRINGS,
        ),
        language(
            "ru",
            "Russian",
            "Русский",
            NumberFormat::suffix("\u{a0}"),
            &RUSSIAN_STRINGS,
        ),
        language(
            "zh",
            "Chinese",
            "中文",
            NumberFormat::prefix(","),
            &CHINESE_STRINGS,
        ),
        language(
            "ja",
            "Japanese",
            "日本語",
            NumberFormat::prefix(","),
            &JAPANESE_STRINGS,
        ),
        language(
            "ko",
            "Korean",
            "한국어",
            NumberFormat::prefix(","),
            &KOREAN_STRINGS,
        ),
        language(
            "hi",
            "Hindi",
            "हिन्दी",
            NumberFormat::indian(),
            &HINDI_STRINGS,
        ),
        language(
            "ar",
            "Arabic",
            "العربية",
            NumberFormat::prefix(","),
            &ARABIC_STRINGS,
        ),
        language(
            "tr",
            "Turkish",
            "Türkçe",
            NumberFormat::prefix("."),
            &TURKISH_STRINGS,
        ),
        language(
            "bn",
            "Bengali",
            "বাংলা",
            NumberFormat::indian(),
            &BENGALI_STRINGS,
        ),
        language(
            "id",
            "Indonesian",
            "Bahasa Indonesia",
            NumberFormat::prefix("."),
            &INDONESIAN_STRINGS,
        ),
    ]
}
