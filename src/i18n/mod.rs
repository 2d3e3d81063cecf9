//! Internationalization (i18n) module for multi-language support.
//!
//! All language-related logic and localized strings live here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the 15 supported languages and their metadata
//! - `language`: Type-safe `Language` handle validated against the registry
//! - `strings`: Typed message keys and per-language string sets
//! - `table`: `(language, key)` lookup with canonical fallback and placeholder rendering
//! - `format`: Locale-aware currency amount rendering
//! - `validator`: Completeness and placeholder checks over the whole table
//!
//! # Example
//!
//! ```rust,ignore
//! use global_housing::i18n::{Language, LocalizationTable, MessageKey};
//!
//! let spanish = Language::from_code("es")?;
//! let label = spanish.text(MessageKey::Bedrooms);
//! let title = LocalizationTable::text("xx", MessageKey::Title); // English fallback
//! ```

mod format;
mod language;
mod registry;
mod strings;
mod table;
mod validator;

pub use format::{format_amount, group_digits};
pub use language::Language;
pub use registry::{Grouping, LanguageConfig, LanguageRegistry, NumberFormat};
pub use strings::{LanguageStrings, MessageKey};
pub use table::{render, LocalizationTable, MissingTranslationError};
pub use validator::{TranslationValidator, ValidationReport};
