//! Validates the localization table and prints a report.
//!
//! Usage:
//!   cargo run --bin check_translations
//!
//! Exits non-zero when any language is missing a string or drops a
//! placeholder that English uses.

use global_housing::i18n::{LanguageRegistry, MessageKey, TranslationValidator};
use std::process::ExitCode;

fn main() -> ExitCode {
    let registry = LanguageRegistry::get();
    let languages = registry.list_all();

    println!(
        "Checking {} languages x {} keys",
        languages.len(),
        MessageKey::ALL.len()
    );
    for config in &languages {
        println!(
            "  {} {:<12} {}{}",
            config.code,
            config.name,
            config.native_name,
            if config.is_canonical { " (canonical)" } else { "" }
        );
    }

    let report = TranslationValidator::validate_table();

    for warning in &report.warnings {
        println!("WARN  {}", warning);
    }
    for error in &report.errors {
        println!("ERROR {}", error);
    }

    if report.has_errors() {
        println!(
            "\n{} error(s), {} warning(s)",
            report.errors.len(),
            report.warnings.len()
        );
        ExitCode::FAILURE
    } else {
        println!("\nAll translations OK ({} warning(s))", report.warnings.len());
        ExitCode::SUCCESS
    }
}
