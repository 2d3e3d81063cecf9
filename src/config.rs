use crate::currency::Currency;
use crate::i18n::Language;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,
    /// When set, `/metrics` requires a matching `X-API-Key` header
    pub api_key: Option<String>,

    // Model
    pub model_path: PathBuf,

    // Display defaults
    pub default_language: Language,
    pub default_currency: Currency,

    // Reverse geocoding
    pub geocoder_url: String,
    pub geocoder_user_agent: String,
    pub geocoder_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let default_language =
            std::env::var("DEFAULT_LANGUAGE").unwrap_or_else(|_| "en".to_string());
        let default_currency =
            std::env::var("DEFAULT_CURRENCY").unwrap_or_else(|_| "USD".to_string());

        Ok(Self {
            // Server
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            api_key: std::env::var("API_KEY").ok().filter(|k| !k.is_empty()),

            // Model
            model_path: std::env::var("MODEL_PATH")
                .unwrap_or_else(|_| "data/global_model.json".to_string())
                .into(),

            // Display defaults
            default_language: Language::from_code(&default_language)
                .context("DEFAULT_LANGUAGE is not a supported language")?,
            default_currency: Currency::from_code(&default_currency)
                .context("DEFAULT_CURRENCY is not a supported currency")?,

            // Reverse geocoding
            geocoder_url: std::env::var("GEOCODER_URL")
                .unwrap_or_else(|_| "https://nominatim.openstreetmap.org".to_string())
                .trim_end_matches('/')
                .to_string(),
            geocoder_user_agent: std::env::var("GEOCODER_USER_AGENT")
                .unwrap_or_else(|_| "global_housing_ai_v5".to_string()),
            geocoder_timeout: Duration::from_secs(
                std::env::var("GEOCODER_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(10),
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 8] = [
        "PORT",
        "API_KEY",
        "MODEL_PATH",
        "DEFAULT_LANGUAGE",
        "DEFAULT_CURRENCY",
        "GEOCODER_URL",
        "GEOCODER_USER_AGENT",
        "GEOCODER_TIMEOUT_SECS",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::from_env().unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.api_key, None);
        assert_eq!(config.model_path, PathBuf::from("data/global_model.json"));
        assert_eq!(config.default_language, Language::ENGLISH);
        assert_eq!(config.default_currency.code(), "USD");
        assert_eq!(config.geocoder_url, "https://nominatim.openstreetmap.org");
        assert_eq!(config.geocoder_user_agent, "global_housing_ai_v5");
        assert_eq!(config.geocoder_timeout, Duration::from_secs(10));
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        std::env::set_var("PORT", "3000");
        std::env::set_var("API_KEY", "secret");
        std::env::set_var("DEFAULT_LANGUAGE", "es");
        std::env::set_var("DEFAULT_CURRENCY", "eur");
        std::env::set_var("GEOCODER_URL", "http://localhost:9000/");
        std::env::set_var("GEOCODER_TIMEOUT_SECS", "3");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.port, 3000);
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.default_language, Language::SPANISH);
        assert_eq!(config.default_currency.code(), "EUR");
        assert_eq!(config.geocoder_url, "http://localhost:9000");
        assert_eq!(config.geocoder_timeout, Duration::from_secs(3));
    }

    #[test]
    #[serial]
    fn test_invalid_numbers_fall_back_to_defaults() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");
        std::env::set_var("GEOCODER_TIMEOUT_SECS", "-1");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.port, 8080);
        assert_eq!(config.geocoder_timeout, Duration::from_secs(10));
    }

    #[test]
    #[serial]
    fn test_empty_api_key_is_unset() {
        clear_env();
        std::env::set_var("API_KEY", "");
        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.api_key, None);
    }

    #[test]
    #[serial]
    fn test_unknown_default_language_is_error() {
        clear_env();
        std::env::set_var("DEFAULT_LANGUAGE", "xx");
        let result = Config::from_env();
        clear_env();

        let err = result.unwrap_err();
        assert!(err.to_string().contains("DEFAULT_LANGUAGE"));
    }

    #[test]
    #[serial]
    fn test_unknown_default_currency_is_error() {
        clear_env();
        std::env::set_var("DEFAULT_CURRENCY", "XYZ");
        let result = Config::from_env();
        clear_env();

        assert!(result.unwrap_err().to_string().contains("DEFAULT_CURRENCY"));
    }
}
