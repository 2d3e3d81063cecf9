//! Display currencies: static registry of USD exchange rates and symbols.
//!
//! Rates are fixed reference values; the model predicts in USD and the
//! result is multiplied by the selected currency's rate for display.

use anyhow::{bail, Result};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrencyConfig {
    /// ISO 4217 code (e.g., "USD", "EUR")
    pub code: &'static str,

    pub symbol: &'static str,

    /// Units of this currency per one USD
    pub rate_per_usd: f64,
}

impl CurrencyConfig {
    const fn new(code: &'static str, symbol: &'static str, rate_per_usd: f64) -> Self {
        Self {
            code,
            symbol,
            rate_per_usd,
        }
    }
}

/// Currency table, in selector order.
pub static CURRENCIES: [CurrencyConfig; 11] = [
    CurrencyConfig::new("USD", "$", 1.0),
    CurrencyConfig::new("INR", "₹", 83.0),
    CurrencyConfig::new("CNY", "¥", 7.2),
    CurrencyConfig::new("EUR", "€", 0.92),
    CurrencyConfig::new("JPY", "¥", 150.0),
    CurrencyConfig::new("GBP", "£", 0.79),
    CurrencyConfig::new("BRL", "R$", 4.95),
    CurrencyConfig::new("RUB", "₽", 91.0),
    CurrencyConfig::new("TRY", "₺", 30.0),
    CurrencyConfig::new("KRW", "₩", 1330.0),
    CurrencyConfig::new("SAR", "﷼", 3.75),
];

/// A validated currency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Currency {
    config: &'static CurrencyConfig,
}

impl Currency {
    /// US dollar, the model's native currency.
    pub fn usd() -> Currency {
        Currency {
            config: &CURRENCIES[0],
        }
    }

    /// Look up a currency by ISO code (case-insensitive).
    pub fn from_code(code: &str) -> Result<Currency> {
        match CURRENCIES
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code.trim()))
        {
            Some(config) => Ok(Currency { config }),
            None => bail!("Unknown currency code: '{}'", code),
        }
    }

    pub fn all() -> impl Iterator<Item = Currency> {
        CURRENCIES.iter().map(|config| Currency { config })
    }

    pub fn code(&self) -> &'static str {
        self.config.code
    }

    pub fn symbol(&self) -> &'static str {
        self.config.symbol
    }

    pub fn rate_per_usd(&self) -> f64 {
        self.config.rate_per_usd
    }

    pub fn config(&self) -> &'static CurrencyConfig {
        self.config
    }

    /// Convert an amount in USD into this currency.
    pub fn from_usd(&self, usd: f64) -> f64 {
        usd * self.config.rate_per_usd
    }
}
