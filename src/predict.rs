//! Prediction service: raw inputs in, localized price out.

use crate::currency::Currency;
use crate::features::{FeatureAdapter, FeatureVector, RawInputs, ValidationError};
use crate::i18n::{format_amount, Language, MessageKey};
use crate::metrics::ServiceMetrics;
use crate::model::{ModelError, Regressor};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// The model predicts in units of USD 100,000.
pub const USD_PER_MODEL_UNIT: f64 = 100_000.0;

/// One prediction request as submitted by the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    /// Display language code; unknown codes fall back to English
    #[serde(default)]
    pub lang: Option<String>,

    /// Display currency code; unknown codes are rejected
    #[serde(default)]
    pub currency: Option<String>,

    #[serde(flatten)]
    pub inputs: RawInputs,
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictionResult {
    pub language: &'static str,
    pub currency: &'static str,
    /// Model output, in model units
    pub raw: f64,
    pub usd: f64,
    /// Price in the selected currency
    pub amount: f64,
    /// Amount with symbol and locale grouping, e.g. "1.200.000 €"
    pub formatted: String,
    /// Localized result line, e.g. "Precio estimado: 1.200.000 €"
    pub message: String,
    pub features: FeatureVector,
}

#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error("Invalid input: {source}")]
    Validation {
        #[source]
        source: ValidationError,
        language: Language,
    },

    #[error("Unknown currency code: '{0}'")]
    UnknownCurrency(String),

    #[error("Inference failed: {source}")]
    Model {
        #[source]
        source: ModelError,
        language: Language,
    },
}

impl PredictError {
    /// Message suitable for the end user, in the request's language.
    pub fn localized_message(&self) -> String {
        match self {
            PredictError::Validation { source, language } => source.localized_message(*language),
            PredictError::UnknownCurrency(_) => self.to_string(),
            PredictError::Model { language, .. } => {
                language.text(MessageKey::ErrorPredictionFailed).to_string()
            }
        }
    }
}

/// Owns the loaded model and runs the adapt → infer → format pipeline.
pub struct Predictor {
    model: Arc<dyn Regressor>,
    adapter: FeatureAdapter,
    default_language: Language,
    default_currency: Currency,
    metrics: &'static ServiceMetrics,
}

impl Predictor {
    /// Wrap a model, confirming it was trained on the adapter's columns.
    pub fn new(model: Arc<dyn Regressor>) -> Result<Self, ModelError> {
        let found = FeatureVector::column_names();
        if model.feature_names() != found.as_slice() {
            return Err(ModelError::SchemaMismatch {
                expected: model.feature_names().to_vec(),
                found: found.iter().map(|s| s.to_string()).collect(),
            });
        }

        Ok(Self {
            model,
            adapter: FeatureAdapter::new(),
            default_language: Language::canonical(),
            default_currency: Currency::usd(),
            metrics: ServiceMetrics::global(),
        })
    }

    pub fn with_defaults(mut self, language: Language, currency: Currency) -> Self {
        self.default_language = language;
        self.default_currency = currency;
        self
    }

    pub fn default_language(&self) -> Language {
        self.default_language
    }

    pub fn default_currency(&self) -> Currency {
        self.default_currency
    }

    pub fn model(&self) -> &dyn Regressor {
        self.model.as_ref()
    }

    /// Language for a request; absent means the configured default.
    pub fn resolve_language(&self, code: Option<&str>) -> Language {
        code.map(Language::resolve).unwrap_or(self.default_language)
    }

    pub fn resolve_currency(&self, code: Option<&str>) -> Result<Currency, PredictError> {
        match code {
            None => Ok(self.default_currency),
            Some(code) => Currency::from_code(code)
                .map_err(|_| PredictError::UnknownCurrency(code.to_string())),
        }
    }

    pub fn predict(&self, request: &PredictRequest) -> Result<PredictionResult, PredictError> {
        let language = self.resolve_language(request.lang.as_deref());
        let currency = self.resolve_currency(request.currency.as_deref())?;

        let features = self.adapter.adapt(&request.inputs).map_err(|source| {
            debug!("Rejected inputs: {}", source);
            self.metrics.record_validation_failure();
            PredictError::Validation { source, language }
        })?;

        let raw = self
            .model
            .predict(&features)
            .and_then(|raw| {
                if raw.is_finite() {
                    Ok(raw)
                } else {
                    Err(ModelError::NonFinite(raw))
                }
            })
            .map_err(|source| {
                warn!("Inference failed for {:?}: {}", features.as_slice(), source);
                self.metrics.record_prediction_failure();
                PredictError::Model { source, language }
            })?;

        let usd = raw * USD_PER_MODEL_UNIT;
        let amount = currency.from_usd(usd);
        let formatted = format_amount(amount, language, currency);
        let message = format!("{}: {}", language.text(MessageKey::ResultTitle), formatted);

        self.metrics.record_prediction();
        debug!(
            "Predicted {} for {:?} ({}, {})",
            formatted,
            features.as_slice(),
            language.code(),
            currency.code()
        );

        Ok(PredictionResult {
            language: language.code(),
            currency: currency.code(),
            raw,
            usd,
            amount,
            formatted,
            message,
            features,
        })
    }
}
