//! HTTP surface: dashboard page plus a small JSON API.

use crate::config::Config;
use crate::currency::{Currency, CurrencyConfig};
use crate::features::{Field, FEATURE_SCHEMA};
use crate::geocode::{Geocoder, PlaceLabel};
use crate::i18n::{Language, LanguageRegistry, LocalizationTable};
use crate::metrics::{MetricsReport, ServiceMetrics};
use crate::model::Regressor;
use crate::predict::{PredictError, PredictRequest, PredictionResult, Predictor};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use subtle::ConstantTimeEq;
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

const INDEX_HTML: &str = include_str!("../static/index.html");

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized")]
    Unauthorized,

    /// Input failed validation; the message is already localized
    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            ApiError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<PredictError> for ApiError {
    fn from(err: PredictError) -> Self {
        let message = err.localized_message();
        match err {
            PredictError::Validation { .. } => ApiError::Unprocessable(message),
            PredictError::UnknownCurrency(_) => ApiError::BadRequest(message),
            PredictError::Model { .. } => ApiError::Internal(message),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<Predictor>,
    pub geocoder: Arc<Geocoder>,
    pub api_key: Option<Arc<str>>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: &Config, predictor: Predictor, geocoder: Geocoder) -> Self {
        Self {
            predictor: Arc::new(predictor),
            geocoder: Arc::new(geocoder),
            api_key: config.api_key.as_deref().map(Arc::from),
            started_at: Utc::now(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/api/languages", get(list_languages))
        .route("/api/currencies", get(list_currencies))
        .route("/api/strings/:lang", get(get_strings))
        .route("/api/schema", get(get_schema))
        .route("/api/predict", post(predict))
        .route("/api/geocode", get(geocode))
        .route("/metrics", get(metrics))
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Constant-time comparison for API keys.
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

// ==================== Handlers ====================

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn not_found() -> ApiError {
    ApiError::NotFound("No such route".to_string())
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    started_at: DateTime<Utc>,
    uptime_secs: i64,
    model_features: Vec<String>,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        started_at: state.started_at,
        uptime_secs: (Utc::now() - state.started_at).num_seconds(),
        model_features: state.predictor.model().feature_names().to_vec(),
    })
}

#[derive(Debug, Serialize)]
struct LanguageEntry {
    code: &'static str,
    name: &'static str,
    native_name: &'static str,
    default: bool,
}

async fn list_languages(State(state): State<AppState>) -> Json<Vec<LanguageEntry>> {
    let default = state.predictor.default_language().code();
    Json(
        LanguageRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|config| LanguageEntry {
                code: config.code,
                name: config.name,
                native_name: config.native_name,
                default: config.code == default,
            })
            .collect(),
    )
}

#[derive(Debug, Serialize)]
struct CurrencyEntry {
    #[serde(flatten)]
    config: &'static CurrencyConfig,
    default: bool,
}

async fn list_currencies(State(state): State<AppState>) -> Json<Vec<CurrencyEntry>> {
    let default = state.predictor.default_currency();
    Json(
        Currency::all()
            .map(|currency| CurrencyEntry {
                config: currency.config(),
                default: currency == default,
            })
            .collect(),
    )
}

#[derive(Debug, Serialize)]
struct StringsResponse {
    language: &'static str,
    strings: BTreeMap<&'static str, &'static str>,
}

async fn get_strings(Path(lang): Path<String>) -> Json<StringsResponse> {
    let language = Language::resolve(&lang);
    Json(StringsResponse {
        language: language.code(),
        strings: LocalizationTable::bundle(language),
    })
}

#[derive(Debug, Deserialize)]
struct LangQuery {
    lang: Option<String>,
}

#[derive(Debug, Serialize)]
struct SchemaEntry {
    field: Field,
    column: &'static str,
    label: &'static str,
    min: f64,
    max: f64,
    whole_number: bool,
    default: Option<f64>,
    required: bool,
}

async fn get_schema(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
) -> Json<Vec<SchemaEntry>> {
    let language = state.predictor.resolve_language(query.lang.as_deref());
    Json(
        FEATURE_SCHEMA
            .iter()
            .map(|rule| SchemaEntry {
                field: rule.field,
                column: rule.field.column(),
                label: language.text(rule.field.label_key()),
                min: rule.min,
                max: rule.max,
                whole_number: rule.whole_number,
                default: rule.default,
                required: rule.is_required(),
            })
            .collect(),
    )
}

async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictionResult>, ApiError> {
    let Json(request) = payload.map_err(|e| {
        debug!("Rejected predict body: {}", e);
        ApiError::BadRequest(e.body_text())
    })?;

    let result = state.predictor.predict(&request)?;
    Ok(Json(result))
}

#[derive(Debug, Deserialize)]
struct GeocodeQuery {
    lat: f64,
    lon: f64,
    lang: Option<String>,
}

async fn geocode(
    State(state): State<AppState>,
    Query(query): Query<GeocodeQuery>,
) -> Result<Json<PlaceLabel>, ApiError> {
    let language = state.predictor.resolve_language(query.lang.as_deref());

    for (field, value) in [(Field::Latitude, query.lat), (Field::Longitude, query.lon)] {
        if let Err(e) = field.rule().apply(Some(value)) {
            return Err(ApiError::BadRequest(e.localized_message(language)));
        }
    }

    Ok(Json(
        state.geocoder.describe(query.lat, query.lon, language).await,
    ))
}

async fn metrics(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<MetricsReport>, ApiError> {
    if let Some(expected) = &state.api_key {
        let provided = headers
            .get("X-API-Key")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if !constant_time_compare(provided, expected) {
            warn!("Rejected /metrics request with missing or invalid API key");
            return Err(ApiError::Unauthorized);
        }
    }

    Ok(Json(ServiceMetrics::global().report()))
}
