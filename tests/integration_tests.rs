//! Integration tests for the Global Housing price estimator
//!
//! These tests wire the real model artifact, the prediction service, the
//! geocoder and the HTTP router together. The geocoding service is mocked
//! with wiremock.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

use global_housing::config::Config;
use global_housing::currency::Currency;
use global_housing::features::RawInputs;
use global_housing::geocode::Geocoder;
use global_housing::i18n::{Language, LanguageRegistry, LocalizationTable, MessageKey};
use global_housing::model::{DumpNode, GradientBoostedModel, ModelArtifact, Regressor, Scaler};
use global_housing::predict::{PredictRequest, Predictor};
use global_housing::retry::RetryConfig;
use global_housing::server::{router, AppState};

// ==================== Test Helpers ====================

fn shipped_model_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/global_model.json")
}

fn shipped_predictor() -> Predictor {
    let model = GradientBoostedModel::load(shipped_model_path()).unwrap();
    Predictor::new(Arc::new(model)).unwrap()
}

/// Create a test config pointing at a mocked geocoder
fn create_test_config(geocoder_url: &str) -> Config {
    Config {
        port: 0,
        api_key: Some("test-api-key".to_string()),
        model_path: shipped_model_path(),
        default_language: Language::ENGLISH,
        default_currency: Currency::usd(),
        geocoder_url: geocoder_url.to_string(),
        geocoder_user_agent: "global_housing_test".to_string(),
        geocoder_timeout: Duration::from_secs(2),
    }
}

fn create_app(config: &Config) -> axum::Router {
    let model = GradientBoostedModel::load(&config.model_path).expect("shipped model loads");
    let predictor = Predictor::new(Arc::new(model))
        .unwrap()
        .with_defaults(config.default_language, config.default_currency);
    let geocoder = Geocoder::from_config(config)
        .unwrap()
        .with_retry(RetryConfig::new(2, Duration::from_millis(10)));

    router(AppState::new(config, predictor, geocoder))
}

fn new_york() -> RawInputs {
    RawInputs {
        latitude: Some(40.7128),
        longitude: Some(-74.0060),
        total_area: Some(1200.0),
        garage_cars: Some(1.0),
        ..Default::default()
    }
}

async fn send_json(app: axum::Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// ==================== Model Artifact Tests ====================

#[test]
fn test_shipped_model_matches_adapter_schema() {
    let model = GradientBoostedModel::load(shipped_model_path()).unwrap();
    assert_eq!(
        model.feature_names(),
        ["Latitude", "Longitude", "TotalArea", "GarageCars", "Bedrooms", "HouseAge"]
    );
    assert!(Predictor::new(Arc::new(model)).is_ok());
}

#[test]
fn test_artifact_round_trip_through_file() {
    let artifact = ModelArtifact {
        feature_names: global_housing::features::FeatureVector::column_names()
            .iter()
            .map(|s| s.to_string())
            .collect(),
        scaler: Scaler {
            mean: vec![0.0; 6],
            scale: vec![1.0; 6],
        },
        base_score: 3.0,
        trees: vec![DumpNode::split(
            0,
            "Bedrooms",
            4.0,
            DumpNode::leaf(1, 0.0),
            DumpNode::leaf(2, 1.0),
        )],
    };

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string_pretty(&artifact).unwrap().as_bytes())
        .unwrap();

    let model = GradientBoostedModel::load(file.path()).unwrap();
    let predictor = Predictor::new(Arc::new(model)).unwrap();

    let small = predictor
        .predict(&PredictRequest {
            inputs: new_york(),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(small.formatted, "$300,000");

    let large = predictor
        .predict(&PredictRequest {
            inputs: RawInputs {
                bedrooms: Some(5.0),
                ..new_york()
            },
            ..Default::default()
        })
        .unwrap();
    assert_eq!(large.formatted, "$400,000");
}

#[test]
fn test_invalid_artifact_is_fatal() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let artifact = r#"{
        "feature_names": ["Latitude"],
        "scaler": {"mean": [0], "scale": [1]},
        "trees": []
    }"#;
    file.write_all(artifact.as_bytes()).unwrap();

    let err = GradientBoostedModel::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("schema mismatch"));
}

// ==================== Prediction Pipeline Tests ====================

#[test]
fn test_prediction_is_deterministic() {
    let predictor = shipped_predictor();
    let request = PredictRequest {
        inputs: new_york(),
        ..Default::default()
    };

    let first = predictor.predict(&request).unwrap();
    for _ in 0..5 {
        let again = predictor.predict(&request).unwrap();
        assert_eq!(again.raw, first.raw);
        assert_eq!(again.formatted, first.formatted);
    }
}

#[test]
fn test_spanish_example_end_to_end() {
    let predictor = shipped_predictor();

    let result = predictor
        .predict(&PredictRequest {
            lang: Some("es".to_string()),
            currency: Some("EUR".to_string()),
            inputs: new_york(),
        })
        .unwrap();

    assert_eq!(
        result.features.as_slice(),
        &[40.7128, -74.0060, 1200.0, 1.0, 3.0, 10.0]
    );
    assert!(result.message.starts_with("Precio estimado: "));
    assert!(result.formatted.ends_with(" €"));
    assert!(!result.formatted.contains(','));
}

#[test]
fn test_every_language_renders_a_result() {
    let predictor = shipped_predictor();

    for config in LanguageRegistry::get().list_enabled() {
        let result = predictor
            .predict(&PredictRequest {
                lang: Some(config.code.to_string()),
                inputs: new_york(),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(result.language, config.code);
        let title = LocalizationTable::lookup(config.code, MessageKey::ResultTitle).unwrap();
        assert!(
            result.message.starts_with(title),
            "{}: '{}' should start with '{}'",
            config.code,
            result.message,
            title
        );
    }
}

#[test]
fn test_every_key_has_text_in_every_language() {
    for config in LanguageRegistry::get().list_enabled() {
        let language = Language::from_code(config.code).unwrap();
        for key in MessageKey::ALL {
            assert!(
                !language.text(key).is_empty(),
                "{} has no text for {}",
                config.code,
                key.as_str()
            );
        }
    }
}

// ==================== HTTP Tests ====================

#[tokio::test]
async fn test_predict_over_http() {
    let app = create_app(&create_test_config("http://127.0.0.1:9"));
    let body = serde_json::json!({
        "lang": "hi",
        "currency": "INR",
        "latitude": 19.076,
        "longitude": 72.8777,
        "total_area": 900,
        "bedrooms": 2
    });
    let request = Request::builder()
        .method("POST")
        .uri("/api/predict")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let (status, json) = send_json(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["currency"], "INR");
    assert!(json["formatted"].as_str().unwrap().starts_with('₹'));
}

#[tokio::test]
async fn test_geocode_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reverse"))
        .and(query_param("accept-language", "fr"))
        .and(header("user-agent", "global_housing_test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "display_name": "Paris, Île-de-France, France"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let app = create_app(&create_test_config(&server.uri()));
    let request = Request::builder()
        .uri("/api/geocode?lat=48.8566&lon=2.3522&lang=fr")
        .body(Body::empty())
        .unwrap();

    let (status, json) = send_json(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "found");
    assert_eq!(json["label"], "Paris, Île-de-France, France");
}

#[tokio::test]
async fn test_geocode_service_down_is_localized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(503))
        .expect(2)
        .mount(&server)
        .await;

    let app = create_app(&create_test_config(&server.uri()));
    let request = Request::builder()
        .uri("/api/geocode?lat=1.5&lon=2.5&lang=es")
        .body(Body::empty())
        .unwrap();

    let (status, json) = send_json(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "failed");
    assert_eq!(
        json["label"],
        Language::SPANISH.text(MessageKey::LocationLookupFailed)
    );
}

#[tokio::test]
async fn test_metrics_requires_configured_key() {
    let config = create_test_config("http://127.0.0.1:9");

    let request = Request::builder().uri("/metrics").body(Body::empty()).unwrap();
    let (status, _) = send_json(create_app(&config), request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let request = Request::builder()
        .uri("/metrics")
        .header("X-API-Key", "test-api-key")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send_json(create_app(&config), request).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["prediction_success_rate"].is_number());
}
