//! Preview binary - runs one prediction from the command line, no server
//!
//! Usage:
//!   cargo run --bin preview -- latitude=40.7128 longitude=-74.006 total_area=1200
//!   cargo run --bin preview -- lat=48.85 lon=2.35 area=900 lang=fr currency=EUR --geocode
//!
//! Field keys: latitude (lat), longitude (lon), total_area (area),
//! garage_cars (garage), bedrooms, house_age (age). Omitted optional fields
//! take their defaults. `lang` and `currency` default to DEFAULT_LANGUAGE and
//! DEFAULT_CURRENCY.
//!
//! Optional environment:
//! - MODEL_PATH (defaults to data/global_model.json)
//! - GEOCODER_URL / GEOCODER_USER_AGENT (only with --geocode)

use anyhow::{bail, Context, Result};
use global_housing::config::Config;
use global_housing::features::Field;
use global_housing::geocode::Geocoder;
use global_housing::model::GradientBoostedModel;
use global_housing::predict::{PredictRequest, Predictor};
use std::sync::Arc;
use tracing::info;

struct PreviewArgs {
    request: PredictRequest,
    geocode: bool,
}

fn field_for_key(key: &str) -> Option<Field> {
    match key {
        "latitude" | "lat" => Some(Field::Latitude),
        "longitude" | "lon" | "lng" => Some(Field::Longitude),
        "total_area" | "area" => Some(Field::TotalArea),
        "garage_cars" | "garage" => Some(Field::GarageCars),
        "bedrooms" | "beds" => Some(Field::Bedrooms),
        "house_age" | "age" => Some(Field::HouseAge),
        _ => None,
    }
}

fn parse_args(args: &[String]) -> Result<PreviewArgs> {
    let mut request = PredictRequest::default();
    let mut geocode = false;

    for arg in args {
        if arg == "--geocode" {
            geocode = true;
            continue;
        }

        let (key, value) = arg
            .split_once('=')
            .with_context(|| format!("Expected key=value, got '{}'", arg))?;

        match key {
            "lang" => request.lang = Some(value.to_string()),
            "currency" => request.currency = Some(value.to_string()),
            _ => {
                let field = field_for_key(key)
                    .with_context(|| format!("Unknown field '{}'", key))?;
                let number: f64 = value
                    .parse()
                    .with_context(|| format!("'{}' is not a number for {}", value, key))?;
                request.inputs.set(field, number);
            }
        }
    }

    if request.inputs == Default::default() {
        bail!("No inputs given. Example: latitude=40.7128 longitude=-74.006 total_area=1200");
    }

    Ok(PreviewArgs { request, geocode })
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("global_housing=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let PreviewArgs { request, geocode } = parse_args(&args)?;

    let config = Config::from_env()?;
    info!("Loading model from {}", config.model_path.display());
    let model = GradientBoostedModel::load(&config.model_path)?;
    let predictor = Predictor::new(Arc::new(model))?
        .with_defaults(config.default_language, config.default_currency);

    println!("\n========== PREDICTION PREVIEW ==========");

    if geocode {
        if let (Some(lat), Some(lon)) = (request.inputs.latitude, request.inputs.longitude) {
            let language = predictor.resolve_language(request.lang.as_deref());
            let place = Geocoder::from_config(&config)?
                .describe(lat, lon, language)
                .await;
            println!("Location: {}", place.label);
        }
    }

    match predictor.predict(&request) {
        Ok(result) => {
            println!("Features: {:?}", result.features.as_slice());
            println!("Model output: {:.4}", result.raw);
            println!("{}", result.message);
        }
        Err(e) => {
            println!("{}", e.localized_message());
            println!("=========================================\n");
            bail!("Prediction failed: {}", e);
        }
    }

    println!("=========================================\n");
    Ok(())
}
