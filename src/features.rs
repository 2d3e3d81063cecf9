//! Feature adapter: raw form inputs → the model's fixed-order feature vector.
//!
//! Every recognized input is enumerated in [`FEATURE_SCHEMA`] together with
//! its validation rule, so the adapter does not depend on how the form is
//! rendered. Column order here is the training order of the model; the model
//! loader checks its artifact against [`FeatureVector::column_names`].

use crate::i18n::{render, Language, MessageKey};
use serde::{Deserialize, Serialize};

pub const FEATURE_COUNT: usize = 6;

/// A recognized input field, in model column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Latitude,
    Longitude,
    TotalArea,
    GarageCars,
    Bedrooms,
    HouseAge,
}

impl Field {
    /// Form/JSON field name
    pub fn name(&self) -> &'static str {
        match self {
            Field::Latitude => "latitude",
            Field::Longitude => "longitude",
            Field::TotalArea => "total_area",
            Field::GarageCars => "garage_cars",
            Field::Bedrooms => "bedrooms",
            Field::HouseAge => "house_age",
        }
    }

    /// Column name the model was trained with
    pub fn column(&self) -> &'static str {
        match self {
            Field::Latitude => "Latitude",
            Field::Longitude => "Longitude",
            Field::TotalArea => "TotalArea",
            Field::GarageCars => "GarageCars",
            Field::Bedrooms => "Bedrooms",
            Field::HouseAge => "HouseAge",
        }
    }

    pub fn label_key(&self) -> MessageKey {
        match self {
            Field::Latitude => MessageKey::Latitude,
            Field::Longitude => MessageKey::Longitude,
            Field::TotalArea => MessageKey::TotalArea,
            Field::GarageCars => MessageKey::GarageCars,
            Field::Bedrooms => MessageKey::Bedrooms,
            Field::HouseAge => MessageKey::HouseAge,
        }
    }

    pub fn rule(&self) -> &'static FieldRule {
        &FEATURE_SCHEMA[*self as usize]
    }
}

/// Validation rule for one input field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldRule {
    pub field: Field,
    /// Inclusive lower bound
    pub min: f64,
    /// Inclusive upper bound
    pub max: f64,
    pub whole_number: bool,
    /// Value used when the field is absent. `None` means the field is required.
    pub default: Option<f64>,
}

impl FieldRule {
    const fn required(field: Field, min: f64, max: f64) -> Self {
        Self {
            field,
            min,
            max,
            whole_number: false,
            default: None,
        }
    }

    /// Optional whole-number field with a default.
    const fn count(field: Field, min: f64, max: f64, default: f64) -> Self {
        Self {
            field,
            min,
            max,
            whole_number: true,
            default: Some(default),
        }
    }

    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }

    /// Check one (possibly absent) value against this rule.
    pub fn apply(&self, value: Option<f64>) -> Result<f64, ValidationError> {
        let field = self.field;
        let value = match value.or(self.default) {
            Some(v) => v,
            None => return Err(ValidationError::Missing { field }),
        };

        if !value.is_finite() {
            return Err(ValidationError::NotFinite { field });
        }

        if value < self.min || value > self.max {
            return Err(ValidationError::OutOfRange {
                field,
                value,
                min: self.min,
                max: self.max,
            });
        }

        if self.whole_number && value.fract() != 0.0 {
            return Err(ValidationError::NotWholeNumber { field, value });
        }

        Ok(value)
    }
}

/// Input rules in model column order.
pub static FEATURE_SCHEMA: [FieldRule; FEATURE_COUNT] = [
    FieldRule::required(Field::Latitude, -90.0, 90.0),
    FieldRule::required(Field::Longitude, -180.0, 180.0),
    FieldRule::required(Field::TotalArea, 300.0, 10_000.0),
    FieldRule::count(Field::GarageCars, 0.0, 4.0, 2.0),
    FieldRule::count(Field::Bedrooms, 1.0, 10.0, 3.0),
    FieldRule::count(Field::HouseAge, 0.0, 100.0, 10.0),
];

/// Raw, unvalidated inputs as submitted by the form or map click.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawInputs {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub total_area: Option<f64>,
    pub garage_cars: Option<f64>,
    pub bedrooms: Option<f64>,
    pub house_age: Option<f64>,
}

impl RawInputs {
    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::Latitude => self.latitude,
            Field::Longitude => self.longitude,
            Field::TotalArea => self.total_area,
            Field::GarageCars => self.garage_cars,
            Field::Bedrooms => self.bedrooms,
            Field::HouseAge => self.house_age,
        }
    }

    pub fn set(&mut self, field: Field, value: f64) {
        let slot = match field {
            Field::Latitude => &mut self.latitude,
            Field::Longitude => &mut self.longitude,
            Field::TotalArea => &mut self.total_area,
            Field::GarageCars => &mut self.garage_cars,
            Field::Bedrooms => &mut self.bedrooms,
            Field::HouseAge => &mut self.house_age,
        };
        *slot = Some(value);
    }
}

/// Validated model input, in training column order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn get(&self, field: Field) -> f64 {
        self.0[field as usize]
    }

    /// Column names in vector order.
    pub fn column_names() -> [&'static str; FEATURE_COUNT] {
        FEATURE_SCHEMA.map(|rule| rule.field.column())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{} is required", .field.name())]
    Missing { field: Field },

    #[error("{} is not a finite number", .field.name())]
    NotFinite { field: Field },

    #[error("{} = {value} is outside [{min}, {max}]", .field.name())]
    OutOfRange {
        field: Field,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{} = {value} must be a whole number", .field.name())]
    NotWholeNumber { field: Field, value: f64 },
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Missing { field }
            | ValidationError::NotFinite { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::NotWholeNumber { field, .. } => *field,
        }
    }

    pub fn message_key(&self) -> MessageKey {
        match self {
            ValidationError::Missing { .. } => MessageKey::ErrorMissingField,
            ValidationError::NotFinite { .. } | ValidationError::OutOfRange { .. } => {
                MessageKey::ErrorOutOfRange
            }
            ValidationError::NotWholeNumber { .. } => MessageKey::ErrorNotWholeNumber,
        }
    }

    /// User-facing message in `language`, naming the field by its localized label.
    pub fn localized_message(&self, language: Language) -> String {
        let field = self.field();
        let rule = field.rule();

        // A missing location means the user has not clicked the map yet.
        if matches!(self, ValidationError::Missing { .. })
            && matches!(field, Field::Latitude | Field::Longitude)
        {
            return language.text(MessageKey::SelectLocWarn).to_string();
        }

        let label = language.text(field.label_key());
        let min = format_bound(rule.min);
        let max = format_bound(rule.max);
        render(
            language.text(self.message_key()),
            &[("field", label), ("min", min.as_str()), ("max", max.as_str())],
        )
    }
}

fn format_bound(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

/// Validates raw inputs against the schema and assembles the feature vector.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureAdapter;

impl FeatureAdapter {
    pub fn new() -> Self {
        Self
    }

    pub fn rules(&self) -> &'static [FieldRule; FEATURE_COUNT] {
        &FEATURE_SCHEMA
    }

    /// Produce the feature vector, or the first validation error in column order.
    pub fn adapt(&self, raw: &RawInputs) -> Result<FeatureVector, ValidationError> {
        let mut values = [0.0; FEATURE_COUNT];
        for (slot, rule) in values.iter_mut().zip(FEATURE_SCHEMA.iter()) {
            *slot = rule.apply(raw.get(rule.field))?;
        }
        Ok(FeatureVector(values))
    }
}
