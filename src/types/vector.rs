//! Encoded model input and model output

use crate::error::ValidationError;
use crate::types::feature::{Feature, FEATURE_COUNT};
use serde::Serialize;
use std::fmt;

/// Validated model input, in model feature order.
///
/// Every value lies within its feature's inclusive range; the only way to
/// obtain one is through validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    /// Build a vector from already-encoded values, checking every range in order
    pub fn new(values: [f64; FEATURE_COUNT]) -> Result<Self, ValidationError> {
        for feature in Feature::ALL {
            let value = values[feature.index()];
            if !feature.spec().contains(value) {
                return Err(ValidationError::new(feature, value));
            }
        }
        Ok(Self(values))
    }

    /// Caller guarantees every value is in range
    pub(crate) fn from_validated(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.0[feature.index()]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Single-precision copy for the model input tensor
    pub fn to_model_input(&self) -> Vec<f32> {
        self.0.iter().map(|&v| v as f32).collect()
    }
}

/// Model output for one feature vector
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    /// Predicted rental count for the hour
    pub demand: f64,
}

impl Prediction {
    pub fn new(demand: f64) -> Self {
        Self { demand }
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Predicted demand: {}", self.demand)
    }
}
