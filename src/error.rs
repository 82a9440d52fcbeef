//! Error types for validation and model loading

use crate::types::feature::Feature;
use std::path::PathBuf;
use thiserror::Error;

/// A continuous feature fell outside its declared range
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Invalid input for {feature}. Please enter a value between {min} and {max}.")]
pub struct ValidationError {
    pub feature: Feature,
    pub min: f64,
    pub max: f64,
    pub got: f64,
}

impl ValidationError {
    pub fn new(feature: Feature, got: f64) -> Self {
        let spec = feature.spec();
        Self {
            feature,
            min: spec.min,
            max: spec.max,
            got,
        }
    }

    /// Allowed range as shown to the user, e.g. `-17.8 to 39.4`
    pub fn range(&self) -> String {
        format!("{} to {}", self.min, self.max)
    }
}

/// The model artifact could not be loaded; the process cannot serve predictions
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("model file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to load model from {}", path.display())]
    Runtime {
        path: PathBuf,
        #[source]
        source: ort::Error,
    },

    #[error("model expects {found} input features, schema provides {expected}")]
    InputShape { expected: usize, found: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message() {
        let err = ValidationError::new(Feature::Temperature, 50.0);
        assert_eq!(
            err.to_string(),
            "Invalid input for Temperature(°C). Please enter a value between -17.8 and 39.4."
        );
        assert_eq!(err.range(), "-17.8 to 39.4");
    }

    #[test]
    fn test_integer_bounds_display() {
        let err = ValidationError::new(Feature::Visibility, 0.0);
        assert_eq!(err.range(), "1 to 44.42972");
    }

    #[test]
    fn test_not_found_message() {
        let err = ModelLoadError::NotFound {
            path: PathBuf::from("models/missing.onnx"),
        };
        assert_eq!(err.to_string(), "model file not found: models/missing.onnx");
    }
}
