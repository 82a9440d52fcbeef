//! Validation and encoding of form submissions into model features.
//!
//! Features are produced in the exact order the regression model was
//! trained on.

use crate::error::ValidationError;
use crate::types::feature::{Feature, FEATURE_COUNT};
use crate::types::inputs::FormInputs;
use crate::types::vector::FeatureVector;
use tracing::debug;

/// Validate the continuous features and encode the submission.
///
/// Continuous features are checked in schema order and the first value
/// outside its inclusive range is returned as the error. Season and month
/// come from closed label lists and are encoded by their code without a
/// range check.
pub fn validate_and_encode(inputs: &FormInputs) -> Result<FeatureVector, ValidationError> {
    let mut values = [0.0_f64; FEATURE_COUNT];
    values[Feature::Seasons.index()] = f64::from(inputs.seasons.code());
    values[Feature::Month.index()] = f64::from(inputs.month.code());

    for feature in Feature::continuous() {
        let Some(value) = inputs.continuous(feature) else {
            continue;
        };
        if !feature.spec().contains(value) {
            debug!(feature = %feature, value = value, "Input out of range");
            return Err(ValidationError::new(feature, value));
        }
        values[feature.index()] = value;
    }

    Ok(FeatureVector::from_validated(values))
}
