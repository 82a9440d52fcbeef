//! Type definitions for the demand predictor

pub mod feature;
pub mod inputs;
pub mod vector;

pub use feature::{Feature, FeatureKind, FeatureSpec, Month, Season, FEATURE_COUNT};
pub use inputs::FormInputs;
pub use vector::{FeatureVector, Prediction};
