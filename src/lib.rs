//! Bike Sharing Demand Predictor Library
//!
//! Validates twelve hourly weather and calendar inputs and predicts bike
//! rental demand with a pre-trained regression model exported to ONNX.

pub mod app;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod types;
pub mod validator;

pub use app::{AppContext, Outcome};
pub use config::AppConfig;
pub use error::{ModelLoadError, ValidationError};
pub use models::inference::{InferenceGateway, Regressor};
pub use types::{feature::Feature, inputs::FormInputs, vector::FeatureVector, vector::Prediction};
pub use validator::validate_and_encode;
