//! Application context: configuration plus the loaded model, built once at startup

use crate::config::AppConfig;
use crate::error::{ModelLoadError, ValidationError};
use crate::models::inference::{InferenceGateway, OnnxRegressor, Regressor};
use crate::models::loader::ModelLoader;
use crate::types::inputs::FormInputs;
use crate::types::vector::Prediction;
use crate::validator::validate_and_encode;
use anyhow::Result;
use tracing::info;

/// Result of one form submission
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Predicted(Prediction),
    /// Input rejected before reaching the model
    Rejected(ValidationError),
}

/// Everything a submission needs, owned for the lifetime of the process
pub struct AppContext<M> {
    config: AppConfig,
    gateway: InferenceGateway<M>,
}

impl AppContext<OnnxRegressor> {
    /// Load the configured ONNX model. Failure here is fatal for the process.
    pub fn load(config: AppConfig) -> Result<Self, ModelLoadError> {
        let loader = ModelLoader::with_threads(config.model.onnx_threads);
        let model = loader.load(&config.model.path)?;
        Ok(Self::with_model(config, model))
    }
}

impl<M: Regressor> AppContext<M> {
    pub fn with_model(config: AppConfig, model: M) -> Self {
        let gateway = InferenceGateway::new(model);
        info!(model = %gateway.model_name(), "Inference gateway initialized");
        Self { config, gateway }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn gateway(&self) -> &InferenceGateway<M> {
        &self.gateway
    }

    /// Validate a submission and, if it passes, run one prediction
    pub fn submit(&mut self, inputs: &FormInputs) -> Result<Outcome> {
        let vector = match validate_and_encode(inputs) {
            Ok(vector) => vector,
            Err(e) => {
                info!(feature = %e.feature, got = e.got, range = %e.range(), "Submission rejected");
                return Ok(Outcome::Rejected(e));
            }
        };

        let prediction = self.gateway.predict(&vector)?;
        info!(demand = prediction.demand, "Submission predicted");
        Ok(Outcome::Predicted(prediction))
    }
}
