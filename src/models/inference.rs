//! Inference gateway for demand prediction

use crate::types::vector::{FeatureVector, Prediction};
use anyhow::{Context, Result};
use ort::session::Session;
use ort::value::{DynValue, Tensor};
use std::fmt;
use tracing::debug;

/// A loaded regression model.
///
/// Implementations take the model input as single-precision values in
/// schema order and return one scalar.
pub trait Regressor {
    /// Model name for logs
    fn name(&self) -> &str;

    /// Run one prediction
    fn predict(&mut self, input: &[f32]) -> Result<f64>;
}

/// Regression model backed by an ONNX Runtime session
pub struct OnnxRegressor {
    name: String,
    session: Session,
    input_name: String,
    output_name: String,
}

impl OnnxRegressor {
    pub(crate) fn new(
        name: String,
        session: Session,
        input_name: String,
        output_name: String,
    ) -> Self {
        Self {
            name,
            session,
            input_name,
            output_name,
        }
    }
}

impl fmt::Debug for OnnxRegressor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnnxRegressor")
            .field("name", &self.name)
            .field("input_name", &self.input_name)
            .field("output_name", &self.output_name)
            .finish_non_exhaustive()
    }
}

impl Regressor for OnnxRegressor {
    fn name(&self) -> &str {
        &self.name
    }

    fn predict(&mut self, input: &[f32]) -> Result<f64> {
        // Prepare input tensor - shape [1, num_features]
        let shape = vec![1_i64, input.len() as i64];
        let input_tensor =
            Tensor::from_array((shape, input.to_vec())).context("Failed to create input tensor")?;

        let outputs = self
            .session
            .run(ort::inputs![self.input_name.as_str() => input_tensor])
            .with_context(|| format!("Inference failed for model {}", self.name))?;

        if let Some(output) = outputs.get(self.output_name.as_str()) {
            return extract_scalar(output);
        }

        let (name, output) = outputs.iter().next().context("Model produced no outputs")?;
        debug!(model = %self.name, output = %name, "Named output missing, using first output");
        extract_scalar(&output)
    }
}

/// First element of a float output tensor. Regressors export `[batch, 1]` or `[batch]`.
fn extract_scalar(output: &DynValue) -> Result<f64> {
    let (_, data) = output
        .try_extract_tensor::<f32>()
        .context("Model output is not a float tensor")?;

    data.first()
        .map(|&v| f64::from(v))
        .context("Model output tensor is empty")
}

/// Wraps the loaded model and turns validated feature vectors into predictions
pub struct InferenceGateway<M> {
    model: M,
}

impl<M: Regressor> InferenceGateway<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Run the model once on a validated vector
    pub fn predict(&mut self, vector: &FeatureVector) -> Result<Prediction> {
        let input = vector.to_model_input();
        let demand = self.model.predict(&input)?;

        if !demand.is_finite() {
            anyhow::bail!("Model {} returned a non-finite prediction", self.model.name());
        }

        debug!(model = %self.model.name(), demand = demand, "Prediction complete");

        Ok(Prediction::new(demand))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::types::feature::FEATURE_COUNT;

    /// Stub model returning a fixed value and recording its inputs
    pub(crate) struct FixedRegressor {
        pub value: f64,
        pub calls: usize,
        pub last_input: Option<Vec<f32>>,
    }

    impl FixedRegressor {
        pub fn new(value: f64) -> Self {
            Self {
                value,
                calls: 0,
                last_input: None,
            }
        }
    }

    impl Regressor for FixedRegressor {
        fn name(&self) -> &str {
            "fixed"
        }

        fn predict(&mut self, input: &[f32]) -> Result<f64> {
            self.calls += 1;
            self.last_input = Some(input.to_vec());
            Ok(self.value)
        }
    }

    struct FailingRegressor;

    impl Regressor for FailingRegressor {
        fn name(&self) -> &str {
            "failing"
        }

        fn predict(&mut self, _input: &[f32]) -> Result<f64> {
            anyhow::bail!("session closed")
        }
    }

    fn valid_vector() -> FeatureVector {
        FeatureVector::new([4.0, 1.0, 15.0, 12.0, 0.0, 1.0, -5.0, 1.0, 20.0, 0.5, 0.0, 0.0]).unwrap()
    }

    #[test]
    fn test_prediction_is_deterministic() {
        let mut gateway = InferenceGateway::new(FixedRegressor::new(812.25));
        let vector = valid_vector();

        let first = gateway.predict(&vector).unwrap();
        let second = gateway.predict(&vector).unwrap();

        assert_eq!(first, Prediction::new(812.25));
        assert_eq!(first, second);
        assert_eq!(gateway.model().calls, 2);
    }

    #[test]
    fn test_model_receives_vector_in_order() {
        let mut gateway = InferenceGateway::new(FixedRegressor::new(1.0));
        gateway.predict(&valid_vector()).unwrap();

        let input = gateway.model().last_input.clone().unwrap();
        assert_eq!(input.len(), FEATURE_COUNT);
        assert_eq!(input, valid_vector().to_model_input());
    }

    #[test]
    fn test_model_failure_propagates() {
        let mut gateway = InferenceGateway::new(FailingRegressor);
        let err = gateway.predict(&valid_vector()).unwrap_err();
        assert!(err.to_string().contains("session closed"));
    }

    #[test]
    fn test_non_finite_prediction_rejected() {
        let mut gateway = InferenceGateway::new(FixedRegressor::new(f64::NAN));
        assert!(gateway.predict(&valid_vector()).is_err());
        assert_eq!(gateway.model_name(), "fixed");
    }
}
