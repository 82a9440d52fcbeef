//! ML model inference components

pub mod inference;
pub mod loader;

pub use inference::{InferenceGateway, OnnxRegressor, Regressor};
pub use loader::ModelLoader;
