//! ONNX model loader

use crate::error::ModelLoadError;
use crate::models::inference::OnnxRegressor;
use crate::types::feature::FEATURE_COUNT;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::ValueType;
use std::path::Path;
use tracing::{info, warn};

/// Loader for the ONNX regression model
pub struct ModelLoader {
    /// Number of threads for ONNX inference
    onnx_threads: usize,
}

impl ModelLoader {
    /// Create a new model loader with default settings (1 thread)
    pub fn new() -> Self {
        Self::with_threads(1)
    }

    /// Create a new model loader with specified number of threads
    pub fn with_threads(onnx_threads: usize) -> Self {
        Self {
            onnx_threads: onnx_threads.max(1),
        }
    }

    pub fn onnx_threads(&self) -> usize {
        self.onnx_threads
    }

    /// Load the model from file
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<OnnxRegressor, ModelLoadError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ModelLoadError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "model".to_string());

        info!(model = %name, path = %path.display(), threads = self.onnx_threads, "Loading ONNX model");

        let runtime_error = |source: ort::Error| ModelLoadError::Runtime {
            path: path.to_path_buf(),
            source,
        };

        let session = Session::builder()
            .and_then(|b| b.with_optimization_level(GraphOptimizationLevel::Level3))
            .and_then(|b| b.with_intra_threads(self.onnx_threads))
            .and_then(|b| b.commit_from_file(path))
            .map_err(runtime_error)?;

        let input = session.inputs.first();
        if let Some(ValueType::Tensor { shape, .. }) = input.map(|i| &i.input_type) {
            // Dynamic dimensions are reported as -1
            if let Some(&width) = shape.last() {
                if width > 0 && width as usize != FEATURE_COUNT {
                    return Err(ModelLoadError::InputShape {
                        expected: FEATURE_COUNT,
                        found: width as usize,
                    });
                }
            }
        }

        let input_name = input
            .map(|i| i.name.clone())
            .unwrap_or_else(|| "float_input".to_string());

        let output_name = session
            .outputs
            .iter()
            .find(|o| !o.name.contains("label"))
            .map(|o| o.name.clone())
            .unwrap_or_else(|| {
                warn!(model = %name, "Model declares no usable output, assuming 'variable'");
                "variable".to_string()
            });

        info!(
            model = %name,
            input = %input_name,
            output = %output_name,
            "Model loaded successfully"
        );

        Ok(OnnxRegressor::new(name, session, input_name, output_name))
    }
}

impl Default for ModelLoader {
    fn default() -> Self {
        Self::new()
    }
}
