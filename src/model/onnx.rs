//! ONNX Runtime backend for the arbitrary style transfer network.
//!
//! Loads an exported `.onnx` artifact of the magenta arbitrary-image-
//! stylization network. The graph takes two `float32` NHWC inputs (content
//! placeholder first, style placeholder second) and produces one NHWC
//! output with the content's spatial dimensions.

use std::path::Path;
use std::sync::{Arc, Mutex};

use ndarray::{Array4, ArrayView4, Ix4};
use once_cell::sync::OnceCell;
use ort::session::Session;
use ort::value::Tensor;
use tracing::{debug, info};

use super::{ModelError, StyleTransferModel};

static GLOBAL_MODEL: OnceCell<Arc<OnnxStyleModel>> = OnceCell::new();

pub struct OnnxStyleModel {
    // ort sessions take &mut self to run.
    session: Mutex<Session>,
    name: String,
    content_input: String,
    style_input: String,
    output: String,
}

impl OnnxStyleModel {
    /// Load a model from an `.onnx` file and resolve its input/output names
    /// from the graph, so differently-exported artifacts keep working.
    pub fn load(model_path: &Path) -> Result<Self, ModelError> {
        let load_err = |reason: String| ModelError::Load {
            path: model_path.to_path_buf(),
            reason,
        };

        let session = Session::builder()
            .and_then(|b| b.commit_from_file(model_path))
            .map_err(|e| load_err(e.to_string()))?;

        if session.inputs.len() < 2 || session.outputs.is_empty() {
            return Err(load_err(format!(
                "expected 2 inputs and 1 output, model has {} inputs and {} outputs",
                session.inputs.len(),
                session.outputs.len()
            )));
        }

        let content_input = session.inputs[0].name.to_string();
        let style_input = session.inputs[1].name.to_string();
        let output = session.outputs[0].name.to_string();
        debug!(
            "Model IO resolved: content='{}' style='{}' output='{}'",
            content_input, style_input, output
        );

        let name = model_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "onnx-style-model".to_string());

        Ok(Self {
            session: Mutex::new(session),
            name,
            content_input,
            style_input,
            output,
        })
    }

    /// Process-wide model handle, loaded on first use and reused afterwards.
    /// Later calls return the already-loaded model even if given a different
    /// path.
    pub fn global(model_path: &Path) -> Result<Arc<Self>, ModelError> {
        GLOBAL_MODEL
            .get_or_try_init(|| {
                info!("Loading style transfer model from {:?}", model_path);
                Ok(Arc::new(Self::load(model_path)?))
            })
            .cloned()
    }
}

impl StyleTransferModel for OnnxStyleModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn transfer(
        &self,
        content: ArrayView4<'_, f32>,
        style: ArrayView4<'_, f32>,
    ) -> Result<Array4<f32>, ModelError> {
        let run_err = |e: ort::Error| ModelError::Inference(e.to_string());

        let content_tensor = Tensor::from_array(content.to_owned()).map_err(run_err)?;
        let style_tensor = Tensor::from_array(style.to_owned()).map_err(run_err)?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| ModelError::Inference("model session mutex poisoned".to_string()))?;

        let outputs = session
            .run(ort::inputs![
                self.content_input.as_str() => &content_tensor,
                self.style_input.as_str() => &style_tensor,
            ])
            .map_err(run_err)?;

        let stylized = outputs[self.output.as_str()]
            .try_extract_array::<f32>()
            .map_err(run_err)?
            .to_owned();

        stylized
            .into_dimensionality::<Ix4>()
            .map_err(|e| ModelError::Inference(format!("output is not a 4-D tensor: {e}")))
    }
}
