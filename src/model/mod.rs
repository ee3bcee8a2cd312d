//! The model seam.
//!
//! Style transfer is delegated to an external pre-trained network that this
//! crate treats as a black box: tensors in, tensor out. The
//! [`StyleTransferModel`] trait is the only thing the pipeline knows about,
//! so the heavy backend can be swapped for a stub in tests or replaced
//! entirely by embedders.

use std::path::PathBuf;

use ndarray::{Array4, ArrayView4};
use thiserror::Error;

#[cfg(feature = "onnx")]
pub mod onnx;
#[cfg(feature = "onnx")]
pub use onnx::OnnxStyleModel;

/// A pre-trained arbitrary style transfer network.
///
/// Implementations receive a content tensor and a style tensor, both
/// `[1, H, W, 3]` floats in `[0, 1]`, and return a stylized tensor with the
/// content tensor's shape. The style tensor always arrives at the fixed
/// style edge; the content tensor keeps the caller's dimensions.
pub trait StyleTransferModel: Send + Sync {
    /// Identifier used in logs and status messages.
    fn name(&self) -> &str;

    fn transfer(
        &self,
        content: ArrayView4<'_, f32>,
        style: ArrayView4<'_, f32>,
    ) -> Result<Array4<f32>, ModelError>;
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to load model from {path:?}: {reason}")]
    Load { path: PathBuf, reason: String },
    #[error("model invocation failed: {0}")]
    Inference(String),
    #[error("model returned output of shape {got:?}, expected {expected:?}")]
    OutputShape {
        expected: Vec<usize>,
        got: Vec<usize>,
    },
}
