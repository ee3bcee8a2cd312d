#![doc = r#"
STYLIZE — an arbitrary neural style transfer toolkit.

This crate takes a *content* image and a *style* image, normalizes both into
float tensors, and runs them through an external pre-trained style transfer
network to produce a stylized composite that keeps the content image's
structure and dimensions while adopting the style image's texture and
palette. It powers both the STYLIZE CLI and GUI, and can be embedded in your
own Rust applications.

The network itself is not part of this crate. It is an injected capability
behind the [`StyleTransferModel`] trait; the default backend (feature
`onnx`, enabled by default) loads an exported arbitrary-image-stylization
artifact with ONNX Runtime, once per process, and reuses the session for
every invocation.

Quick start: stylize two files
------------------------------
```rust,no_run
use std::path::Path;
use stylize::{OnnxStyleModel, OutputFormat, StylizeParams, stylize_files_to_path};

fn main() -> stylize::Result<()> {
    let model = OnnxStyleModel::global(Path::new("models/arbitrary_style_transfer.onnx"))?;

    let params = StylizeParams {
        format: OutputFormat::JPEG,
        size: Some(1024), // pre-resize the content image's long side
        quality: 90,
    };

    stylize_files_to_path(
        Path::new("contents/content_1.jpg"),
        Path::new("styles/style_1.jpg"),
        Path::new("stylized_image.jpeg"),
        model,
        &params,
    )
}
```

In-memory results
-----------------
```rust,no_run
use std::path::Path;
use stylize::{OnnxStyleModel, StylizeParams, stylize_to_buffer};

fn main() -> stylize::Result<()> {
    let model = OnnxStyleModel::global(Path::new("models/arbitrary_style_transfer.onnx"))?;
    let img = stylize_to_buffer(
        Path::new("contents/content_1.jpg"),
        Path::new("styles/style_1.jpg"),
        model,
        &StylizeParams::default(),
    )?;

    // `img.data` holds the encoded bytes, ready to serve or save.
    println!("{}x{} {}", img.width, img.height, img.format);
    Ok(())
}
```

Substituting the model
----------------------
Any `StyleTransferModel` implementation can drive the pipeline, which keeps
the heavy network out of tests:

```rust
use ndarray::{Array4, ArrayView4};
use stylize::{ModelError, StyleTransferModel, StylizationPipeline};

struct Passthrough;

impl StyleTransferModel for Passthrough {
    fn name(&self) -> &str {
        "passthrough"
    }

    fn transfer(
        &self,
        content: ArrayView4<'_, f32>,
        _style: ArrayView4<'_, f32>,
    ) -> Result<Array4<f32>, ModelError> {
        Ok(content.to_owned())
    }
}

let pipeline = StylizationPipeline::new(std::sync::Arc::new(Passthrough));
```

Error handling
--------------
All public functions return `stylize::Result<T>`; match on `stylize::Error`
to tell decode failures apart from resize or model failures:

```rust,no_run
use std::path::Path;
use stylize::{Error, OnnxStyleModel, StylizeParams, stylize_to_buffer};

fn main() {
    let model = OnnxStyleModel::global(Path::new("model.onnx")).unwrap();
    match stylize_to_buffer(
        Path::new("bad.jpg"),
        Path::new("style.jpg"),
        model,
        &StylizeParams::default(),
    ) {
        Ok(_) => {}
        Err(Error::Decode(e)) => eprintln!("Bad input image: {e}"),
        Err(Error::Model(e)) => eprintln!("Model error: {e}"),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Feature flags
-------------
- `onnx`: the ONNX Runtime model backend (default).
- `gui`: builds the GUI crate module (default).
- `full`: everything above.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`model`] — the model seam and the ONNX backend.
- [`io`] — decoding, sample galleries, JPEG/PNG writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod model;
pub mod types;

// GUI module (only available with gui feature)
#[cfg(feature = "gui")]
pub mod gui;

// Curated public API surface
// Types
pub use crate::core::params::StylizeParams;
pub use crate::error::{Error, Result};
pub use crate::types::{ImageRole, OutputFormat};

// Pipeline
pub use crate::core::processing::pipeline::StylizationPipeline;
pub use crate::core::processing::resize::STYLE_EDGE;

// Model seam
pub use crate::model::{ModelError, StyleTransferModel};
#[cfg(feature = "onnx")]
pub use crate::model::OnnxStyleModel;

// I/O helpers
pub use crate::io::decode::{decode_image, open_image};
pub use crate::io::samples::SampleGallery;

// High-level API re-exports
pub use crate::api::{
    DEFAULT_OUTPUT_NAME, StylizedImage, stylize_files_to_path, stylize_images, stylize_to_buffer,
};
