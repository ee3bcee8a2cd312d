//! I/O layer: decoding user-supplied images, the bundled sample galleries,
//! and the JPEG/PNG writers.
pub mod decode;
pub mod samples;
pub mod writers;

pub use decode::{decode_image, open_image};
pub use samples::SampleGallery;
