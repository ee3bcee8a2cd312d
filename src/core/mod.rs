//! Core building blocks: stylization parameters, tensor conversion,
//! resizing, the stylization pipeline, and save helpers. These are internal
//! primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
