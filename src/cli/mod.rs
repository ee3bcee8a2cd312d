//! Command Line Interface (CLI) layer for STYLIZE.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for stylization runs. It wires
//! user-provided options to the underlying library functionality exposed
//! via `stylize::api`.
//!
//! If you are embedding STYLIZE into another application, prefer using
//! the high-level `stylize::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
