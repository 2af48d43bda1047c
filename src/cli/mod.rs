//! Command Line Interface (CLI) layer for the batch resizer.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the batch resize flow. It
//! wires user-provided options to the underlying library functionality
//! exposed via `depthkit::api`.
//!
//! If you are embedding the resizer into another application, prefer
//! using the high-level `depthkit::api` module instead of the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
