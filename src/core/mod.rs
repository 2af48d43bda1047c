//! Core building blocks: run parameters, PNG discovery, and the per-file
//! resize pipeline. These are internal primitives consumed by the
//! high-level `api` module.
pub mod discover;
pub mod params;
pub mod processing;
