//! I/O layer for reading PNG images and npy depth maps.
//! Provides the typed `png` codec wrappers, the `npy` depth-map loader,
//! and `writers` for derived artifacts such as the stats sidecar.
pub mod png;
pub use png::{DecodedPng, PixelData, read_png, write_png};

pub mod npy;
pub use npy::load_depth_map;

pub mod writers;
