use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Resize run parameters suitable for config files and presets.
///
/// Passed by reference into every job so workers never consult
/// process-wide state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResizeParams {
    /// Source directory root containing PNG files
    pub src: PathBuf,
    /// Destination directory root for resized PNGs
    pub dst: PathBuf,
    /// Downsample divisor applied to both axes; 1 is an identity-resize copy
    pub scale: u32,
    /// Parallel worker count; <=1 runs sequentially
    pub workers: usize,
    /// If true, search subdirectories and mirror their structure under `dst`
    pub recursive: bool,
}

impl Default for ResizeParams {
    fn default() -> Self {
        Self {
            src: PathBuf::new(),
            dst: PathBuf::new(),
            scale: 4,
            workers: 0,
            recursive: false,
        }
    }
}
