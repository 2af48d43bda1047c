use std::path::Path;

use ndarray::Array2;

use crate::error::{Error, Result};

/// Load a two-dimensional `f64` depth map (meters) from a `.npy` file.
///
/// Fails immediately on a missing file, wrong dtype, or wrong rank;
/// there is no recovery path for malformed containers.
pub fn load_depth_map(path: &Path) -> Result<Array2<f64>> {
    ndarray_npy::read_npy(path).map_err(|e| Error::Npy {
        path: path.to_path_buf(),
        source: e,
    })
}
