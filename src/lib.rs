#![doc = r#"
DEPTHKIT — offline image-pipeline utilities.

This crate provides two independent tools used around a depth-estimation
pipeline, each available as a binary and as a typed library API:

- **Batch resizer** (`resize-pngs`): downsample every PNG under a source
  root by an integer factor with an area-weighted filter, mirroring the
  directory structure under a destination root, sequentially or across a
  fixed worker pool.
- **Depth visualizer** (`visdepth`): load a 2-D `f64` depth map from a
  `.npy` file, report statistics over the valid (positive) pixels, and
  render a clipped histogram and a masked viridis heatmap.

Quick start: batch resize a directory
-------------------------------------
```rust,no_run
use depthkit::{ResizeParams, api::resize_directory};

fn main() -> depthkit::Result<()> {
    let params = ResizeParams {
        src: "/data/full_res_pngs".into(),
        dst: "/data/downsampled_pngs".into(),
        scale: 4,
        workers: 8,
        recursive: true,
    };

    let report = resize_directory(&params)?;
    println!("processed={} failed={}", report.processed, report.failed);
    Ok(())
}
```

Quick start: visualize a depth map
----------------------------------
```rust,no_run
use std::path::Path;
use depthkit::api::visualize_depth_map;

fn main() -> depthkit::Result<()> {
    let report = visualize_depth_map(Path::new("/data/depth_meter.npy"), None)?;
    println!("median depth: {:.2} m", report.stats.median_m);
    Ok(())
}
```

Error handling
--------------
All public functions return `depthkit::Result<T>`; match on
`depthkit::Error` to handle specific cases, e.g. a decode failure on one
PNG or a depth map with no valid pixels.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`core`] — discovery, run parameters, and the per-file resize pipeline.
- [`depth`] — depth-map statistics and chart rendering.
- [`io`] — PNG and npy readers/writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod depth;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::ResizeParams;
pub use crate::error::{Error, Result};
pub use crate::types::{BatchReport, BitDepth, PixelLayout};

// Discovery and depth analysis
pub use crate::core::discover::{ResizeJob, discover_pngs};
pub use crate::depth::render::{DepthHistogram, render_heatmap, render_histogram, viridis};
pub use crate::depth::stats::{DepthStats, valid_depths};

// Readers
pub use crate::io::npy::load_depth_map;
pub use crate::io::png::{DecodedPng, PixelData, read_png, write_png};

// High-level API re-exports
pub use crate::api::{DepthReport, resize_directory, resize_file, visualize_depth_map};
