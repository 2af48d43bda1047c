//! Depth-map analysis and visualization: validity filtering, summary
//! statistics, and rendering of the clipped histogram and masked heatmap.
pub mod render;
pub mod stats;

pub use render::{DepthHistogram, render_heatmap, render_histogram, viridis};
pub use stats::{DepthStats, valid_depths};
