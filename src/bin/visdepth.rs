//! Depth-map visualization entrypoint.
//!
//! Loads a 2-D `f64` depth map from a `.npy` file, prints summary
//! statistics over the valid (positive) pixels, and renders a clipped
//! histogram and a masked heatmap next to the input.

use clap::Parser;
use std::path::PathBuf;

use depthkit::api::visualize_depth_map;

#[derive(Parser)]
#[command(
    name = "visdepth",
    version,
    about = "Visualize a depth map from a .npy file"
)]
struct VisArgs {
    /// Path to the depth map file (2-D f64 array, meters)
    input: PathBuf,

    /// Output directory for rendered charts (default: the input's directory)
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    log: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = VisArgs::parse();

    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let report = visualize_depth_map(&args.input, args.out_dir.as_deref())?;
    let stats = &report.stats;

    println!("Number of valid pixels: {}", stats.valid_count);
    println!("Minimum valid depth: {:.2} m", stats.min_m);
    println!("Maximum valid depth: {:.2} m", stats.max_m);
    println!("Median depth: {:.2} m", stats.median_m);
    println!("99th percentile depth: {:.2} m", stats.p99_m);

    println!(
        "\nDepth histogram (clipped to 99th percentile): {:?}",
        report.histogram_path
    );
    println!(
        "Depth map, color bar 0.00 m to {:.2} m, Depth (meters): {:?}",
        stats.clip_bound(),
        report.heatmap_path
    );
    println!("Stats sidecar: {:?}", report.stats_path);

    Ok(())
}
