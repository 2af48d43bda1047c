//! High-level, ergonomic library API: batch-resize a directory of PNGs,
//! resize a single file, and produce the depth-map visualization bundle.
//! Prefer these entrypoints over low-level processing modules when
//! embedding DEPTHKIT.
use std::fs;
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::{info, warn};

use crate::core::discover::{ResizeJob, discover_pngs};
use crate::core::params::ResizeParams;
use crate::core::processing::pipeline::resize_png_file;
use crate::depth::render::{DepthHistogram, render_heatmap, render_histogram};
use crate::depth::stats::{DepthStats, valid_depths};
use crate::error::{Error, Result};
use crate::io::npy::load_depth_map;
use crate::io::writers::stats::write_stats_sidecar;
use crate::types::BatchReport;

fn progress_bar(len: usize) -> ProgressBar {
    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
        .unwrap()
        .progress_chars("#>-");
    let pb = ProgressBar::new(len as u64);
    pb.set_style(style);
    pb.set_message("Resizing");
    pb
}

/// Resize every PNG under `params.src` into `params.dst`.
///
/// Jobs run sequentially when `params.workers <= 1`, otherwise on a
/// fixed pool of exactly `params.workers` threads with unordered
/// completion. Failures are isolated per file and tallied in the
/// report; the run always continues.
pub fn resize_directory(params: &ResizeParams) -> Result<BatchReport> {
    fs::create_dir_all(&params.dst)?;

    let jobs = discover_pngs(&params.src, params.recursive)?;
    if jobs.is_empty() {
        return Ok(BatchReport::default());
    }

    info!(
        "Resizing {} PNG files: {:?} -> {:?} (scale {}, workers {})",
        jobs.len(),
        params.src,
        params.dst,
        params.scale,
        params.workers
    );

    let pb = progress_bar(jobs.len());

    let results: Vec<Result<PathBuf>> = if params.workers > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(params.workers)
            .build()
            .map_err(|e| Error::Processing(e.to_string()))?;
        pool.install(|| {
            jobs.par_iter()
                .map(|job| {
                    let result = resize_png_file(job, params);
                    pb.inc(1);
                    result
                })
                .collect()
        })
    } else {
        jobs.iter()
            .map(|job| {
                let result = resize_png_file(job, params);
                pb.inc(1);
                result
            })
            .collect()
    };
    pb.finish_and_clear();

    let mut report = BatchReport::default();
    for (job, result) in jobs.iter().zip(&results) {
        match result {
            Ok(_) => report.processed += 1,
            Err(e) => {
                warn!("Error processing {:?}: {}", job.source, e);
                report.failed += 1;
            }
        }
    }
    Ok(report)
}

/// Resize one PNG using the run parameters' relative-path semantics:
/// recursive runs mirror the path below `params.src`, flat runs keep
/// only the file name.
pub fn resize_file(source: &Path, params: &ResizeParams) -> Result<PathBuf> {
    let relative = if params.recursive {
        source
            .strip_prefix(&params.src)
            .map_err(|e| Error::StripPrefix {
                path: source.to_path_buf(),
                source: e,
            })?
            .to_path_buf()
    } else {
        PathBuf::from(source.file_name().ok_or_else(|| Error::InvalidArgument {
            arg: "source",
            value: format!("{:?}", source),
        })?)
    };

    let job = ResizeJob {
        source: source.to_path_buf(),
        relative,
    };
    resize_png_file(&job, params)
}

/// Artifacts produced by a depth-map visualization run.
#[derive(Debug, Clone)]
pub struct DepthReport {
    pub stats: DepthStats,
    pub histogram_path: PathBuf,
    pub heatmap_path: PathBuf,
    pub stats_path: PathBuf,
}

/// Load a depth map, compute valid-subset statistics, and render the
/// clipped histogram, the masked heatmap, and the stats sidecar into
/// `out_dir` (default: the input's directory).
///
/// A depth map with zero valid (positive) pixels fails with
/// [`Error::EmptyDepthMap`] before any artifact is written.
pub fn visualize_depth_map(input: &Path, out_dir: Option<&Path>) -> Result<DepthReport> {
    let depth = load_depth_map(input)?;
    info!("Loaded depth map {:?}: {:?}", input, depth.dim());

    let valid = valid_depths(&depth);
    let stats = DepthStats::from_valid(&valid).ok_or_else(|| Error::EmptyDepthMap {
        path: input.to_path_buf(),
    })?;

    let out_dir = match out_dir {
        Some(dir) => dir.to_path_buf(),
        None => input.parent().unwrap_or(Path::new(".")).to_path_buf(),
    };
    fs::create_dir_all(&out_dir)?;

    let clip = stats.clip_bound();

    let histogram_path = out_dir.join("depth_histogram.png");
    let hist = DepthHistogram::compute(&valid, clip, DepthHistogram::DEFAULT_BINS);
    render_histogram(&hist, &histogram_path)?;

    let heatmap_path = out_dir.join("depth_map.png");
    render_heatmap(&depth, clip, &heatmap_path)?;

    let stats_path = out_dir.join("depth_stats.json");
    write_stats_sidecar(&stats_path, &stats)?;

    Ok(DepthReport {
        stats,
        histogram_path,
        heatmap_path,
        stats_path,
    })
}
