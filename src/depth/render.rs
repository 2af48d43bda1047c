//! Raster rendering of the depth charts: a clipped histogram bar chart
//! and a masked/clipped heatmap with a vertical color bar. Charts are
//! written as PNGs; numeric labels accompany them on stdout and in the
//! stats sidecar.
use std::path::Path;

use ndarray::Array2;

use crate::error::Result;
use crate::io::png::{DecodedPng, PixelData, write_png};
use crate::types::{BitDepth, PixelLayout};

/// Sentinel color for invalid (non-positive) pixels.
pub const SENTINEL: [u8; 3] = [0, 0, 0];

/// Bar fill for the histogram (steelblue).
const BAR_COLOR: [u8; 3] = [70, 130, 180];
const BORDER_COLOR: [u8; 3] = [120, 120, 120];
const GRID_COLOR: [u8; 3] = [220, 220, 220];

// Viridis sampled at eighths; intermediate values are linearly
// interpolated between the anchors.
const VIRIDIS_ANCHORS: [[u8; 3]; 9] = [
    [68, 1, 84],
    [70, 50, 126],
    [59, 82, 139],
    [44, 114, 142],
    [33, 145, 140],
    [40, 174, 128],
    [94, 201, 98],
    [173, 220, 48],
    [253, 231, 37],
];

/// Map `t` in `[0, 1]` through the viridis perceptually-uniform ramp.
pub fn viridis(t: f64) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    let pos = t * (VIRIDIS_ANCHORS.len() - 1) as f64;
    let idx = (pos.floor() as usize).min(VIRIDIS_ANCHORS.len() - 2);
    let frac = pos - idx as f64;
    let a = VIRIDIS_ANCHORS[idx];
    let b = VIRIDIS_ANCHORS[idx + 1];
    let lerp = |x: u8, y: u8| (x as f64 + frac * (y as f64 - x as f64)).round() as u8;
    [
        lerp(a[0], b[0]),
        lerp(a[1], b[1]),
        lerp(a[2], b[2]),
    ]
}

/// Binned counts of valid depths strictly below the clipping bound.
#[derive(Debug, Clone)]
pub struct DepthHistogram {
    pub counts: Vec<u32>,
    /// Lower edge of the first bin (minimum of the clipped subset).
    pub lo: f64,
    pub bin_width: f64,
}

impl DepthHistogram {
    pub const DEFAULT_BINS: usize = 100;

    /// Equal-width bins over `[lo, bound)` where `lo` is the minimum of
    /// the entries below `bound`. Entries at or above `bound` are not
    /// counted; every bin's upper edge stays at or below `bound`.
    pub fn compute(values: &[f64], bound: f64, bins: usize) -> DepthHistogram {
        let lo = values
            .iter()
            .copied()
            .filter(|&v| v < bound)
            .fold(f64::INFINITY, f64::min);
        let lo = if lo.is_finite() { lo } else { 0.0 };
        let bin_width = (bound - lo) / bins as f64;

        let mut counts = vec![0u32; bins];
        if bin_width > 0.0 {
            for &v in values.iter().filter(|&&v| v < bound) {
                let idx = (((v - lo) / bin_width) as usize).min(bins - 1);
                counts[idx] += 1;
            }
        }
        DepthHistogram {
            counts,
            lo,
            bin_width,
        }
    }

    /// Upper edge of the last bin.
    pub fn hi(&self) -> f64 {
        self.lo + self.bin_width * self.counts.len() as f64
    }
}

struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Canvas {
    fn filled(width: usize, height: usize, color: [u8; 3]) -> Canvas {
        let mut pixels = Vec::with_capacity(width * height * 3);
        for _ in 0..(width * height) {
            pixels.extend_from_slice(&color);
        }
        Canvas {
            width,
            height,
            pixels,
        }
    }

    fn set(&mut self, x: usize, y: usize, color: [u8; 3]) {
        if x < self.width && y < self.height {
            let off = (y * self.width + x) * 3;
            self.pixels[off..off + 3].copy_from_slice(&color);
        }
    }

    fn fill_rect(&mut self, x0: usize, y0: usize, x1: usize, y1: usize, color: [u8; 3]) {
        for y in y0..y1.min(self.height) {
            for x in x0..x1.min(self.width) {
                self.set(x, y, color);
            }
        }
    }

    fn write(self, path: &Path) -> Result<()> {
        write_png(
            path,
            &DecodedPng {
                width: self.width as u32,
                height: self.height as u32,
                layout: PixelLayout::Rgb,
                depth: BitDepth::U8,
                data: PixelData::U8(self.pixels),
            },
        )
    }
}

const CHART_WIDTH: usize = 600;
const CHART_HEIGHT: usize = 400;
const CHART_MARGIN: usize = 12;

/// Render the histogram as a bar chart PNG: linear counts normalized to
/// the tallest bin, bars drawn bottom-up.
pub fn render_histogram(hist: &DepthHistogram, path: &Path) -> Result<()> {
    let mut canvas = Canvas::filled(CHART_WIDTH, CHART_HEIGHT, [255, 255, 255]);

    let left = CHART_MARGIN;
    let top = CHART_MARGIN;
    let right = CHART_WIDTH - CHART_MARGIN;
    let bottom = CHART_HEIGHT - CHART_MARGIN;
    let plot_w = right - left;
    let plot_h = bottom - top;

    // Horizontal gridlines at quarter heights
    for q in 1..4 {
        let y = top + plot_h * q / 4;
        for x in left..right {
            canvas.set(x, y, GRID_COLOR);
        }
    }

    let max_count = hist.counts.iter().copied().max().unwrap_or(0);
    if max_count > 0 {
        let bins = hist.counts.len();
        for (i, &count) in hist.counts.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let x0 = left + i * plot_w / bins;
            let x1 = (left + (i + 1) * plot_w / bins).max(x0 + 1);
            let bar_h =
                ((count as f64 / max_count as f64) * plot_h as f64).round() as usize;
            canvas.fill_rect(x0, bottom - bar_h.min(plot_h), x1, bottom, BAR_COLOR);
        }
    }

    // Plot border
    for x in left..right {
        canvas.set(x, top, BORDER_COLOR);
        canvas.set(x, bottom - 1, BORDER_COLOR);
    }
    for y in top..bottom {
        canvas.set(left, y, BORDER_COLOR);
        canvas.set(right - 1, y, BORDER_COLOR);
    }

    canvas.write(path)
}

const COLORBAR_GUTTER: usize = 10;
const COLORBAR_WIDTH: usize = 24;

/// Render the full depth grid as a heatmap PNG: invalid pixels in the
/// sentinel color, valid pixels clipped to `[0, clip_bound]` and mapped
/// through viridis, with a vertical color bar (bound at the top, zero at
/// the bottom) along the right edge.
pub fn render_heatmap(depth: &Array2<f64>, clip_bound: f64, path: &Path) -> Result<()> {
    let (rows, cols) = depth.dim();
    let width = cols + COLORBAR_GUTTER + COLORBAR_WIDTH;
    let mut canvas = Canvas::filled(width, rows, [255, 255, 255]);

    for ((r, c), &v) in depth.indexed_iter() {
        let color = if v > 0.0 {
            viridis(v.clamp(0.0, clip_bound) / clip_bound)
        } else {
            SENTINEL
        };
        canvas.set(c, r, color);
    }

    let denom = (rows.saturating_sub(1)).max(1) as f64;
    for y in 0..rows {
        let t = 1.0 - y as f64 / denom;
        let color = viridis(t);
        for x in 0..COLORBAR_WIDTH {
            canvas.set(cols + COLORBAR_GUTTER + x, y, color);
        }
    }

    canvas.write(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::png::read_png;

    #[test]
    fn viridis_endpoints_and_midpoint() {
        assert_eq!(viridis(0.0), [68, 1, 84]);
        assert_eq!(viridis(1.0), [253, 231, 37]);
        assert_eq!(viridis(0.5), [33, 145, 140]);
        // Out-of-range inputs clamp
        assert_eq!(viridis(-1.0), viridis(0.0));
        assert_eq!(viridis(2.0), viridis(1.0));
    }

    #[test]
    fn histogram_counts_only_below_bound() {
        let values = vec![1.0, 2.0, 3.0, 9.0, 10.0, 11.0];
        let hist = DepthHistogram::compute(&values, 10.0, 10);
        let total: u32 = hist.counts.iter().sum();
        assert_eq!(total, 4); // 10.0 and 11.0 excluded
        assert!(hist.hi() <= 10.0 + 1e-12);
    }

    #[test]
    fn histogram_bin_edges_stay_under_bound() {
        let values: Vec<f64> = (1..500).map(|i| i as f64 / 10.0).collect();
        let bound = 42.0;
        let hist = DepthHistogram::compute(&values, bound, DepthHistogram::DEFAULT_BINS);
        for i in 0..hist.counts.len() {
            let upper = hist.lo + hist.bin_width * (i + 1) as f64;
            assert!(upper <= bound + 1e-9);
        }
    }

    #[test]
    fn histogram_of_constant_values_is_empty() {
        // Every value sits at the bound, so the strict filter drops all
        let hist = DepthHistogram::compute(&[5.0, 5.0, 5.0], 5.0, 10);
        assert!(hist.counts.iter().all(|&c| c == 0));
    }

    #[test]
    fn histogram_png_has_chart_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hist.png");
        let hist = DepthHistogram::compute(&[1.0, 2.0, 2.5], 3.0, 10);
        render_histogram(&hist, &path).unwrap();

        let img = read_png(&path).unwrap();
        assert_eq!(
            (img.width as usize, img.height as usize),
            (CHART_WIDTH, CHART_HEIGHT)
        );
    }

    #[test]
    fn heatmap_masks_invalid_and_clips_valid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.png");
        let depth =
            Array2::from_shape_vec((2, 2), vec![0.0, 4.0, 2.0, 8.0]).unwrap();
        render_heatmap(&depth, 4.0, &path).unwrap();

        let img = read_png(&path).unwrap();
        let px = |x: usize, y: usize| {
            let samples = match &img.data {
                PixelData::U8(s) => s,
                _ => panic!("expected u8 heatmap"),
            };
            let off = (y * img.width as usize + x) * 3;
            [samples[off], samples[off + 1], samples[off + 2]]
        };

        assert_eq!(px(0, 0), SENTINEL); // invalid pixel
        assert_eq!(px(1, 0), viridis(1.0)); // at the bound
        assert_eq!(px(0, 1), viridis(0.5)); // mid-range
        assert_eq!(px(1, 1), viridis(1.0)); // above the bound clips
    }
}
