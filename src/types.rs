//! Shared types and enums used across DEPTHKIT.
//! Includes the decoded pixel layout (`PixelLayout`), sample bit depth
//! (`BitDepth`), and the batch `BatchReport` summary.
use serde::{Deserialize, Serialize};

/// Channel layout of a decoded PNG, as stored in the file.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum PixelLayout {
    Gray,
    GrayAlpha,
    Rgb,
    Rgba,
}

impl PixelLayout {
    /// Interleaved channel count for this layout.
    pub fn channels(self) -> usize {
        match self {
            PixelLayout::Gray => 1,
            PixelLayout::GrayAlpha => 2,
            PixelLayout::Rgb => 3,
            PixelLayout::Rgba => 4,
        }
    }

    pub fn has_alpha(self) -> bool {
        matches!(self, PixelLayout::GrayAlpha | PixelLayout::Rgba)
    }

    /// The opaque counterpart of this layout (alpha channel discarded, never blended).
    pub fn without_alpha(self) -> PixelLayout {
        match self {
            PixelLayout::GrayAlpha => PixelLayout::Gray,
            PixelLayout::Rgba => PixelLayout::Rgb,
            other => other,
        }
    }
}

impl std::fmt::Display for PixelLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PixelLayout::Gray => "Gray",
            PixelLayout::GrayAlpha => "GrayAlpha",
            PixelLayout::Rgb => "Rgb",
            PixelLayout::Rgba => "Rgba",
        };
        write!(f, "{}", s)
    }
}

/// Per-sample bit depth, preserved from the source file through resizing.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum BitDepth {
    U8,
    U16,
}

impl std::fmt::Display for BitDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BitDepth::U8 => write!(f, "U8"),
            BitDepth::U16 => write!(f, "U16"),
        }
    }
}

/// Batch processing report
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchReport {
    pub processed: usize,
    pub failed: usize,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.processed + self.failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_layouts_drop_to_opaque_counterpart() {
        assert_eq!(PixelLayout::Rgba.without_alpha(), PixelLayout::Rgb);
        assert_eq!(PixelLayout::GrayAlpha.without_alpha(), PixelLayout::Gray);
        assert_eq!(PixelLayout::Rgb.without_alpha(), PixelLayout::Rgb);
        assert_eq!(PixelLayout::Gray.without_alpha(), PixelLayout::Gray);
    }

    #[test]
    fn channel_counts() {
        assert_eq!(PixelLayout::Gray.channels(), 1);
        assert_eq!(PixelLayout::GrayAlpha.channels(), 2);
        assert_eq!(PixelLayout::Rgb.channels(), 3);
        assert_eq!(PixelLayout::Rgba.channels(), 4);
        assert!(PixelLayout::Rgba.has_alpha());
        assert!(!PixelLayout::Rgb.has_alpha());
    }
}
