//! PNG reading and writing over typed, interleaved sample buffers.
//! Decoding preserves the stored channel layout and bit depth; exotic
//! color types outside the PNG set are normalized to 8-bit RGB.
use std::path::Path;

use image::{DynamicImage, ImageBuffer, Luma, LumaA, Rgb, Rgba};

use crate::error::{Error, Result};
use crate::types::{BitDepth, PixelLayout};

/// Interleaved sample storage at the source bit depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelData {
    U8(Vec<u8>),
    U16(Vec<u16>),
}

/// A decoded PNG: dimensions, channel layout, bit depth, and samples.
#[derive(Debug, Clone)]
pub struct DecodedPng {
    pub width: u32,
    pub height: u32,
    pub layout: PixelLayout,
    pub depth: BitDepth,
    pub data: PixelData,
}

impl DecodedPng {
    pub fn from_dynamic(img: DynamicImage) -> DecodedPng {
        let (width, height) = (img.width(), img.height());
        let (layout, depth, data) = match img {
            DynamicImage::ImageLuma8(buf) => {
                (PixelLayout::Gray, BitDepth::U8, PixelData::U8(buf.into_raw()))
            }
            DynamicImage::ImageLumaA8(buf) => (
                PixelLayout::GrayAlpha,
                BitDepth::U8,
                PixelData::U8(buf.into_raw()),
            ),
            DynamicImage::ImageRgb8(buf) => {
                (PixelLayout::Rgb, BitDepth::U8, PixelData::U8(buf.into_raw()))
            }
            DynamicImage::ImageRgba8(buf) => {
                (PixelLayout::Rgba, BitDepth::U8, PixelData::U8(buf.into_raw()))
            }
            DynamicImage::ImageLuma16(buf) => (
                PixelLayout::Gray,
                BitDepth::U16,
                PixelData::U16(buf.into_raw()),
            ),
            DynamicImage::ImageLumaA16(buf) => (
                PixelLayout::GrayAlpha,
                BitDepth::U16,
                PixelData::U16(buf.into_raw()),
            ),
            DynamicImage::ImageRgb16(buf) => (
                PixelLayout::Rgb,
                BitDepth::U16,
                PixelData::U16(buf.into_raw()),
            ),
            DynamicImage::ImageRgba16(buf) => (
                PixelLayout::Rgba,
                BitDepth::U16,
                PixelData::U16(buf.into_raw()),
            ),
            // Float and future color types are not valid PNG storage; normalize
            other => (
                PixelLayout::Rgb,
                BitDepth::U8,
                PixelData::U8(other.to_rgb8().into_raw()),
            ),
        };
        DecodedPng {
            width,
            height,
            layout,
            depth,
            data,
        }
    }

    /// Discard the alpha channel if present. Alpha is dropped, never blended.
    pub fn drop_alpha(self) -> DecodedPng {
        if !self.layout.has_alpha() {
            return self;
        }
        let channels = self.layout.channels();
        let keep = channels - 1;
        let data = match self.data {
            PixelData::U8(samples) => PixelData::U8(
                samples
                    .chunks_exact(channels)
                    .flat_map(|px| px[..keep].iter().copied())
                    .collect(),
            ),
            PixelData::U16(samples) => PixelData::U16(
                samples
                    .chunks_exact(channels)
                    .flat_map(|px| px[..keep].iter().copied())
                    .collect(),
            ),
        };
        DecodedPng {
            layout: self.layout.without_alpha(),
            data,
            ..self
        }
    }
}

/// Decode a PNG from disk, preserving channel count and bit depth as stored.
pub fn read_png(path: &Path) -> Result<DecodedPng> {
    let img = image::open(path).map_err(|e| Error::Decode {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(DecodedPng::from_dynamic(img))
}

fn buffer_error(path: &Path) -> Error {
    Error::Processing(format!(
        "sample buffer does not match dimensions for {:?}",
        path
    ))
}

/// Encode a decoded image back to PNG, overwriting `path` if present.
pub fn write_png(path: &Path, img: &DecodedPng) -> Result<()> {
    let (w, h) = (img.width, img.height);
    let dynamic = match (&img.data, img.layout) {
        (PixelData::U8(s), PixelLayout::Gray) => {
            ImageBuffer::<Luma<u8>, _>::from_raw(w, h, s.clone())
                .map(DynamicImage::ImageLuma8)
        }
        (PixelData::U8(s), PixelLayout::GrayAlpha) => {
            ImageBuffer::<LumaA<u8>, _>::from_raw(w, h, s.clone())
                .map(DynamicImage::ImageLumaA8)
        }
        (PixelData::U8(s), PixelLayout::Rgb) => {
            ImageBuffer::<Rgb<u8>, _>::from_raw(w, h, s.clone()).map(DynamicImage::ImageRgb8)
        }
        (PixelData::U8(s), PixelLayout::Rgba) => {
            ImageBuffer::<Rgba<u8>, _>::from_raw(w, h, s.clone())
                .map(DynamicImage::ImageRgba8)
        }
        (PixelData::U16(s), PixelLayout::Gray) => {
            ImageBuffer::<Luma<u16>, _>::from_raw(w, h, s.clone())
                .map(DynamicImage::ImageLuma16)
        }
        (PixelData::U16(s), PixelLayout::GrayAlpha) => {
            ImageBuffer::<LumaA<u16>, _>::from_raw(w, h, s.clone())
                .map(DynamicImage::ImageLumaA16)
        }
        (PixelData::U16(s), PixelLayout::Rgb) => {
            ImageBuffer::<Rgb<u16>, _>::from_raw(w, h, s.clone())
                .map(DynamicImage::ImageRgb16)
        }
        (PixelData::U16(s), PixelLayout::Rgba) => {
            ImageBuffer::<Rgba<u16>, _>::from_raw(w, h, s.clone())
                .map(DynamicImage::ImageRgba16)
        }
    }
    .ok_or_else(|| buffer_error(path))?;

    dynamic.save(path).map_err(|e| Error::Encode {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_round_trip_preserves_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("px.png");
        let img = DecodedPng {
            width: 2,
            height: 1,
            layout: PixelLayout::Rgba,
            depth: BitDepth::U8,
            data: PixelData::U8(vec![10, 20, 30, 255, 40, 50, 60, 128]),
        };
        write_png(&path, &img).unwrap();

        let back = read_png(&path).unwrap();
        assert_eq!(back.layout, PixelLayout::Rgba);
        assert_eq!(back.depth, BitDepth::U8);
        assert_eq!(back.data, img.data);
    }

    #[test]
    fn drop_alpha_keeps_color_samples() {
        let img = DecodedPng {
            width: 2,
            height: 1,
            layout: PixelLayout::Rgba,
            depth: BitDepth::U8,
            data: PixelData::U8(vec![1, 2, 3, 9, 4, 5, 6, 9]),
        };
        let opaque = img.drop_alpha();
        assert_eq!(opaque.layout, PixelLayout::Rgb);
        assert_eq!(opaque.data, PixelData::U8(vec![1, 2, 3, 4, 5, 6]));
    }

    #[test]
    fn drop_alpha_on_gray_alpha_u16() {
        let img = DecodedPng {
            width: 1,
            height: 2,
            layout: PixelLayout::GrayAlpha,
            depth: BitDepth::U16,
            data: PixelData::U16(vec![700, 65535, 800, 0]),
        };
        let opaque = img.drop_alpha();
        assert_eq!(opaque.layout, PixelLayout::Gray);
        assert_eq!(opaque.data, PixelData::U16(vec![700, 800]));
    }

    #[test]
    fn decode_failure_carries_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not a png").unwrap();
        match read_png(&path) {
            Err(Error::Decode { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected decode error, got {:?}", other),
        }
    }
}
