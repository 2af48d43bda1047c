use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use tracing::debug;

use crate::error::Result;
use crate::types::{BitDepth, PixelLayout};

/// Dimensions after dividing both axes by `scale`, rounded, never below 1x1.
pub fn target_dimensions(width: u32, height: u32, scale: u32) -> (u32, u32) {
    let f = 1.0 / scale as f64;
    let w = (width as f64 * f).round().max(1.0) as u32;
    let h = (height as f64 * f).round().max(1.0) as u32;
    (w, h)
}

fn pixel_type_u8(layout: PixelLayout) -> PixelType {
    match layout {
        PixelLayout::Gray => PixelType::U8,
        PixelLayout::GrayAlpha => PixelType::U8x2,
        PixelLayout::Rgb => PixelType::U8x3,
        PixelLayout::Rgba => PixelType::U8x4,
    }
}

fn pixel_type_u16(layout: PixelLayout) -> PixelType {
    match layout {
        PixelLayout::Gray => PixelType::U16,
        PixelLayout::GrayAlpha => PixelType::U16x2,
        PixelLayout::Rgb => PixelType::U16x3,
        PixelLayout::Rgba => PixelType::U16x4,
    }
}

// Box convolution averages the full source window per destination pixel,
// the area-weighted kernel appropriate for downsampling.
fn area_options() -> ResizeOptions {
    ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Box))
}

pub fn resize_u8_image(
    data: &[u8],
    layout: PixelLayout,
    original_cols: usize,
    original_rows: usize,
    target_cols: usize,
    target_rows: usize,
) -> Result<Vec<u8>> {
    let pixel_type = pixel_type_u8(layout);
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        original_cols as u32,
        original_rows as u32,
        data.to_vec(),
        pixel_type,
    )?;
    let mut dst_image = Image::new(target_cols as u32, target_rows as u32, pixel_type);
    resizer.resize(&src_image, &mut dst_image, &area_options())?;

    Ok(dst_image.into_vec())
}

pub fn resize_u16_image(
    data: &[u16],
    layout: PixelLayout,
    original_cols: usize,
    original_rows: usize,
    target_cols: usize,
    target_rows: usize,
) -> Result<Vec<u16>> {
    let pixel_type = pixel_type_u16(layout);
    let mut resizer = Resizer::new();

    // Convert u16 samples into little-endian bytes for fast_image_resize
    let mut src_bytes = Vec::with_capacity(data.len() * 2);
    for &v in data {
        let b = v.to_le_bytes();
        src_bytes.push(b[0]);
        src_bytes.push(b[1]);
    }

    let src_image = Image::from_vec_u8(
        original_cols as u32,
        original_rows as u32,
        src_bytes,
        pixel_type,
    )?;
    let mut dst_image = Image::new(target_cols as u32, target_rows as u32, pixel_type);
    resizer.resize(&src_image, &mut dst_image, &area_options())?;

    let dst_bytes = dst_image.into_vec();
    let mut out = Vec::with_capacity(dst_bytes.len() / 2);
    for chunk in dst_bytes.chunks_exact(2) {
        out.push(u16::from_le_bytes([chunk[0], chunk[1]]));
    }
    Ok(out)
}

/// Downsample interleaved samples at either bit depth.
pub fn resize_samples(
    data: &crate::io::png::PixelData,
    layout: PixelLayout,
    depth: BitDepth,
    original_cols: usize,
    original_rows: usize,
    target_cols: usize,
    target_rows: usize,
) -> Result<crate::io::png::PixelData> {
    use crate::io::png::PixelData;

    debug!(
        "Resizing {}x{} {} {} -> {}x{}",
        original_cols, original_rows, layout, depth, target_cols, target_rows
    );

    match (data, depth) {
        (PixelData::U8(samples), BitDepth::U8) => Ok(PixelData::U8(resize_u8_image(
            samples,
            layout,
            original_cols,
            original_rows,
            target_cols,
            target_rows,
        )?)),
        (PixelData::U16(samples), BitDepth::U16) => Ok(PixelData::U16(resize_u16_image(
            samples,
            layout,
            original_cols,
            original_rows,
            target_cols,
            target_rows,
        )?)),
        _ => Err(crate::error::Error::Processing(
            "sample storage does not match declared bit depth".to_string(),
        )),
    }
}
