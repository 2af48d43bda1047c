use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::core::discover::ResizeJob;
use crate::core::params::ResizeParams;
use crate::core::processing::resize::{resize_samples, target_dimensions};
use crate::error::Result;
use crate::io::png::{DecodedPng, read_png, write_png};

/// Decode -> drop alpha -> area downsample -> mirror relative path -> encode.
///
/// Pure function of the job and parameters; safe to call from any worker.
/// Returns the destination path written.
pub fn resize_png_file(job: &ResizeJob, params: &ResizeParams) -> Result<PathBuf> {
    let decoded = read_png(&job.source)?;
    let opaque = decoded.drop_alpha();

    let (target_cols, target_rows) = target_dimensions(opaque.width, opaque.height, params.scale);
    let resized = resize_samples(
        &opaque.data,
        opaque.layout,
        opaque.depth,
        opaque.width as usize,
        opaque.height as usize,
        target_cols as usize,
        target_rows as usize,
    )?;

    let out_path = params.dst.join(&job.relative);
    if let Some(parent) = out_path.parent() {
        // Idempotent; safe under concurrent workers
        fs::create_dir_all(parent)?;
    }

    write_png(
        &out_path,
        &DecodedPng {
            width: target_cols,
            height: target_rows,
            layout: opaque.layout,
            depth: opaque.depth,
            data: resized,
        },
    )?;

    debug!("Resized {:?} -> {:?}", job.source, out_path);
    Ok(out_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::png::PixelData;
    use crate::types::{BitDepth, PixelLayout};
    use std::path::Path;

    fn write_rgba_fixture(path: &Path, width: u32, height: u32) {
        let mut samples = Vec::with_capacity((width * height * 4) as usize);
        for i in 0..(width * height) {
            samples.extend_from_slice(&[(i % 256) as u8, 50, 200, 255]);
        }
        write_png(
            path,
            &DecodedPng {
                width,
                height,
                layout: PixelLayout::Rgba,
                depth: BitDepth::U8,
                data: PixelData::U8(samples),
            },
        )
        .unwrap();
    }

    #[test]
    fn rgba_input_becomes_rgb_at_scaled_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        let dst = dir.path().join("dst");
        fs::create_dir_all(&src).unwrap();
        write_rgba_fixture(&src.join("img.png"), 8, 6);

        let params = ResizeParams {
            src: src.clone(),
            dst: dst.clone(),
            scale: 2,
            workers: 0,
            recursive: false,
        };
        let job = ResizeJob {
            source: src.join("img.png"),
            relative: PathBuf::from("img.png"),
        };

        let out = resize_png_file(&job, &params).unwrap();
        assert_eq!(out, dst.join("img.png"));

        let back = read_png(&out).unwrap();
        assert_eq!(back.layout, PixelLayout::Rgb);
        assert_eq!((back.width, back.height), (4, 3));
    }

    #[test]
    fn scale_one_is_an_identity_copy() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        let dst = dir.path().join("dst");
        fs::create_dir_all(&src).unwrap();

        let data = PixelData::U8(vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120]);
        write_png(
            &src.join("flat.png"),
            &DecodedPng {
                width: 2,
                height: 2,
                layout: PixelLayout::Rgb,
                depth: BitDepth::U8,
                data: data.clone(),
            },
        )
        .unwrap();

        let params = ResizeParams {
            src: src.clone(),
            dst: dst.clone(),
            scale: 1,
            workers: 0,
            recursive: false,
        };
        let job = ResizeJob {
            source: src.join("flat.png"),
            relative: PathBuf::from("flat.png"),
        };
        let out = resize_png_file(&job, &params).unwrap();

        let back = read_png(&out).unwrap();
        assert_eq!((back.width, back.height), (2, 2));
        assert_eq!(back.data, data);
    }

    #[test]
    fn nested_relative_path_is_recreated_under_dst() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        let dst = dir.path().join("dst");
        fs::create_dir_all(src.join("a/b")).unwrap();
        write_rgba_fixture(&src.join("a/b/c.png"), 4, 4);

        let params = ResizeParams {
            src: src.clone(),
            dst: dst.clone(),
            scale: 4,
            workers: 0,
            recursive: true,
        };
        let job = ResizeJob {
            source: src.join("a/b/c.png"),
            relative: PathBuf::from("a/b/c.png"),
        };
        let out = resize_png_file(&job, &params).unwrap();
        assert_eq!(out, dst.join("a/b/c.png"));
        assert!(out.is_file());
    }

    #[test]
    fn unreadable_file_aborts_that_job() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("bad.png"), b"garbage").unwrap();

        let params = ResizeParams {
            src: src.clone(),
            dst: dir.path().join("dst"),
            scale: 2,
            workers: 0,
            recursive: false,
        };
        let job = ResizeJob {
            source: src.join("bad.png"),
            relative: PathBuf::from("bad.png"),
        };
        assert!(resize_png_file(&job, &params).is_err());
    }
}
