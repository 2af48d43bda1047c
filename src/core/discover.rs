//! PNG enumeration under a source root, flat or recursive.
//! Jobs carry their destination-relative path so workers never have to
//! consult run-wide state to mirror directory structure.
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};

/// One unit of resize work: a source file and its path relative to the
/// source root (flat mode: just the file name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeJob {
    pub source: PathBuf,
    pub relative: PathBuf,
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("png"))
}

/// Collect all PNG files under `src`, sorted lexicographically by path
/// for deterministic processing order.
pub fn discover_pngs(src: &Path, recursive: bool) -> Result<Vec<ResizeJob>> {
    let mut jobs = Vec::new();

    if recursive {
        for entry in WalkDir::new(src) {
            let entry = entry.map_err(std::io::Error::from)?;
            let path = entry.path();
            if entry.file_type().is_file() && is_png(path) {
                let relative = path
                    .strip_prefix(src)
                    .map_err(|e| Error::StripPrefix {
                        path: path.to_path_buf(),
                        source: e,
                    })?
                    .to_path_buf();
                jobs.push(ResizeJob {
                    source: path.to_path_buf(),
                    relative,
                });
            }
        }
    } else {
        for entry in fs::read_dir(src)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && is_png(&path) {
                jobs.push(ResizeJob {
                    relative: PathBuf::from(entry.file_name()),
                    source: path,
                });
            }
        }
    }

    jobs.sort_by(|a, b| a.source.cmp(&b.source));
    Ok(jobs)
}
