//! PNG output for finished assets.

use std::fs;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat};

use crate::error::{IconError, Result};
use crate::report::AssetReport;
use crate::types::IconVariant;

/// Create a directory (and parents) if it does not exist yet.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| IconError::Io {
            path: dir.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }
    Ok(())
}

/// Write an image as PNG, keeping its channel layout (RGB stays RGB).
pub fn write_png(image: &DynamicImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| IconError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })
}

/// Write a variant's asset into `dir` under its canonical file name.
pub fn write_asset(image: &DynamicImage, variant: IconVariant, dir: &Path) -> Result<AssetReport> {
    let path = dir.join(variant.file_name());
    write_png(image, &path)?;
    Ok(AssetReport::new(variant, &path, image))
}

/// Copy a written asset into a mirror directory.
///
/// Returns the copy's path, or `None` when the mirror directory is the
/// asset's own directory (copying a file onto itself truncates it).
pub fn mirror_asset(source: &Path, mirror_dir: &Path) -> Result<Option<PathBuf>> {
    let name = source.file_name().ok_or_else(|| IconError::Io {
        path: source.to_path_buf(),
        message: "Asset path has no file name".to_string(),
    })?;
    let target = mirror_dir.join(name);
    if is_same_file(source, &target)? {
        return Ok(None);
    }
    fs::copy(source, &target).map_err(|e| IconError::Io {
        path: target.clone(),
        message: format!("Failed to copy asset: {}", e),
    })?;
    Ok(Some(target))
}

/// Whether two paths resolve to the same existing file.
fn is_same_file(a: &Path, b: &Path) -> Result<bool> {
    if !b.exists() {
        return Ok(false);
    }
    let canonical = |p: &Path| {
        fs::canonicalize(p).map_err(|e| IconError::Io {
            path: p.to_path_buf(),
            message: format!("Failed to resolve path: {}", e),
        })
    };
    Ok(canonical(a)? == canonical(b)?)
}
