//! Per-quadrant processing of a generated 2x2 icon sheet.

use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};

use crate::draw::{flatten, Canvas};
use crate::error::{IconError, Result};
use crate::types::{Colour, IconVariant};

use super::mask::{make_background_transparent, whiten_checker, BorderBands, Strategy};
use super::quadrant::{split_quadrants, Quadrant};

/// Working size for the quadrants that become 1024px assets.
pub const FULL_SIZE: u32 = 1024;

/// Favicon quadrant is masked at this size, then downsampled.
pub const FAVICON_WORK_SIZE: u32 = 512;

/// Settings for splitting a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitOptions {
    /// Rows of the generator's label band on the left quadrants.
    pub header_rows: u32,
    pub strategy: Strategy,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            header_rows: 100,
            strategy: Strategy::Green,
        }
    }
}

/// A finished asset ready to be written.
#[derive(Debug, Clone)]
pub struct ProcessedIcon {
    pub quadrant: Quadrant,
    pub variant: IconVariant,
    pub image: DynamicImage,
    /// Pixels recoloured or made transparent by the clean-up pass.
    pub cleaned: usize,
}

/// Decode the source sheet as RGBA.
pub fn load_source(path: &Path) -> Result<RgbaImage> {
    if !path.exists() {
        return Err(IconError::Io {
            path: path.to_path_buf(),
            message: format!("File not found: {}", path.display()),
        });
    }

    let img = image::open(path)
        .map_err(|e| IconError::Image {
            path: path.to_path_buf(),
            message: format!("Failed to load image: {}", e),
        })?
        .to_rgba8();

    if img.width() < 2 || img.height() < 2 {
        return Err(IconError::Image {
            path: path.to_path_buf(),
            message: format!(
                "Image is too small to split ({}x{})",
                img.width(),
                img.height()
            ),
        });
    }

    Ok(img)
}

/// Split a sheet into its four quadrants and process each one.
pub fn process_grid(source: &RgbaImage, options: SplitOptions) -> Vec<ProcessedIcon> {
    split_quadrants(source)
        .into_iter()
        .map(|(quadrant, image)| process_quadrant(quadrant, &image, options))
        .collect()
}

/// Turn one cropped quadrant into its final asset.
pub fn process_quadrant(quadrant: Quadrant, image: &RgbaImage, options: SplitOptions) -> ProcessedIcon {
    let variant = quadrant.variant();
    let (image, cleaned) = match quadrant {
        Quadrant::TopLeft => {
            let mut canvas = Canvas::from_image(fit(image, FULL_SIZE));
            canvas.fill_rows(0..options.header_rows, Colour::BLACK);
            let flat = flatten(canvas.image(), Colour::BLACK);
            (DynamicImage::ImageRgb8(flat), 0)
        }
        Quadrant::TopRight => {
            let mut work = fit(image, FULL_SIZE);
            let cleared =
                make_background_transparent(&mut work, options.strategy, BorderBands::QUADRANT_1024);
            (DynamicImage::ImageRgba8(work), cleared)
        }
        Quadrant::BottomLeft => {
            let mut canvas = Canvas::from_image(fit(image, FULL_SIZE));
            canvas.fill_rows(0..options.header_rows, Colour::WHITE);
            let mut work = canvas.into_image();
            let whitened = whiten_checker(&mut work);
            let flat = flatten(&work, Colour::WHITE);
            (DynamicImage::ImageRgb8(flat), whitened)
        }
        Quadrant::BottomRight => {
            let mut work = fit(image, FAVICON_WORK_SIZE);
            let bands = BorderBands::QUADRANT_1024.scaled(FULL_SIZE, FAVICON_WORK_SIZE);
            let cleared = make_background_transparent(&mut work, options.strategy, bands);
            let small = fit(&work, variant.size());
            (DynamicImage::ImageRgba8(small), cleared)
        }
    };

    ProcessedIcon {
        quadrant,
        variant,
        image,
        cleaned,
    }
}

/// Resize to a square with Lanczos resampling, skipping no-op resizes.
fn fit(image: &RgbaImage, size: u32) -> RgbaImage {
    if image.dimensions() == (size, size) {
        image.clone()
    } else {
        image::imageops::resize(image, size, size, FilterType::Lanczos3)
    }
}
