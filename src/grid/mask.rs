//! Background removal heuristics.
//!
//! Two strategies exist for turning the generator's checkerboard / guide-line
//! background into real transparency, and they do not agree pixel for pixel:
//!
//! - [`Strategy::Green`] keeps only green-dominant pixels (the logo) and clears
//!   everything else, with reserved border bands cleared unconditionally.
//! - [`Strategy::EdgeFlood`] clears bright grayscale pixels that are connected
//!   to the image border, leaving enclosed gray regions alone.
//!
//! All classification uses integer channel arithmetic.

use std::fmt;

use image::RgbaImage;
use serde::{Deserialize, Serialize};

/// Which background classifier to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Protect green-dominant pixels, clear the rest and the border bands.
    #[default]
    Green,
    /// Clear bright gray regions reachable from the image edge.
    EdgeFlood,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Green => f.write_str("green"),
            Strategy::EdgeFlood => f.write_str("edge-flood"),
        }
    }
}

/// Strips along each edge that are always background.
///
/// The top band holds the generator's label, the right and bottom bands its
/// guide lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderBands {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl BorderBands {
    /// Bands for a quadrant at 1024px.
    pub const QUADRANT_1024: Self = Self {
        top: 140,
        right: 40,
        bottom: 40,
        left: 5,
    };

    /// No reserved bands.
    pub const NONE: Self = Self {
        top: 0,
        right: 0,
        bottom: 0,
        left: 0,
    };

    /// Rescale bands defined at `from` pixels to an image of `to` pixels.
    pub fn scaled(self, from: u32, to: u32) -> Self {
        let s = |v: u32| ((v as u64 * to as u64 + from as u64 / 2) / from.max(1) as u64) as u32;
        Self {
            top: s(self.top),
            right: s(self.right),
            bottom: s(self.bottom),
            left: s(self.left),
        }
    }

    /// Whether (x, y) falls inside any band of a `width` x `height` image.
    pub fn contains(&self, x: u32, y: u32, width: u32, height: u32) -> bool {
        y < self.top
            || x < self.left
            || x >= width.saturating_sub(self.right)
            || y >= height.saturating_sub(self.bottom)
    }
}

/// Same-shape boolean grid over an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl Mask {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![false; width as usize * height as usize],
        }
    }

    /// Build a mask by testing every pixel of an image.
    pub fn from_fn(image: &RgbaImage, mut f: impl FnMut(u32, u32, [u8; 4]) -> bool) -> Self {
        let mut mask = Self::new(image.width(), image.height());
        for (x, y, p) in image.enumerate_pixels() {
            if f(x, y, p.0) {
                mask.set(x, y);
            }
        }
        mask
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> bool {
        self.bits[self.index(x, y)]
    }

    pub fn set(&mut self, x: u32, y: u32) {
        let i = self.index(x, y);
        self.bits[i] = true;
    }

    /// Number of marked pixels.
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Zero the alpha of every marked pixel. Returns how many pixels changed.
    pub fn clear_alpha(&self, image: &mut RgbaImage) -> usize {
        let mut changed = 0;
        for (x, y, p) in image.enumerate_pixels_mut() {
            if self.get(x, y) && p[3] != 0 {
                p[3] = 0;
                changed += 1;
            }
        }
        changed
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Clearly green: part of the logo.
pub fn is_strong_green(p: [u8; 4]) -> bool {
    let (r, g, b) = (p[0] as i32, p[1] as i32, p[2] as i32);
    g > r + 15 && g > b + 15 && g > 50
}

/// Green by a smaller margin, as on anti-aliased logo edges.
pub fn is_edge_green(p: [u8; 4]) -> bool {
    let (r, g, b) = (p[0] as i32, p[1] as i32, p[2] as i32);
    g > r + 5 && g > b + 5 && g > 30
}

/// Pixels the green classifier never clears outside the border bands.
pub fn is_protected(p: [u8; 4]) -> bool {
    is_strong_green(p) || is_edge_green(p)
}

/// Neutral gray in the checkerboard's brightness range.
///
/// Excludes near-black (logo outlines) and green pixels.
pub fn is_checker_gray(p: [u8; 4]) -> bool {
    let (r, g, b) = (p[0] as i32, p[1] as i32, p[2] as i32);
    let spread = r.max(g).max(b) - r.min(g).min(b);
    let mean = (r + g + b) / 3;
    spread <= 12 && (90..=235).contains(&mean) && !is_strong_green(p)
}

/// Grayscale and bright, the flood-fill candidate test.
fn is_bright_gray(p: [u8; 4]) -> bool {
    let (r, g, b) = (p[0] as i32, p[1] as i32, p[2] as i32);
    (r - g).abs() < 10 && (g - b).abs() < 10 && (r - b).abs() < 10 && r + g + b > 540
}

/// Background mask of the green classifier.
pub fn green_background_mask(image: &RgbaImage, bands: BorderBands) -> Mask {
    let (w, h) = image.dimensions();
    Mask::from_fn(image, |x, y, p| bands.contains(x, y, w, h) || !is_protected(p))
}

/// Background mask of the edge flood: bright gray components touching the border.
pub fn edge_flood_mask(image: &RgbaImage) -> Mask {
    let (w, h) = image.dimensions();
    let mut mask = Mask::new(w, h);
    if w == 0 || h == 0 {
        return mask;
    }

    let candidate = |x: u32, y: u32| is_bright_gray(image.get_pixel(x, y).0);
    let mut stack = Vec::new();
    let seed = |x: u32, y: u32, mask: &mut Mask, stack: &mut Vec<(u32, u32)>| {
        if !mask.get(x, y) && candidate(x, y) {
            mask.set(x, y);
            stack.push((x, y));
        }
    };

    for x in 0..w {
        seed(x, 0, &mut mask, &mut stack);
        seed(x, h - 1, &mut mask, &mut stack);
    }
    for y in 0..h {
        seed(0, y, &mut mask, &mut stack);
        seed(w - 1, y, &mut mask, &mut stack);
    }

    while let Some((x, y)) = stack.pop() {
        if x > 0 {
            seed(x - 1, y, &mut mask, &mut stack);
        }
        if x + 1 < w {
            seed(x + 1, y, &mut mask, &mut stack);
        }
        if y > 0 {
            seed(x, y - 1, &mut mask, &mut stack);
        }
        if y + 1 < h {
            seed(x, y + 1, &mut mask, &mut stack);
        }
    }

    mask
}

/// Clear the background of a quadrant with the green classifier.
///
/// Returns the number of pixels whose alpha changed.
pub fn remove_all_checker(image: &mut RgbaImage, bands: BorderBands) -> usize {
    green_background_mask(image, bands).clear_alpha(image)
}

/// Clear the background with the chosen strategy.
///
/// The edge flood has no notion of reserved bands and ignores `bands`.
pub fn make_background_transparent(
    image: &mut RgbaImage,
    strategy: Strategy,
    bands: BorderBands,
) -> usize {
    let mask = match strategy {
        Strategy::Green => green_background_mask(image, bands),
        Strategy::EdgeFlood => edge_flood_mask(image),
    };
    mask.clear_alpha(image)
}

/// Recolour checkerboard residue to white. Returns the number of pixels changed.
pub fn whiten_checker(image: &mut RgbaImage) -> usize {
    let mut changed = 0;
    for p in image.pixels_mut() {
        if is_checker_gray(p.0) {
            p[0] = 255;
            p[1] = 255;
            p[2] = 255;
            changed += 1;
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const GREEN: Rgba<u8> = Rgba([0, 200, 0, 255]);
    const LIGHT: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const DARK: Rgba<u8> = Rgba([204, 204, 204, 255]);

    fn checkerboard(w: u32, h: u32, cell: u32) -> RgbaImage {
        RgbaImage::from_fn(w, h, |x, y| {
            if (x / cell + y / cell) % 2 == 0 {
                LIGHT
            } else {
                DARK
            }
        })
    }

    #[test]
    fn test_strong_green_thresholds() {
        assert!(is_strong_green([0, 200, 0, 255]));
        assert!(is_strong_green([45, 159, 45, 255]));
        assert!(!is_strong_green([30, 45, 30, 255])); // too dark
        assert!(!is_strong_green([100, 110, 100, 255])); // margin too small
    }

    #[test]
    fn test_edge_green_looser() {
        let p = [100, 110, 100, 255];
        assert!(!is_strong_green(p));
        assert!(is_edge_green(p));
        assert!(is_protected(p));
        assert!(!is_protected([128, 128, 128, 255]));
    }

    #[test]
    fn test_checker_gray() {
        assert!(is_checker_gray([204, 204, 204, 255]));
        assert!(is_checker_gray([150, 152, 149, 255]));
        assert!(!is_checker_gray([255, 255, 255, 255]));
        assert!(!is_checker_gray([20, 20, 20, 255]));
        assert!(!is_checker_gray([60, 200, 80, 255]));
    }

    #[test]
    fn test_bands_contains() {
        let bands = BorderBands::QUADRANT_1024;
        assert!(bands.contains(500, 139, 1024, 1024));
        assert!(!bands.contains(500, 140, 1024, 1024));
        assert!(bands.contains(984, 500, 1024, 1024));
        assert!(!bands.contains(983, 500, 1024, 1024));
        assert!(bands.contains(500, 984, 1024, 1024));
        assert!(bands.contains(4, 500, 1024, 1024));
        assert!(!bands.contains(5, 500, 1024, 1024));
    }

    #[test]
    fn test_bands_scaled() {
        let half = BorderBands::QUADRANT_1024.scaled(1024, 512);
        assert_eq!(
            half,
            BorderBands {
                top: 70,
                right: 20,
                bottom: 20,
                left: 3
            }
        );
        assert_eq!(BorderBands::QUADRANT_1024.scaled(1024, 1024), BorderBands::QUADRANT_1024);
    }

    #[test]
    fn test_green_preserved_outside_bands() {
        let mut img = RgbaImage::from_fn(200, 200, |x, y| {
            if (x + y) % 3 == 0 {
                Rgba([(x % 60) as u8, 51 + (y % 150) as u8 + 20, 0, 255])
            } else {
                DARK
            }
        });
        remove_all_checker(&mut img, BorderBands::NONE);
        for (_, _, p) in img.enumerate_pixels() {
            if is_strong_green(p.0) {
                assert_eq!(p[3], 255);
            }
        }
    }

    #[test]
    fn test_border_bands_cleared_regardless_of_colour() {
        let mut img = RgbaImage::from_pixel(1024, 1024, GREEN);
        remove_all_checker(&mut img, BorderBands::QUADRANT_1024);

        assert_eq!(img.get_pixel(512, 0)[3], 0);
        assert_eq!(img.get_pixel(512, 139)[3], 0);
        assert_eq!(img.get_pixel(1023, 512)[3], 0);
        assert_eq!(img.get_pixel(984, 512)[3], 0);
        assert_eq!(img.get_pixel(512, 1023)[3], 0);
        assert_eq!(img.get_pixel(0, 512)[3], 0);
        assert_eq!(img.get_pixel(4, 512)[3], 0);

        assert_eq!(img.get_pixel(512, 140)[3], 255);
        assert_eq!(img.get_pixel(5, 512)[3], 255);
        assert_eq!(img.get_pixel(983, 983)[3], 255);
    }

    #[test]
    fn test_green_classifier_clears_checkerboard() {
        let mut img = checkerboard(64, 64, 8);
        for y in 20..40 {
            for x in 20..40 {
                img.put_pixel(x, y, GREEN);
            }
        }
        let changed = remove_all_checker(&mut img, BorderBands::NONE);
        assert_eq!(changed, 64 * 64 - 400);
        assert_eq!(img.get_pixel(30, 30)[3], 255);
        assert_eq!(img.get_pixel(5, 5)[3], 0);
    }

    #[test]
    fn test_remove_all_checker_idempotent() {
        let mut img = checkerboard(64, 64, 8);
        img.put_pixel(32, 32, GREEN);
        remove_all_checker(&mut img, BorderBands::QUADRANT_1024.scaled(1024, 64));
        let once = img.clone();

        let changed = remove_all_checker(&mut img, BorderBands::QUADRANT_1024.scaled(1024, 64));
        assert_eq!(changed, 0);
        assert_eq!(img, once);
    }

    #[test]
    fn test_edge_flood_keeps_enclosed_gray() {
        // Gray background, a dark ring, and gray inside the ring
        let mut img = RgbaImage::from_pixel(30, 30, LIGHT);
        for y in 5..25 {
            for x in 5..25 {
                let edge = x == 5 || x == 24 || y == 5 || y == 24;
                let px = if edge { Rgba([10, 10, 15, 255]) } else { LIGHT };
                img.put_pixel(x, y, px);
            }
        }

        let mask = edge_flood_mask(&img);
        assert!(mask.get(0, 0));
        assert!(mask.get(29, 15));
        assert!(!mask.get(5, 5));
        assert!(!mask.get(15, 15));
        assert_eq!(mask.count(), 30 * 30 - 20 * 20);
    }

    #[test]
    fn test_edge_flood_ignores_mid_gray() {
        // Mid gray fails the brightness test and is never flooded
        let img = RgbaImage::from_pixel(8, 8, Rgba([128, 128, 128, 255]));
        assert_eq!(edge_flood_mask(&img).count(), 0);
    }

    #[test]
    fn test_strategies_differ_on_enclosed_gray() {
        let mut img = RgbaImage::from_pixel(20, 20, LIGHT);
        for y in 4..16 {
            for x in 4..16 {
                let edge = x == 4 || x == 15 || y == 4 || y == 15;
                img.put_pixel(x, y, if edge { GREEN } else { LIGHT });
            }
        }
        let mut flood = img.clone();
        make_background_transparent(&mut flood, Strategy::EdgeFlood, BorderBands::NONE);
        make_background_transparent(&mut img, Strategy::Green, BorderBands::NONE);

        assert_eq!(flood.get_pixel(10, 10)[3], 255);
        assert_eq!(img.get_pixel(10, 10)[3], 0);
        assert_eq!(flood.get_pixel(0, 0)[3], 0);
        assert_eq!(img.get_pixel(4, 4)[3], 255);
    }

    #[test]
    fn test_whiten_checker() {
        let mut img = checkerboard(16, 16, 4);
        img.put_pixel(0, 4, GREEN);
        img.put_pixel(1, 4, Rgba([10, 10, 15, 255]));
        whiten_checker(&mut img);

        assert_eq!(img.get_pixel(4, 0).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(0, 4).0, GREEN.0);
        assert_eq!(img.get_pixel(1, 4).0, [10, 10, 15, 255]);
    }

    #[test]
    fn test_clear_alpha_counts_changes_only() {
        let mut img = RgbaImage::from_pixel(2, 1, DARK);
        img.put_pixel(1, 0, Rgba([204, 204, 204, 0]));
        let mut mask = Mask::new(2, 1);
        mask.set(0, 0);
        mask.set(1, 0);
        assert_eq!(mask.clear_alpha(&mut img), 1);
    }

    #[test]
    fn test_strategy_display() {
        assert_eq!(Strategy::Green.to_string(), "green");
        assert_eq!(Strategy::EdgeFlood.to_string(), "edge-flood");
        assert_eq!(Strategy::default(), Strategy::Green);
    }
}
