//! 2x2 grid cropping.

use image::RgbaImage;

use crate::types::IconVariant;

/// One cell of the 2x2 source grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// A pixel rectangle inside the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    /// The asset each cell of the generator's grid holds.
    pub fn variant(self) -> IconVariant {
        match self {
            Quadrant::TopLeft => IconVariant::AppIcon,
            Quadrant::TopRight => IconVariant::AdaptiveIcon,
            Quadrant::BottomLeft => IconVariant::Splash,
            Quadrant::BottomRight => IconVariant::Favicon,
        }
    }

    /// Region of this quadrant in a `width` x `height` image, split at the
    /// floor midpoints. The right and bottom cells absorb odd remainders.
    pub fn region(self, width: u32, height: u32) -> Region {
        let (mx, my) = (width / 2, height / 2);
        let (x, w) = match self {
            Quadrant::TopLeft | Quadrant::BottomLeft => (0, mx),
            Quadrant::TopRight | Quadrant::BottomRight => (mx, width - mx),
        };
        let (y, h) = match self {
            Quadrant::TopLeft | Quadrant::TopRight => (0, my),
            Quadrant::BottomLeft | Quadrant::BottomRight => (my, height - my),
        };
        Region {
            x,
            y,
            width: w,
            height: h,
        }
    }

    /// Copy this quadrant out of the source image.
    pub fn crop(self, source: &RgbaImage) -> RgbaImage {
        let r = self.region(source.width(), source.height());
        image::imageops::crop_imm(source, r.x, r.y, r.width, r.height).to_image()
    }
}

/// Crop all four quadrants in grid order.
pub fn split_quadrants(source: &RgbaImage) -> Vec<(Quadrant, RgbaImage)> {
    Quadrant::ALL
        .iter()
        .map(|&q| (q, q.crop(source)))
        .collect()
}
