//! Raster canvas with vector-style primitives.
//!
//! Primitives write pixels directly, the same way a paint call on an RGBA
//! surface would: drawing with a transparent colour punches a hole. Soft
//! effects are drawn onto a separate transparent canvas and merged with
//! [`Canvas::composite`].

use std::ops::Range;

use image::{Rgba, RgbaImage};

use crate::types::{BBox, Colour, Point};

use super::composite::over;

/// An RGBA drawing surface.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a canvas filled with a single colour.
    pub fn new(width: u32, height: u32, fill: Colour) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, fill.into()),
        }
    }

    /// Square transparent canvas, used for overlays.
    pub fn overlay(size: u32) -> Self {
        Self::new(size, size, Colour::TRANSPARENT)
    }

    /// Wrap an existing image.
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn get(&self, x: u32, y: u32) -> Colour {
        (*self.image.get_pixel(x, y)).into()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Fill the ellipse inscribed in `bbox` (edges inclusive).
    pub fn fill_ellipse(&mut self, bbox: BBox, colour: Colour) {
        let px: Rgba<u8> = colour.into();
        for (x, y) in self.span(bbox, 0.0) {
            if ellipse_contains(bbox, x as f32, y as f32) {
                self.image.put_pixel(x, y, px);
            }
        }
    }

    /// Draw an ellipse outline `width` pixels thick, measured inwards.
    pub fn stroke_ellipse(&mut self, bbox: BBox, colour: Colour, width: f32) {
        let px: Rgba<u8> = colour.into();
        let inner = bbox.inset(width);
        for (x, y) in self.span(bbox, 0.0) {
            let (fx, fy) = (x as f32, y as f32);
            if ellipse_contains(bbox, fx, fy) && !ellipse_contains(inner, fx, fy) {
                self.image.put_pixel(x, y, px);
            }
        }
    }

    /// Draw a straight stroke of the given width between two points.
    pub fn line(&mut self, a: Point, b: Point, colour: Colour, width: f32) {
        let px: Rgba<u8> = colour.into();
        let half = (width / 2.0).max(0.5);
        let bbox = BBox::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y));
        for (x, y) in self.span(bbox, half) {
            if segment_distance(Point::new(x as f32, y as f32), a, b) <= half {
                self.image.put_pixel(x, y, px);
            }
        }
    }

    /// Draw a connected sequence of strokes.
    pub fn polyline(&mut self, points: &[Point], colour: Colour, width: f32) {
        for pair in points.windows(2) {
            self.line(pair[0], pair[1], colour, width);
        }
    }

    /// Fill a closed polygon (even-odd rule, tested at pixel centres).
    pub fn fill_polygon(&mut self, points: &[Point], colour: Colour) {
        if points.len() < 3 {
            return;
        }
        let px: Rgba<u8> = colour.into();
        let bbox = points.iter().skip(1).fold(
            BBox::new(points[0].x, points[0].y, points[0].x, points[0].y),
            |b, p| BBox::new(b.x0.min(p.x), b.y0.min(p.y), b.x1.max(p.x), b.y1.max(p.y)),
        );
        for (x, y) in self.span(bbox, 0.0) {
            if polygon_contains(points, Point::new(x as f32, y as f32)) {
                self.image.put_pixel(x, y, px);
            }
        }
    }

    /// Paint whole rows with a solid colour (clamped to the canvas).
    pub fn fill_rows(&mut self, rows: Range<u32>, colour: Colour) {
        let px: Rgba<u8> = colour.into();
        let end = rows.end.min(self.height());
        for y in rows.start..end {
            for x in 0..self.width() {
                self.image.put_pixel(x, y, px);
            }
        }
    }

    /// Alpha-composite `layer` over this canvas.
    ///
    /// Both canvases must be the same size; extra pixels in either are ignored.
    pub fn composite(&mut self, layer: &Canvas) {
        let w = self.width().min(layer.width());
        let h = self.height().min(layer.height());
        for y in 0..h {
            for x in 0..w {
                let src = layer.image.get_pixel(x, y).0;
                if src[3] == 0 {
                    continue;
                }
                let dst = self.image.get_pixel_mut(x, y);
                dst.0 = over(dst.0, src);
            }
        }
    }

    /// Pixel coordinates covered by `bbox` grown by `pad`, clipped to the canvas.
    fn span(&self, bbox: BBox, pad: f32) -> impl Iterator<Item = (u32, u32)> {
        let clip = |lo: f32, hi: f32, limit: u32| -> Range<u32> {
            let lo = (lo - pad).floor().max(0.0) as u32;
            let hi = ((hi + pad).ceil() + 1.0).max(0.0).min(limit as f32) as u32;
            lo..hi.max(lo)
        };
        let xs = clip(bbox.x0, bbox.x1, self.width());
        let ys = clip(bbox.y0, bbox.y1, self.height());
        ys.flat_map(move |y| xs.clone().map(move |x| (x, y)))
    }
}

fn ellipse_contains(bbox: BBox, x: f32, y: f32) -> bool {
    let c = bbox.centre();
    let (rx, ry) = bbox.radii();
    if rx <= 0.0 || ry <= 0.0 {
        return false;
    }
    let dx = (x - c.x) / rx;
    let dy = (y - c.y) / ry;
    dx * dx + dy * dy <= 1.0
}

fn segment_distance(p: Point, a: Point, b: Point) -> f32 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len2 = dx * dx + dy * dy;
    let t = if len2 == 0.0 {
        0.0
    } else {
        (((p.x - a.x) * dx + (p.y - a.y) * dy) / len2).clamp(0.0, 1.0)
    };
    let (cx, cy) = (a.x + t * dx, a.y + t * dy);
    ((p.x - cx).powi(2) + (p.y - cy).powi(2)).sqrt()
}

fn polygon_contains(points: &[Point], p: Point) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (a, b) = (points[i], points[j]);
        if (a.y > p.y) != (b.y > p.y) {
            let x = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
