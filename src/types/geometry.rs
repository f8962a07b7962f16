//! Canvas coordinates.

/// A point in canvas space (pixel centres sit at integer coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Point from integer layout coordinates.
    pub fn at(x: i32, y: i32) -> Self {
        Self::new(x as f32, y as f32)
    }

    /// Translate by an offset.
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::at(x, y)
    }
}

/// An inclusive bounding box `[x0, y0, x1, y1]`, as used for ellipses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl BBox {
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Box spanning `rx`/`ry` either side of a centre.
    pub fn around(cx: i32, cy: i32, rx: i32, ry: i32) -> Self {
        Self::new(
            (cx - rx) as f32,
            (cy - ry) as f32,
            (cx + rx) as f32,
            (cy + ry) as f32,
        )
    }

    /// Square box of radius `r` around a point.
    pub fn circle(centre: Point, r: f32) -> Self {
        Self::new(centre.x - r, centre.y - r, centre.x + r, centre.y + r)
    }

    pub fn centre(&self) -> Point {
        Point::new((self.x0 + self.x1) / 2.0, (self.y0 + self.y1) / 2.0)
    }

    /// Half extents (rx, ry).
    pub fn radii(&self) -> (f32, f32) {
        ((self.x1 - self.x0) / 2.0, (self.y1 - self.y0) / 2.0)
    }

    /// Shrink every side by `d`.
    pub fn inset(&self, d: f32) -> Self {
        Self::new(self.x0 + d, self.y0 + d, self.x1 - d, self.y1 - d)
    }

    /// Replace the bottom edge.
    pub fn with_bottom(self, y1: f32) -> Self {
        Self { y1, ..self }
    }
}
