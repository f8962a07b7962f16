//! Layout presets for the procedurally drawn icons.
//!
//! Coordinates are literal pixel offsets tuned for a 1024px canvas. Graph
//! vertices are relative to the track centre, which itself follows the
//! requested size, so smaller canvases keep the artwork centred.

use crate::types::{BBox, Colour, Point};

/// Ring shape: an outer ellipse with a concentric cut-out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    pub rx: i32,
    pub ry: i32,
    pub thickness: i32,
}

impl Track {
    pub fn outer(&self, cx: i32, cy: i32) -> BBox {
        BBox::around(cx, cy, self.rx, self.ry)
    }

    pub fn inner(&self, cx: i32, cy: i32) -> BBox {
        BBox::around(cx, cy, self.rx - self.thickness, self.ry - self.thickness)
    }
}

/// Circular markers drawn on the graph vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Markers {
    /// Radius of the intermediate vertices, `None` to mark only the tip.
    pub vertex_radius: Option<f32>,
    /// Radius of the final (highlighted) vertex.
    pub tip_radius: f32,
    /// Extra ring drawn behind every marker: (width, colour).
    pub ring: Option<(f32, Colour)>,
}

/// Upward arrow rising from the final graph vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    /// Space between the tip marker and the shaft.
    pub gap: f32,
    pub length: f32,
    pub width: f32,
    /// How far the head's point rises above the shaft.
    pub head_rise: f32,
    pub head_half_width: f32,
    /// How far the head's base sits below the shaft top.
    pub head_drop: f32,
}

/// The "M" letterform, drawn as four strokes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Monogram {
    pub origin: Point,
    pub size: f32,
    pub weight: f32,
}

impl Monogram {
    /// Stroke path: left stem up, down to the middle, up, right stem down.
    pub fn path(&self) -> [Point; 5] {
        let Point { x, y } = self.origin;
        let s = self.size;
        let mid = (s / 2.0).floor();
        [
            Point::new(x, y + s),
            Point::new(x, y),
            Point::new(x + mid, y + s * 0.5),
            Point::new(x + s, y),
            Point::new(x + s, y + s),
        ]
    }
}

/// Everything needed to draw one icon variant.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub size: u32,
    pub cx: i32,
    pub cy: i32,
    pub track: Track,
    /// Colour used to cut the inside of the track.
    pub cut_out: Colour,
    /// Graph vertices relative to the centre.
    pub graph: Vec<(i32, i32)>,
    /// Filled area under the graph: (floor offset below centre, colour).
    pub graph_fill: Option<(i32, Colour)>,
    pub line_width: f32,
    pub markers: Markers,
    pub arrow: Option<Arrow>,
    pub monogram: Option<Monogram>,
}

impl Layout {
    /// Main store icon.
    pub fn app_icon(size: u32) -> Self {
        let half = (size / 2) as i32;
        Self {
            size,
            cx: half,
            cy: half + 30,
            track: Track { rx: 340, ry: 240, thickness: 48 },
            cut_out: Colour::BG_DARK,
            graph: vec![(-180, 80), (-90, 40), (-10, 10), (80, -50), (170, -130)],
            graph_fill: Some((100, Colour::EMERALD.with_alpha(35))),
            line_width: 10.0,
            markers: Markers {
                vertex_radius: Some(8.0),
                tip_radius: 12.0,
                ring: Some((3.0, Colour::EMERALD_DARK)),
            },
            arrow: Some(Arrow {
                gap: 16.0,
                length: 40.0,
                width: 6.0,
                head_rise: 12.0,
                head_half_width: 14.0,
                head_drop: 6.0,
            }),
            monogram: Some(Monogram {
                origin: Point::at(140, 140),
                size: 120.0,
                weight: 14.0,
            }),
        }
    }

    /// Adaptive icon foreground. The monogram sits inside the safe area.
    pub fn adaptive_icon(size: u32) -> Self {
        let half = (size / 2) as i32;
        let safe = safe_margin(size) as i32;
        Self {
            size,
            cx: half,
            cy: half + 20,
            track: Track { rx: 240, ry: 170, thickness: 36 },
            cut_out: Colour::TRANSPARENT,
            graph: vec![(-120, 55), (-50, 25), (10, 5), (70, -30), (130, -85)],
            graph_fill: Some((70, Colour::EMERALD.with_alpha(50))),
            line_width: 8.0,
            markers: Markers {
                vertex_radius: Some(6.0),
                tip_radius: 9.0,
                ring: None,
            },
            arrow: Some(Arrow {
                gap: 12.0,
                length: 30.0,
                width: 5.0,
                head_rise: 10.0,
                head_half_width: 11.0,
                head_drop: 5.0,
            }),
            monogram: Some(Monogram {
                origin: Point::at(safe + 30, safe + 30),
                size: 90.0,
                weight: 11.0,
            }),
        }
    }

    /// Splash artwork with the brand mark anchored under the track.
    pub fn splash_icon(size: u32) -> Self {
        let half = (size / 2) as i32;
        let (cx, cy) = (half, half - 20);
        let track = Track { rx: 300, ry: 210, thickness: 40 };
        Self {
            size,
            cx,
            cy,
            track,
            cut_out: Colour::TRANSPARENT,
            graph: vec![(-160, 70), (-80, 35), (0, 10), (80, -40), (155, -110)],
            graph_fill: Some((85, Colour::EMERALD_LIGHT.with_alpha(40))),
            line_width: 9.0,
            markers: Markers {
                vertex_radius: Some(7.0),
                tip_radius: 10.0,
                ring: None,
            },
            arrow: Some(Arrow {
                gap: 14.0,
                length: 35.0,
                width: 5.0,
                head_rise: 10.0,
                head_half_width: 12.0,
                head_drop: 5.0,
            }),
            monogram: Some(Monogram {
                origin: Point::at(cx - 160, cy + track.ry + 60),
                size: 80.0,
                weight: 10.0,
            }),
        }
    }

    /// Simplified geometry for tiny favicons.
    pub fn favicon(size: u32) -> Self {
        let half = (size / 2) as i32;
        Self {
            size,
            cx: half,
            cy: half + 2,
            track: Track { rx: 18, ry: 13, thickness: 4 },
            cut_out: Colour::BG_DARK,
            graph: vec![(-8, 4), (-2, 0), (4, -4), (9, -9)],
            graph_fill: None,
            line_width: 2.0,
            markers: Markers {
                vertex_radius: None,
                tip_radius: 2.0,
                ring: None,
            },
            arrow: None,
            monogram: None,
        }
    }

    /// Graph vertices in canvas coordinates.
    pub fn graph_points(&self) -> Vec<Point> {
        self.graph
            .iter()
            .map(|&(dx, dy)| Point::at(self.cx + dx, self.cy + dy))
            .collect()
    }

    /// Closed polygon under the graph, down to the fill floor.
    pub fn graph_fill_polygon(&self) -> Option<(Vec<Point>, Colour)> {
        let (floor, colour) = self.graph_fill?;
        let (first, last) = (self.graph.first()?, self.graph.last()?);
        let mut points = self.graph_points();
        points.push(Point::at(self.cx + last.0, self.cy + floor));
        points.push(Point::at(self.cx + first.0, self.cy + floor));
        Some((points, colour))
    }
}

/// Margin outside the adaptive icon's safe area (17% per side).
pub fn safe_margin(size: u32) -> u32 {
    (size as f32 * 0.17) as u32
}
