//! Icon artwork renderer.
//!
//! Each preset is drawn layer by layer. Hard shapes go straight onto the
//! working canvas; soft layers (glow, shadow, highlight, graph fill) are drawn
//! on a transparent overlay and composited so they blend with what is below.

use image::DynamicImage;

use crate::draw::{flatten, Canvas};
use crate::types::{BBox, Colour, IconVariant, Point};

use super::layout::Layout;

/// Render the main app icon. Opaque RGB on the dark background.
pub fn create_icon(size: u32) -> DynamicImage {
    let layout = Layout::app_icon(size);
    let mut canvas = Canvas::new(size, size, Colour::BG_DARK);

    draw_background_glow(&mut canvas);
    draw_track_shadow(&mut canvas, &layout);
    draw_track(&mut canvas, &layout);
    draw_track_highlight(&mut canvas, &layout);
    draw_lane_line(&mut canvas, &layout);
    draw_graph(&mut canvas, &layout);
    draw_arrow(&mut canvas, &layout);
    draw_monogram(&mut canvas, &layout);

    DynamicImage::ImageRgb8(flatten(canvas.image(), Colour::BG_DARK))
}

/// Render the adaptive icon foreground on a transparent canvas.
pub fn create_adaptive_icon(size: u32) -> DynamicImage {
    let layout = Layout::adaptive_icon(size);
    let canvas = draw_mark(Canvas::overlay(size), &layout);
    DynamicImage::ImageRgba8(canvas.into_image())
}

/// Render the splash artwork, flattened onto the app background colour.
pub fn create_splash_icon(size: u32) -> DynamicImage {
    let layout = Layout::splash_icon(size);
    let canvas = draw_mark(Canvas::overlay(size), &layout);
    DynamicImage::ImageRgb8(flatten(canvas.image(), Colour::BG_DARK))
}

/// Render the simplified favicon.
pub fn create_favicon(size: u32) -> DynamicImage {
    let layout = Layout::favicon(size);
    let canvas = draw_mark(Canvas::new(size, size, Colour::BG_DARK), &layout);
    DynamicImage::ImageRgba8(canvas.into_image())
}

/// Render a variant at the given size.
pub fn render_variant(variant: IconVariant, size: u32) -> DynamicImage {
    match variant {
        IconVariant::AppIcon => create_icon(size),
        IconVariant::AdaptiveIcon => create_adaptive_icon(size),
        IconVariant::Splash => create_splash_icon(size),
        IconVariant::Favicon => create_favicon(size),
    }
}

/// Track, graph, arrow and monogram: the layers every preset shares.
fn draw_mark(mut canvas: Canvas, layout: &Layout) -> Canvas {
    draw_track(&mut canvas, layout);
    draw_graph(&mut canvas, layout);
    draw_arrow(&mut canvas, layout);
    draw_monogram(&mut canvas, layout);
    canvas
}

/// Three stacked translucent circles, brightest towards the middle.
fn draw_background_glow(canvas: &mut Canvas) {
    let size = canvas.width();
    let c = (size / 2) as i32;
    for i in 0..3 {
        let r = c - i * 60;
        let mut glow = Canvas::overlay(size);
        glow.fill_ellipse(
            BBox::around(c, c, r, r),
            Colour::EMERALD.with_alpha(15 + i as u8 * 5),
        );
        canvas.composite(&glow);
    }
}

fn draw_track_shadow(canvas: &mut Canvas, layout: &Layout) {
    let (cx, cy, t) = (layout.cx, layout.cy, layout.track);
    let mut shadow = Canvas::overlay(canvas.width());
    shadow.fill_ellipse(
        BBox::around(cx, cy + 8, t.rx + 4, t.ry),
        Colour::BLACK.with_alpha(40),
    );
    canvas.composite(&shadow);
}

fn draw_track(canvas: &mut Canvas, layout: &Layout) {
    let (cx, cy) = (layout.cx, layout.cy);
    canvas.fill_ellipse(layout.track.outer(cx, cy), Colour::EMERALD);
    canvas.fill_ellipse(layout.track.inner(cx, cy), layout.cut_out);
}

/// Soft white band over the upper half of the ring.
fn draw_track_highlight(canvas: &mut Canvas, layout: &Layout) {
    let (cx, cy) = (layout.cx, layout.cy);
    let centre_line = cy as f32;
    let mut highlight = Canvas::overlay(canvas.width());
    highlight.fill_ellipse(
        layout.track.outer(cx, cy).with_bottom(centre_line),
        Colour::WHITE.with_alpha(20),
    );
    highlight.fill_ellipse(
        layout.track.inner(cx, cy).with_bottom(centre_line),
        Colour::TRANSPARENT,
    );
    canvas.composite(&highlight);
}

/// Thin lane marking just inside the ring.
fn draw_lane_line(canvas: &mut Canvas, layout: &Layout) {
    let t = layout.track;
    let inset = t.thickness - 6;
    let mut lane = Canvas::overlay(canvas.width());
    lane.stroke_ellipse(
        BBox::around(layout.cx, layout.cy, t.rx - inset, t.ry - inset),
        Colour::WHITE.with_alpha(60),
        3.0,
    );
    canvas.composite(&lane);
}

/// Filled area, rising line and vertex markers.
fn draw_graph(canvas: &mut Canvas, layout: &Layout) {
    if let Some((polygon, colour)) = layout.graph_fill_polygon() {
        let mut fill = Canvas::overlay(canvas.width());
        fill.fill_polygon(&polygon, colour);
        canvas.composite(&fill);
    }

    let points = layout.graph_points();
    canvas.polyline(&points, Colour::EMERALD_LIGHT, layout.line_width);

    let markers = layout.markers;
    let last = points.len().saturating_sub(1);
    for (i, &p) in points.iter().enumerate() {
        let is_tip = i == last;
        let (radius, colour) = match (is_tip, markers.vertex_radius) {
            (true, _) => (markers.tip_radius, Colour::WHITE),
            (false, Some(r)) => (r, Colour::EMERALD_LIGHT),
            (false, None) => continue,
        };
        if let Some((width, ring)) = markers.ring {
            canvas.fill_ellipse(BBox::circle(p, radius + width), ring);
        }
        canvas.fill_ellipse(BBox::circle(p, radius), colour);
    }
}

fn draw_arrow(canvas: &mut Canvas, layout: &Layout) {
    let (Some(arrow), Some(tip)) = (layout.arrow, layout.graph_points().last().copied()) else {
        return;
    };
    let base = tip.offset(0.0, -arrow.gap);
    let top = base.offset(0.0, -arrow.length);
    canvas.line(base, top, Colour::WHITE, arrow.width);
    canvas.fill_polygon(
        &[
            top.offset(0.0, -arrow.head_rise),
            top.offset(-arrow.head_half_width, arrow.head_drop),
            top.offset(arrow.head_half_width, arrow.head_drop),
        ],
        Colour::WHITE,
    );
}

fn draw_monogram(canvas: &mut Canvas, layout: &Layout) {
    if let Some(m) = layout.monogram {
        canvas.polyline(&m.path(), Colour::WHITE, m.weight);
    }
}

/// Topmost tip of the arrow head, if the layout has one.
pub fn arrow_apex(layout: &Layout) -> Option<Point> {
    let arrow = layout.arrow?;
    let tip = *layout.graph_points().last()?;
    Some(tip.offset(0.0, -(arrow.gap + arrow.length + arrow.head_rise)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ColorType;

    #[test]
    fn test_dimensions_match_variant() {
        for variant in IconVariant::ALL {
            let img = render_variant(variant, variant.size());
            assert_eq!(img.width(), variant.size(), "{}", variant);
            assert_eq!(img.height(), variant.size(), "{}", variant);
        }
    }

    #[test]
    fn test_alpha_channel_matches_variant() {
        for variant in IconVariant::ALL {
            let img = render_variant(variant, variant.size());
            assert_eq!(img.color().has_alpha(), variant.has_alpha(), "{}", variant);
        }
        assert_eq!(create_icon(1024).color(), ColorType::Rgb8);
    }

    #[test]
    fn test_icon_track_and_background() {
        let img = create_icon(1024).to_rgb8();
        let layout = Layout::app_icon(1024);

        // Corner stays close to the dark background
        let corner = img.get_pixel(2, 2).0;
        assert!(corner[1] < 40, "corner {:?}", corner);

        // Left edge of the ring, mid-height: solid green under a faint highlight
        let ring = img.get_pixel((layout.cx - 340 + 20) as u32, (layout.cy + 20) as u32).0;
        assert_eq!(ring, Colour::EMERALD.to_rgb());

        // Centre of the track interior is cut back to the background
        let inside = img.get_pixel((layout.cx - 250) as u32, layout.cy as u32).0;
        assert!(inside[1] < 60, "inside {:?}", inside);
    }

    #[test]
    fn test_icon_tip_marker_is_white() {
        let img = create_icon(1024).to_rgb8();
        let tip = Layout::app_icon(1024).graph_points()[4];
        assert_eq!(img.get_pixel(tip.x as u32, tip.y as u32).0, [255, 255, 255]);
    }

    #[test]
    fn test_icon_arrow_head_drawn() {
        let layout = Layout::app_icon(1024);
        let apex = arrow_apex(&layout).unwrap();
        let img = create_icon(1024).to_rgb8();
        let below_apex = img.get_pixel(apex.x as u32, apex.y as u32 + 4).0;
        assert_eq!(below_apex, [255, 255, 255]);
    }

    #[test]
    fn test_adaptive_outside_is_transparent() {
        let img = create_adaptive_icon(1024).to_rgba8();
        assert_eq!(img.get_pixel(0, 0)[3], 0);
        assert_eq!(img.get_pixel(1023, 1023)[3], 0);
        // The track cut-out is see-through too
        let layout = Layout::adaptive_icon(1024);
        assert_eq!(img.get_pixel((layout.cx - 190) as u32, layout.cy as u32)[3], 0);
    }

    #[test]
    fn test_adaptive_track_opaque() {
        let layout = Layout::adaptive_icon(1024);
        let img = create_adaptive_icon(1024).to_rgba8();
        let p = img.get_pixel((layout.cx - 240 + 10) as u32, layout.cy as u32);
        assert_eq!(p.0, [45, 159, 45, 255]);
    }

    #[test]
    fn test_splash_monogram_stroke() {
        let layout = Layout::splash_icon(1024);
        let m = layout.monogram.unwrap();
        let img = create_splash_icon(1024).to_rgb8();
        // Left stem of the M
        let p = img.get_pixel(m.origin.x as u32, (m.origin.y + m.size / 2.0) as u32);
        assert_eq!(p.0, [255, 255, 255]);
    }

    #[test]
    fn test_splash_background_is_app_background() {
        let img = create_splash_icon(1024);
        assert!(!img.color().has_alpha());

        // White marks need a dark backdrop; every untouched pixel is BG_DARK
        let img = img.to_rgb8();
        for &(x, y) in &[(0, 0), (1023, 0), (0, 1023), (1023, 1023), (512, 20)] {
            assert_eq!(img.get_pixel(x, y).0, Colour::BG_DARK.to_rgb(), "({}, {})", x, y);
        }
    }

    #[test]
    fn test_favicon_opaque_with_alpha_channel() {
        let img = create_favicon(48).to_rgba8();
        assert!(img.pixels().all(|p| p[3] == 255));
        let tip = Layout::favicon(48).graph_points()[3];
        assert_eq!(img.get_pixel(tip.x as u32, tip.y as u32).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(create_favicon(48), create_favicon(48));
    }

    #[test]
    fn test_arrow_apex_absent_for_favicon() {
        assert!(arrow_apex(&Layout::favicon(48)).is_none());
    }
}
