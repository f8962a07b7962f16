//! Procedural icon drawing.
//!
//! Builds the app icon, adaptive icon, splash artwork and favicon from
//! geometric primitives using fixed layout presets.

mod artwork;
mod layout;

pub use artwork::{
    arrow_apex, create_adaptive_icon, create_favicon, create_icon, create_splash_icon,
    render_variant,
};
pub use layout::{safe_margin, Arrow, Layout, Markers, Monogram, Track};
