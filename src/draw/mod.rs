//! Drawing module for iconkit.
//!
//! A small raster canvas with the primitives the icon artwork is built from
//! (ellipses, strokes, polygons) plus integer alpha compositing.

mod canvas;
mod composite;

pub use canvas::Canvas;
pub use composite::{flatten, over};
