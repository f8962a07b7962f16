//! Core domain types for iconkit.
//!
//! - `Colour` - RGBA colour values and the icon palette
//! - `IconVariant` - the four asset roles and their output formats
//! - `Point` - canvas coordinates for polylines and polygons

mod colour;
mod geometry;
mod variant;

pub use colour::Colour;
pub use geometry::{BBox, Point};
pub use variant::IconVariant;
