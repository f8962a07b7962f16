//! Rendering output for iconkit.
//!
//! Writes finished assets as PNG files and mirrors them to secondary
//! directories.

mod png;

pub use png::{ensure_dir, mirror_asset, write_asset, write_png};
