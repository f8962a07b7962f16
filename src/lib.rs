//! iconkit - App icon asset pipeline
//!
//! Draws a mobile app's icon set (app icon, adaptive icon, splash icon,
//! favicon) from geometric primitives, and splits generated 2x2 icon sheets
//! into cleaned-up individual assets.

pub mod cli;
pub mod config;
pub mod draw;
pub mod error;
pub mod grid;
pub mod icons;
pub mod output;
pub mod render;
pub mod report;
pub mod types;

pub use config::Config;
pub use draw::{flatten, Canvas};
pub use error::{IconError, Result};
pub use grid::{
    make_background_transparent, process_grid, remove_all_checker, BorderBands, Quadrant,
    SplitOptions, Strategy,
};
pub use icons::{create_adaptive_icon, create_favicon, create_icon, create_splash_icon};
pub use render::{write_asset, write_png};
pub use report::AssetReport;
pub use types::{Colour, IconVariant};
