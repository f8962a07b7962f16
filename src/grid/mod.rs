//! Grid splitting for generated icon sheets.
//!
//! An image generator delivers all four icons as one 2x2 sheet drawn over a
//! checkerboard "transparent" background, with labels and guide lines. This
//! module crops the sheet, cleans each cell, and resizes it to its asset size.

mod mask;
mod process;
mod quadrant;

pub use mask::{
    edge_flood_mask, green_background_mask, is_checker_gray, is_edge_green, is_protected,
    is_strong_green, make_background_transparent, remove_all_checker, whiten_checker,
    BorderBands, Mask, Strategy,
};
pub use process::{
    load_source, process_grid, process_quadrant, ProcessedIcon, SplitOptions, FAVICON_WORK_SIZE,
    FULL_SIZE,
};
pub use quadrant::{split_quadrants, Quadrant, Region};
