//! Machine-readable summary of written assets.

use std::path::Path;

use image::DynamicImage;
use serde::Serialize;

use crate::error::{IconError, Result};
use crate::types::IconVariant;

/// One written asset, as reported by `--json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetReport {
    pub file: String,
    pub path: String,
    pub width: u32,
    pub height: u32,
    pub alpha: bool,
    /// Copies placed in mirror directories.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mirrors: Vec<String>,
}

impl AssetReport {
    pub fn new(variant: IconVariant, path: &Path, image: &DynamicImage) -> Self {
        Self {
            file: variant.file_name().to_string(),
            path: path.display().to_string(),
            width: image.width(),
            height: image.height(),
            alpha: image.color().has_alpha(),
            mirrors: Vec::new(),
        }
    }
}

/// Serialize reports as a pretty JSON array.
pub fn to_json(reports: &[AssetReport]) -> Result<String> {
    serde_json::to_string_pretty(reports).map_err(|e| IconError::Config {
        message: format!("Failed to serialize report: {}", e),
        help: None,
    })
}
