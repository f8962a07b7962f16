//! Project configuration (iconkit.yaml) parsing.
//!
//! The config file is optional. It sets where assets are written and how the
//! grid splitter cleans up backgrounds; command-line flags override it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{IconError, Result};
use crate::grid::{SplitOptions, Strategy};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILENAME: &str = "iconkit.yaml";

/// Project configuration loaded from iconkit.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory the assets are written to.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Directory that receives a copy of every split asset (`null` to disable).
    #[serde(default = "default_mirror")]
    pub mirror: Option<PathBuf>,

    /// Background removal strategy for the transparent assets.
    #[serde(default)]
    pub strategy: Strategy,

    /// Height of the generator's label band on the left quadrants.
    #[serde(default = "default_header_rows")]
    pub header_rows: u32,
}

fn default_output() -> PathBuf {
    PathBuf::from("assets/images")
}

fn default_mirror() -> Option<PathBuf> {
    Some(PathBuf::from("assets"))
}

fn default_header_rows() -> u32 {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: default_output(),
            mirror: default_mirror(),
            strategy: Strategy::default(),
            header_rows: default_header_rows(),
        }
    }
}

impl Config {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| IconError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse config from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| IconError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Load an explicit config file, or `iconkit.yaml` in `dir` if present,
    /// falling back to defaults.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Splitter settings derived from this config.
    pub fn split_options(&self) -> SplitOptions {
        SplitOptions {
            header_rows: self.header_rows,
            strategy: self.strategy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output, PathBuf::from("assets/images"));
        assert_eq!(config.mirror, Some(PathBuf::from("assets")));
        assert_eq!(config.strategy, Strategy::Green);
        assert_eq!(config.header_rows, 100);
    }

    #[test]
    fn test_parse_minimal_config() {
        let config = Config::parse("output: build/icons").unwrap();
        assert_eq!(config.output, PathBuf::from("build/icons"));
        assert_eq!(config.mirror, Some(PathBuf::from("assets")));
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
output: dist/images
mirror: public
strategy: edge-flood
header_rows: 80
"#;
        let config = Config::parse(yaml).unwrap();
        assert_eq!(
            config,
            Config {
                output: PathBuf::from("dist/images"),
                mirror: Some(PathBuf::from("public")),
                strategy: Strategy::EdgeFlood,
                header_rows: 80,
            }
        );
    }

    #[test]
    fn test_parse_mirror_disabled() {
        let config = Config::parse("mirror: null").unwrap();
        assert!(config.mirror.is_none());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_invalid_strategy() {
        let err = Config::parse("strategy: magic").unwrap_err();
        assert!(matches!(err, IconError::Config { .. }));
    }

    #[test]
    fn test_split_options() {
        let config = Config::parse("strategy: edge-flood\nheader_rows: 64").unwrap();
        let options = config.split_options();
        assert_eq!(options.strategy, Strategy::EdgeFlood);
        assert_eq!(options.header_rows, 64);
    }

    #[test]
    fn test_resolve_discovers_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "output: out").unwrap();
        let config = Config::resolve(None, dir.path()).unwrap();
        assert_eq!(config.output, PathBuf::from("out"));
    }

    #[test]
    fn test_resolve_without_file() {
        let dir = tempdir().unwrap();
        assert_eq!(Config::resolve(None, dir.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_resolve_explicit_missing() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        assert!(Config::resolve(Some(&missing), dir.path()).is_err());
    }
}
