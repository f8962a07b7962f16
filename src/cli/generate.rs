//! Generate command implementation.
//!
//! Draws all four icon assets from the built-in layout presets.

use std::path::PathBuf;

use clap::Args;

use crate::config::Config;
use crate::error::Result;
use crate::icons::render_variant;
use crate::output::{display_path, plural, Printer};
use crate::render::{ensure_dir, write_asset};
use crate::report::AssetReport;
use crate::types::IconVariant;

/// Draw the icon assets from geometric primitives
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Output directory (default: config `output`, else assets/images)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Print a JSON report of written assets to stdout
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: GenerateArgs, config: &Config, printer: &Printer) -> Result<Vec<AssetReport>> {
    let output = args.output.clone().unwrap_or_else(|| config.output.clone());
    ensure_dir(&output)?;

    let mut reports = Vec::new();
    for variant in IconVariant::ALL {
        let size = variant.size();
        printer.status(
            "Drawing",
            &format!("{} ({}x{})", variant.file_name(), size, size),
        );

        let image = render_variant(variant, size);
        let report = write_asset(&image, variant, &output)?;
        printer.verbose(
            "Wrote",
            &format!(
                "{} ({})",
                report.path,
                if report.alpha { "RGBA" } else { "RGB" }
            ),
        );
        reports.push(report);
    }

    printer.success(
        "Finished",
        &format!(
            "{} in {}",
            plural(reports.len(), "asset", "assets"),
            printer.cyan(&display_path(&output))
        ),
    );

    if args.json {
        super::emit_json(&reports)?;
    }

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn quiet() -> Printer {
        Printer::new().with_verbosity(true, false)
    }

    #[test]
    fn test_generate_writes_all_assets() {
        let dir = tempdir().unwrap();
        let args = GenerateArgs {
            output: Some(dir.path().join("images")),
            json: false,
        };

        let reports = run(args, &Config::default(), &quiet()).unwrap();

        assert_eq!(reports.len(), 4);
        for variant in IconVariant::ALL {
            let path = dir.path().join("images").join(variant.file_name());
            let img = image::open(&path).unwrap();
            assert_eq!((img.width(), img.height()), (variant.size(), variant.size()));
            assert_eq!(img.color().has_alpha(), variant.has_alpha(), "{}", variant);
        }
    }

    #[test]
    fn test_generate_uses_config_output() {
        let dir = tempdir().unwrap();
        let config = Config {
            output: dir.path().join("from-config"),
            ..Config::default()
        };
        let args = GenerateArgs {
            output: None,
            json: false,
        };

        run(args, &config, &quiet()).unwrap();
        assert!(dir.path().join("from-config").join("icon.png").exists());
    }
}
