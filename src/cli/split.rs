//! Split command implementation.
//!
//! Takes the 2x2 icon sheet produced by an image generator, cleans up each
//! quadrant and writes the four assets, plus copies into a mirror directory.

use std::path::PathBuf;

use clap::Args;

use crate::config::Config;
use crate::error::{IconError, Result};
use crate::grid::{load_source, process_quadrant, split_quadrants, SplitOptions, Strategy};
use crate::output::{display_path, plural, Printer};
use crate::render::{ensure_dir, mirror_asset, write_asset};
use crate::report::AssetReport;

/// Split a generated 2x2 icon sheet into individual assets
#[derive(Args, Debug, Default)]
pub struct SplitArgs {
    /// Source image holding the four icons in a 2x2 grid
    pub input: Option<PathBuf>,

    /// Output directory (default: config `output`, else assets/images)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Directory that receives a copy of every asset (default: config `mirror`)
    #[arg(long)]
    pub mirror: Option<PathBuf>,

    /// Skip copying assets to the mirror directory
    #[arg(long, conflicts_with = "mirror")]
    pub no_mirror: bool,

    /// Background removal strategy for the transparent assets
    #[arg(long, value_enum)]
    pub strategy: Option<Strategy>,

    /// Height of the label band on the left quadrants
    #[arg(long)]
    pub header_rows: Option<u32>,

    /// Print a JSON report of written assets to stdout
    #[arg(long)]
    pub json: bool,
}

impl SplitArgs {
    fn options(&self, config: &Config) -> SplitOptions {
        let base = config.split_options();
        SplitOptions {
            header_rows: self.header_rows.unwrap_or(base.header_rows),
            strategy: self.strategy.unwrap_or(base.strategy),
        }
    }

    fn mirror_dir(&self, config: &Config) -> Option<PathBuf> {
        if self.no_mirror {
            None
        } else {
            self.mirror.clone().or_else(|| config.mirror.clone())
        }
    }
}

pub fn run(args: SplitArgs, config: &Config, printer: &Printer) -> Result<Vec<AssetReport>> {
    let Some(input) = args.input.as_ref() else {
        printer.error("Usage", "iconkit split <SOURCE>");
        return Err(IconError::Usage {
            message: "Missing source image path".to_string(),
            help: Some("Example: iconkit split scripts/source_icon.png".to_string()),
        });
    };

    let options = args.options(config);
    let output = args.output.clone().unwrap_or_else(|| config.output.clone());
    let mirror = args.mirror_dir(config);

    if input.extension().and_then(|e| e.to_str()) != Some("png") {
        printer.warning(
            "Warning",
            &format!("{} does not have a .png extension", display_path(input)),
        );
    }

    printer.status("Loading", &display_path(input));
    let source = load_source(input)?;
    printer.info(
        "Analyzed",
        &format!("{}x{} sheet", source.width(), source.height()),
    );
    printer.verbose("Strategy", &options.strategy.to_string());

    ensure_dir(&output)?;
    if let Some(dir) = &mirror {
        ensure_dir(dir)?;
    }

    let mut reports = Vec::new();
    for (quadrant, cell) in split_quadrants(&source) {
        let variant = quadrant.variant();
        printer.status(
            "Splitting",
            &format!("{} ({}x{})", variant, cell.width(), cell.height()),
        );

        let processed = process_quadrant(quadrant, &cell, options);
        if processed.cleaned > 0 {
            printer.verbose(
                "Masking",
                &format!("{} in {}", plural(processed.cleaned, "pixel", "pixels"), variant),
            );
        }

        let mut report = write_asset(&processed.image, variant, &output)?;
        printer.status(
            "Writing",
            &format!(
                "{} ({}x{}, {})",
                display_path(&output.join(&report.file)),
                report.width,
                report.height,
                if report.alpha { "RGBA" } else { "RGB" }
            ),
        );

        if let Some(dir) = &mirror {
            match mirror_asset(&output.join(&report.file), dir)? {
                Some(copy) => {
                    printer.verbose("Mirroring", &display_path(&copy));
                    report.mirrors.push(copy.display().to_string());
                }
                None => printer.warning(
                    "Skipping",
                    &format!("mirror of {}: same directory as output", report.file),
                ),
            }
        }

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
