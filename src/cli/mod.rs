pub mod completions;
pub mod generate;
pub mod split;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;
use crate::report::{to_json, AssetReport};

/// iconkit - App icon drawing and icon sheet processing
#[derive(Parser, Debug)]
#[command(name = "iconkit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: iconkit.yaml in the current directory, if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Only print warnings and errors
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Print extra detail (mask statistics, file paths)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draw the app icon, adaptive icon, splash icon and favicon
    Generate(generate::GenerateArgs),

    /// Split a generated 2x2 icon sheet into individual assets
    Split(split::SplitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Resolve the config for this invocation.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    Config::resolve(explicit, Path::new("."))
}

/// Print the JSON report to stdout.
pub(crate) fn emit_json(reports: &[AssetReport]) -> Result<()> {
    println!("{}", to_json(reports)?);
    Ok(())
}
