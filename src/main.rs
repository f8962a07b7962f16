use clap::Parser;
use miette::Result;
use iconkit::cli::{load_config, Cli, Commands};
use iconkit::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new().with_verbosity(cli.quiet, cli.verbose);

    match cli.command {
        Commands::Generate(args) => {
            let config = load_config(cli.config.as_deref())?;
            iconkit::cli::generate::run(args, &config, &printer)?;
        }
        Commands::Split(args) => {
            let config = load_config(cli.config.as_deref())?;
            iconkit::cli::split::run(args, &config, &printer)?;
        }
        Commands::Completions(args) => iconkit::cli::completions::run(args)?,
    }

    Ok(())
}
