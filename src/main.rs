//! brandkit - brand guideline skill bundles
//!
//! Scaffolds, validates and packages brand guideline bundles.

use clap::Parser;

use brandkit::cli::{Cli, Commands};
use brandkit::commands;
use brandkit::config::ProjectConfig;
use brandkit::error::Result;
use brandkit::logging;

fn run(cli: Cli) -> Result<()> {
    // Completions and version never read configuration
    let load_config = || -> Result<ProjectConfig> {
        let cwd = std::env::current_dir()?;
        ProjectConfig::load(cli.config.as_deref(), &cwd)
    };

    match cli.command {
        Commands::Init(args) => commands::init::run(&load_config()?, args),
        Commands::Validate(args) => commands::validate::run(&load_config()?, args),
        Commands::Package(args) => commands::package::run(&load_config()?, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
