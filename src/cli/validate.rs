use clap::Parser;
use std::path::PathBuf;

use crate::config::PATH_ENV;

/// Arguments for the validate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Validate a bundle:\n    brandkit validate acme-corp\n\n\
                  Fail on warnings too:\n    brandkit validate acme-corp --strict\n\n\
                  Machine-readable report:\n    brandkit validate acme-corp --json")]
pub struct ValidateArgs {
    /// Bundle directory name under --path
    pub bundle: String,

    /// Directory holding bundles [default: brand-skills]
    #[arg(long, value_name = "DIR", env = PATH_ENV)]
    pub path: Option<PathBuf>,

    /// Treat warnings as failures
    #[arg(long)]
    pub strict: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}
