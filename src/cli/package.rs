use clap::Parser;
use std::path::PathBuf;

use crate::config::{OUTPUT_ENV, PATH_ENV};

/// Arguments for the package command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Package one bundle:\n    brandkit package acme-corp\n\n\
                  Package every bundle:\n    brandkit package --all\n\n\
                  Custom output directory:\n    brandkit package acme-corp --output build\n\n\
                  Replace the exclusion patterns:\n    brandkit package acme-corp --exclude .placeholder drafts")]
pub struct PackageArgs {
    /// Bundle directory name under --path
    pub bundle: Option<String>,

    /// Package every bundle under --path
    #[arg(long, conflicts_with = "bundle")]
    pub all: bool,

    /// Directory holding bundles [default: brand-skills]
    #[arg(long, value_name = "DIR", env = PATH_ENV)]
    pub path: Option<PathBuf>,

    /// Output directory for .skill archives [default: dist]
    #[arg(long, value_name = "DIR", env = OUTPUT_ENV)]
    pub output: Option<PathBuf>,

    /// Substring patterns to exclude, replacing the defaults
    #[arg(long, value_name = "PATTERN", num_args = 0..)]
    pub exclude: Option<Vec<String>>,
}
