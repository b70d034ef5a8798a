//! CLI definitions using clap derive API
//!
//! One submodule per command's argument types:
//! - init: Bundle generation arguments
//! - validate: Validation arguments
//! - package: Packaging arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod init;
pub mod package;
pub mod validate;

pub use completions::CompletionsArgs;
pub use init::InitArgs;
pub use package::PackageArgs;
pub use validate::ValidateArgs;

/// brandkit - brand guideline skill bundles
///
/// Scaffold, validate and package brand guideline bundles.
#[derive(Parser, Debug)]
#[command(
    name = "brandkit",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Scaffold, validate and package brand guideline skill bundles",
    long_about = "brandkit generates brand guideline bundles (SKILL.md, reference docs, \
                  logo placeholders, example script), checks them against the bundle rules \
                  and packages them into distributable .skill archives.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  brandkit init \"Acme Corp\" --primary-color \"#0066CC\"  \x1b[90m# Scaffold a bundle\x1b[0m\n   \
                  brandkit validate acme-corp                        \x1b[90m# Check a bundle\x1b[0m\n   \
                  brandkit validate acme-corp --strict               \x1b[90m# Treat warnings as failures\x1b[0m\n   \
                  brandkit package acme-corp                         \x1b[90m# Build dist/acme-corp.skill\x1b[0m\n   \
                  brandkit package --all                             \x1b[90m# Package every bundle\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Configuration file (defaults to ./brandkit.yaml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a new brand bundle
    Init(InitArgs),

    /// Validate a brand bundle
    Validate(ValidateArgs),

    /// Package bundles into .skill archives
    Package(PackageArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
