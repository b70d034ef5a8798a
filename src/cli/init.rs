use clap::Parser;
use std::path::PathBuf;

use crate::config::PATH_ENV;

/// Arguments for the init command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Minimal bundle:\n    brandkit init \"Acme Corp\"\n\n\
                  With colors:\n    brandkit init \"Acme Corp\" --primary-color \"#0066CC\" --secondary-color \"#FF6600\"\n\n\
                  With fonts:\n    brandkit init \"Acme Corp\" --font-heading Montserrat --font-body \"Open Sans\"\n\n\
                  Regenerate an existing bundle:\n    brandkit init \"Acme Corp\" --force")]
pub struct InitArgs {
    /// Brand display name (e.g. "Acme Corp")
    pub name: String,

    /// Primary brand color (#RRGGBB)
    #[arg(long, value_name = "HEX")]
    pub primary_color: Option<String>,

    /// Secondary brand color (#RRGGBB)
    #[arg(long, value_name = "HEX")]
    pub secondary_color: Option<String>,

    /// Accent color (#RRGGBB)
    #[arg(long, value_name = "HEX")]
    pub accent_color: Option<String>,

    /// Heading font family
    #[arg(long, value_name = "FONT")]
    pub font_heading: Option<String>,

    /// Subheading font family
    #[arg(long, value_name = "FONT")]
    pub font_subheading: Option<String>,

    /// Body font family
    #[arg(long, value_name = "FONT")]
    pub font_body: Option<String>,

    /// Directory the bundle is created in [default: brand-skills]
    #[arg(long, value_name = "DIR", env = PATH_ENV)]
    pub path: Option<PathBuf>,

    /// Overwrite an existing bundle directory
    #[arg(long)]
    pub force: bool,
}
