//! Validate command: check a bundle and report

use tracing::debug;

use crate::cli::ValidateArgs;
use crate::config::ProjectConfig;
use crate::error::{Result, bundle};
use crate::ui;
use crate::validator::{ValidationReport, Validator};

/// Run validate command
///
/// Prints the report, then fails when the verdict for the chosen
/// strictness is negative.
pub fn run(config: &ProjectConfig, args: ValidateArgs) -> Result<()> {
    let bundle_path = config.bundle_path(args.path).join(&args.bundle);
    debug!(path = %bundle_path.display(), strict = args.strict, "Validating bundle");

    if !args.json {
        println!("Validating brand skill at: {}", bundle_path.display());
    }

    let report = Validator::new().validate(&bundle_path);
    print_report(&report, args.json)?;

    if report.is_valid(args.strict) {
        Ok(())
    } else {
        Err(bundle::invalid(args.bundle, args.strict))
    }
}

fn print_report(report: &ValidationReport, json: bool) -> Result<()> {
    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", ui::render_report(report));
    }
    Ok(())
}
