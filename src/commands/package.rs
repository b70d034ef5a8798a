//! Package command: build .skill archives

use console::Style;

use crate::cli::PackageArgs;
use crate::config::ProjectConfig;
use crate::error::{BrandkitError, Result, bundle};
use crate::packager::Packager;
use crate::ui;

/// Run package command
pub fn run(config: &ProjectConfig, args: PackageArgs) -> Result<()> {
    let base_path = config.bundle_path(args.path);
    let packager = Packager::new(config.output_dir(args.output), config.exclusions(args.exclude))
        .with_progress(console::Term::stderr().is_term());

    if args.all {
        let summary = packager.package_all(&base_path)?;
        println!("Found {} skill(s) to package\n", summary.total());
        for archive in &summary.packaged {
            println!(
                "{}",
                ui::render_packaged(&base_path.join(&archive.bundle_name), archive)
            );
        }
        print!("{}", ui::render_batch_summary(&summary));

        return if summary.all_succeeded() {
            Ok(())
        } else {
            Err(bundle::packaging_failed(
                summary.failed.len(),
                summary.total(),
            ))
        };
    }

    let name = args.bundle.ok_or_else(bundle::not_specified)?;
    let bundle_path = base_path.join(&name);
    if !bundle_path.is_dir() {
        return Err(bundle::not_found(bundle_path.display().to_string()));
    }

    match packager.package(&bundle_path) {
        Ok(archive) => {
            print!("{}", ui::render_packaged(&bundle_path, &archive));
            Ok(())
        }
        Err(BrandkitError::ValidationFailed { name, errors }) => {
            eprintln!("{}", Style::new().red().apply_to("✗ Validation failed:"));
            for error in &errors {
                eprintln!("   - {error}");
            }
            Err(bundle::validation_failed(name, errors))
        }
        Err(e) => Err(e),
    }
}
