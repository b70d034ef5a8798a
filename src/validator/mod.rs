//! Bundle validator
//!
//! Runs every rule over a bundle directory in a single pass and returns a
//! [`ValidationReport`]. Rules never abort the pass: each one records its
//! findings in the shared [`ReportBuilder`] so all problems surface together.
//! The only short-circuit is a missing bundle directory.

pub mod assets;
pub mod probe;
pub mod report;
pub mod rules;

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::fs as fs_error;
use crate::layout;

pub use probe::{ImageProbe, ProbeOutcome, UnavailableProbe, default_probe};
pub use report::{ReportBuilder, Severity, ValidationReport};

/// Bundle validator with an injectable image probe.
pub struct Validator {
    probe: Box<dyn ImageProbe>,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// Validator using the best image probe this build supports.
    pub fn new() -> Self {
        Self {
            probe: default_probe(),
        }
    }

    pub fn with_probe(probe: impl ImageProbe + 'static) -> Self {
        Self {
            probe: Box::new(probe),
        }
    }

    /// Validate the bundle rooted at `bundle_path`.
    ///
    /// Strictness only affects [`ValidationReport::is_valid`], so one report
    /// serves both verdicts.
    pub fn validate(&self, bundle_path: &Path) -> ValidationReport {
        let mut report = ReportBuilder::new();

        if !bundle_path.is_dir() {
            report.error(format!(
                "Bundle directory not found: {}",
                bundle_path.display()
            ));
            return report.finish();
        }

        debug!(path = %bundle_path.display(), "Checking bundle structure");
        assets::check_structure(bundle_path, &mut report);
        check_descriptor_file(bundle_path, &mut report);

        debug!("Checking logo files");
        assets::check_logos(bundle_path, self.probe.as_ref(), &mut report);

        debug!("Checking reference documentation");
        assets::check_references(bundle_path, &mut report);
        assets::check_templates(bundle_path, &mut report);
        assets::check_scripts(bundle_path, &mut report);

        let report = report.finish();
        debug!(
            errors = report.errors().len(),
            warnings = report.warnings().len(),
            "Validation finished"
        );
        report
    }
}

/// Validate with the default image probe.
pub fn validate(bundle_path: &Path) -> ValidationReport {
    Validator::new().validate(bundle_path)
}

fn check_descriptor_file(bundle_path: &Path, report: &mut ReportBuilder) {
    let descriptor = bundle_path.join(layout::DESCRIPTOR);
    if !descriptor.is_file() {
        report.error(format!("Required file missing: {}", layout::DESCRIPTOR));
        return;
    }
    report.info(format!("Found: {}", layout::DESCRIPTOR));

    let content = match fs::read_to_string(&descriptor) {
        Ok(content) => content,
        Err(e) => {
            report.error(fs_error::read_failed(&descriptor, e).to_string());
            return;
        }
    };

    let scanned = match rules::check_descriptor(&content, report) {
        Some(sections) => sections.body,
        None => content.as_str(),
    };
    rules::check_colors(scanned, report);
}
