//! Filesystem rules: directory layout, logos, references, templates, scripts.

use std::fs;
use std::path::Path;

use super::probe::{ImageProbe, ProbeOutcome};
use super::report::ReportBuilder;
use crate::layout;

pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "svg", "gif", "webp"];
const RASTER_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

const MIN_IMAGE_BYTES: u64 = 1024;
const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;
const MIN_LOGO_HEIGHT: u32 = 50;
const RECOMMENDED_LOGO_HEIGHT: u32 = 100;
const LARGE_DIMENSION: u32 = 3000;
const MAX_ASPECT_RATIO: f64 = 5.0;
const MIN_ASPECT_RATIO: f64 = 0.2;

/// Reference documents shorter than this are flagged as stubs.
pub const MIN_REFERENCE_BYTES: u64 = 100;

/// A logo the validator looks for in `assets/`.
#[derive(Debug, Clone, Copy)]
pub struct LogoSpec {
    pub file_name: &'static str,
    pub required: bool,
    pub description: &'static str,
}

pub const LOGOS: [LogoSpec; 4] = [
    LogoSpec {
        file_name: layout::PRIMARY_LOGO,
        required: true,
        description: "Primary logo",
    },
    LogoSpec {
        file_name: layout::VECTOR_LOGO,
        required: false,
        description: "Vector logo",
    },
    LogoSpec {
        file_name: layout::REVERSED_LOGO,
        required: false,
        description: "Logo for dark backgrounds",
    },
    LogoSpec {
        file_name: layout::HORIZONTAL_LOGO,
        required: false,
        description: "Horizontal logo",
    },
];

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default()
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// `assets/` and `references/` are required; `scripts/` is optional.
pub fn check_structure(bundle: &Path, report: &mut ReportBuilder) {
    for dir_name in [layout::ASSETS_DIR, layout::REFERENCES_DIR] {
        let dir = bundle.join(dir_name);
        if !dir.exists() {
            report.error(format!("Required directory missing: {dir_name}/"));
        } else if !dir.is_dir() {
            report.error(format!("{dir_name} exists but is not a directory"));
        } else {
            report.info(format!("Found directory: {dir_name}/"));
        }
    }

    if bundle.join(layout::SCRIPTS_DIR).is_dir() {
        report.info(format!("Found optional directory: {}/", layout::SCRIPTS_DIR));
    }
}

/// Classify each expected logo as real, placeholder, or absent.
pub fn check_logos(bundle: &Path, probe: &dyn ImageProbe, report: &mut ReportBuilder) {
    let assets = bundle.join(layout::ASSETS_DIR);
    let mut real_logos = 0;

    for logo in LOGOS {
        let path = assets.join(logo.file_name);
        let placeholder = assets.join(layout::placeholder_name(logo.file_name));

        if path.is_file() {
            real_logos += 1;
            check_image(&path, probe, report);
        } else if placeholder.exists() {
            if logo.required {
                report.error(format!(
                    "{} is still a placeholder: {} - replace with actual image",
                    logo.description,
                    layout::placeholder_name(logo.file_name)
                ));
            } else {
                report.warning(format!(
                    "Logo placeholder found: {} - replace with actual image",
                    layout::placeholder_name(logo.file_name)
                ));
            }
        } else if logo.required {
            report.error(format!("Required logo missing: {}", logo.file_name));
        } else {
            report.info(format!("Optional logo not provided: {}", logo.file_name));
        }
    }

    match real_logos {
        0 => report.error(format!("No logo files found in {}/", layout::ASSETS_DIR)),
        1 => report.suggestion("Consider adding logo variants (SVG, white version, horizontal)"),
        _ => {}
    }

    if !assets.join(layout::VECTOR_LOGO).is_file() {
        report.suggestion(format!(
            "Add SVG logo format for better scaling ({})",
            layout::VECTOR_LOGO
        ));
    }
}

/// Format, size and dimension checks for one real image file.
pub fn check_image(path: &Path, probe: &dyn ImageProbe, report: &mut ReportBuilder) {
    let name = file_label(path);
    let ext = extension(path);

    if !SUPPORTED_IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        report.warning(format!(
            "{name}: Unsupported format '.{ext}'. Recommended: PNG or SVG"
        ));
    }

    match fs::metadata(path) {
        Ok(metadata) => {
            let size = metadata.len();
            if size < MIN_IMAGE_BYTES {
                report.warning(format!(
                    "{name}: Very small file size ({size} bytes) - may be placeholder"
                ));
            } else if size > MAX_IMAGE_BYTES {
                report.warning(format!(
                    "{name}: Large file size ({:.1}MB) - consider optimizing",
                    size as f64 / 1024.0 / 1024.0
                ));
            }
        }
        Err(e) => {
            report.error(format!("{name}: Failed to read file metadata - {e}"));
            return;
        }
    }

    if !RASTER_EXTENSIONS.contains(&ext.as_str()) {
        return;
    }

    match probe.probe(path) {
        ProbeOutcome::Unavailable => {
            report.warning(format!(
                "{name}: Image dimension checks skipped - no image decoder available"
            ));
            report.suggestion("Build brandkit with the 'imaging' feature to enable dimension checks");
        }
        ProbeOutcome::Unreadable(reason) => {
            report.error(format!("{name}: Failed to read image - {reason}"));
        }
        ProbeOutcome::Measured { width, height } => {
            check_dimensions(&name, width, height, report);
        }
    }
}

fn check_dimensions(name: &str, width: u32, height: u32, report: &mut ReportBuilder) {
    report.info(format!("{name}: {width}x{height}px"));

    if height < MIN_LOGO_HEIGHT {
        report.error(format!(
            "{name}: Height {height}px is below minimum {MIN_LOGO_HEIGHT}px"
        ));
    } else if height < RECOMMENDED_LOGO_HEIGHT {
        report.warning(format!(
            "{name}: Height {height}px is low. Recommended: {RECOMMENDED_LOGO_HEIGHT}px+"
        ));
    }

    if width > LARGE_DIMENSION || height > LARGE_DIMENSION {
        report.suggestion(format!(
            "{name}: Very large dimensions ({width}x{height}). Consider creating optimized version"
        ));
    }

    if height > 0 {
        let aspect_ratio = f64::from(width) / f64::from(height);
        if !(MIN_ASPECT_RATIO..=MAX_ASPECT_RATIO).contains(&aspect_ratio) {
            report.warning(format!(
                "{name}: Unusual aspect ratio {aspect_ratio:.2}:1"
            ));
        }
    }
}

/// Reference documents are optional but should not be stubs.
pub fn check_references(bundle: &Path, report: &mut ReportBuilder) {
    let references = bundle.join(layout::REFERENCES_DIR);

    for doc in layout::REFERENCE_DOCS {
        let path = references.join(doc);
        match fs::metadata(&path) {
            Ok(metadata) if metadata.is_file() => {
                report.info(format!("Found: {}/{doc}", layout::REFERENCES_DIR));
                if metadata.len() < MIN_REFERENCE_BYTES {
                    report.warning(format!("{doc} is very small - may need content"));
                }
            }
            _ => report.info(format!("Optional reference not provided: {doc}")),
        }
    }
}

pub fn check_templates(bundle: &Path, report: &mut ReportBuilder) {
    let templates = bundle.join(layout::ASSETS_DIR).join(layout::TEMPLATES_DIR);
    if !templates.is_dir() {
        report.suggestion(format!(
            "Consider adding pre-branded templates in {}/{}/",
            layout::ASSETS_DIR,
            layout::TEMPLATES_DIR
        ));
        return;
    }

    match fs::read_dir(&templates) {
        Ok(entries) => {
            let count = entries.filter_map(|e| e.ok()).count();
            if count == 0 {
                report.warning(format!(
                    "{}/ directory exists but is empty",
                    layout::TEMPLATES_DIR
                ));
            } else {
                report.info(format!("Found {count} template file(s)"));
            }
        }
        Err(e) => report.warning(format!("Could not read {}/: {e}", layout::TEMPLATES_DIR)),
    }
}

/// Files directly under `scripts/` should carry an executable bit.
pub fn check_scripts(bundle: &Path, report: &mut ReportBuilder) {
    let scripts_dir = bundle.join(layout::SCRIPTS_DIR);
    let Ok(entries) = fs::read_dir(&scripts_dir) else {
        return;
    };

    let mut scripts: Vec<_> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .collect();
    scripts.sort();

    if scripts.is_empty() {
        return;
    }
    report.info(format!("Found {} script file(s)", scripts.len()));

    for script in scripts {
        if !is_executable(&script) {
            report.warning(format!("Script is not executable: {}", file_label(&script)));
            report.suggestion(format!("Make executable: chmod +x {}", script.display()));
        }
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    fs::metadata(path)
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    true
}
