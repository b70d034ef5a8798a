//! Bundle packager
//!
//! Validates a bundle, then writes every non-excluded file into a
//! deflate-compressed `<bundle>.skill` archive. Entry names are relative to
//! the bundle's parent directory, so each entry starts with the bundle name.

pub mod exclude;

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};
use walkdir::WalkDir;
use zip::CompressionMethod;
use zip::write::{FileOptions, ZipWriter};

use crate::error::{BrandkitError, Result, bundle, fs as fs_error};
use crate::layout;
use crate::validator::Validator;

pub use exclude::{DEFAULT_EXCLUDES, ExclusionPatternSet};

/// A successfully written archive.
#[derive(Debug, Clone)]
pub struct PackagedArchive {
    pub bundle_name: String,
    pub archive_path: PathBuf,
    /// Entry names in the order written
    pub entries: Vec<String>,
    /// Relative paths skipped by exclusion patterns
    pub skipped: Vec<String>,
    /// Archive size on disk
    pub bytes: u64,
}

impl PackagedArchive {
    pub fn file_count(&self) -> usize {
        self.entries.len()
    }
}

/// Result of packaging several bundles.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub packaged: Vec<PackagedArchive>,
    pub failed: Vec<(String, BrandkitError)>,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.packaged.len() + self.failed.len()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Packages bundles into `output_dir`.
pub struct Packager {
    validator: Validator,
    output_dir: PathBuf,
    exclusions: ExclusionPatternSet,
    show_progress: bool,
}

impl Packager {
    pub fn new(output_dir: impl Into<PathBuf>, exclusions: ExclusionPatternSet) -> Self {
        Self {
            validator: Validator::new(),
            output_dir: output_dir.into(),
            exclusions,
            show_progress: false,
        }
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = validator;
        self
    }

    /// Show a spinner while files are compressed.
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Archive path a bundle would be written to.
    pub fn archive_path_for(&self, bundle_path: &Path) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", bundle_name(bundle_path), layout::ARCHIVE_EXTENSION))
    }

    /// Package one bundle.
    ///
    /// Any validation error aborts before the archive is created. Warnings do
    /// not block.
    pub fn package(&self, bundle_path: &Path) -> Result<PackagedArchive> {
        let name = bundle_name(bundle_path);
        let report = self.validator.validate(bundle_path);
        if report.has_errors() {
            return Err(bundle::validation_failed(name, report.errors().to_vec()));
        }

        let files = self.collect_files(bundle_path)?;

        fs::create_dir_all(&self.output_dir)
            .map_err(|e| fs_error::write_failed(&self.output_dir, e))?;
        let archive_path = self.archive_path_for(bundle_path);

        let entries = self
            .write_archive(&archive_path, &files.included)
            .map_err(|e| fs_error::archive_failed(&archive_path, e))?;

        let bytes = fs::metadata(&archive_path)
            .map(|m| m.len())
            .unwrap_or_default();

        info!(
            bundle = %name,
            path = %archive_path.display(),
            files = entries.len(),
            bytes,
            "Archive written"
        );

        Ok(PackagedArchive {
            bundle_name: name,
            archive_path,
            entries,
            skipped: files.skipped,
            bytes,
        })
    }

    /// Package every bundle under `base_path`, one at a time.
    ///
    /// A failure is recorded and the remaining bundles are still attempted.
    pub fn package_all(&self, base_path: &Path) -> Result<BatchSummary> {
        let bundles = discover_bundles(base_path)?;
        if bundles.is_empty() {
            return Err(bundle::none_found(base_path.display().to_string()));
        }

        let mut summary = BatchSummary::default();
        for bundle_path in bundles {
            match self.package(&bundle_path) {
                Ok(archive) => summary.packaged.push(archive),
                Err(e) => summary.failed.push((bundle_name(&bundle_path), e)),
            }
        }
        Ok(summary)
    }

    fn collect_files(&self, bundle_path: &Path) -> Result<CollectedFiles> {
        let root = bundle_path.parent().unwrap_or_else(|| Path::new(""));
        let mut collected = CollectedFiles::default();

        let walker = WalkDir::new(bundle_path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0
                    || !entry.file_type().is_dir()
                    || !self
                        .exclusions
                        .is_excluded(&entry.file_name().to_string_lossy())
            });

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(root)
                .unwrap_or_else(|_| entry.path());
            let entry_name = archive_entry_name(relative);

            if let Some(pattern) = self.exclusions.matching(&entry_name) {
                debug!(path = %entry_name, pattern, "Skipping excluded file");
                collected.skipped.push(entry_name);
                continue;
            }

            collected.included.push((entry.path().to_path_buf(), entry_name));
        }

        Ok(collected)
    }

    fn write_archive(&self, archive_path: &Path, files: &[(PathBuf, String)]) -> io::Result<Vec<String>> {
        let spinner = self.spinner(files.len() as u64);

        let file = File::create(archive_path)?;
        let mut zip = ZipWriter::new(file);
        let mut entries = Vec::with_capacity(files.len());

        for (source, entry_name) in files {
            let options: FileOptions<'_, ()> = FileOptions::default()
                .compression_method(CompressionMethod::Deflated)
                .unix_permissions(entry_permissions(source));

            zip.start_file(entry_name.as_str(), options)?;
            let mut reader = File::open(source)?;
            io::copy(&mut reader, &mut zip)?;

            debug!(entry = %entry_name, "Added file to archive");
            spinner.set_message(entry_name.clone());
            spinner.inc(1);
            entries.push(entry_name.clone());
        }

        zip.finish()?;
        spinner.finish_and_clear();
        Ok(entries)
    }

    fn spinner(&self, total: u64) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(total);
        if let Ok(style) = ProgressStyle::default_bar().template("  [{bar:30.green/yellow}] {pos}/{len} {msg}") {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb
    }
}

#[derive(Debug, Default)]
struct CollectedFiles {
    /// (source path, entry name)
    included: Vec<(PathBuf, String)>,
    skipped: Vec<String>,
}

/// Directory name of a bundle, used for the archive file name.
pub fn bundle_name(bundle_path: &Path) -> String {
    bundle_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| bundle_path.display().to_string())
}

/// Immediate subdirectories of `base_path` that hold a descriptor, sorted.
pub fn discover_bundles(base_path: &Path) -> Result<Vec<PathBuf>> {
    if !base_path.is_dir() {
        return Err(bundle::not_found(base_path.display().to_string()));
    }

    let mut bundles: Vec<PathBuf> = fs::read_dir(base_path)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_dir() && p.join(layout::DESCRIPTOR).is_file())
        .collect();
    bundles.sort();
    Ok(bundles)
}

/// Archive entry names always use `/` separators.
fn archive_entry_name(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(unix)]
fn entry_permissions(path: &Path) -> u32 {
    use std::os::unix::fs::PermissionsExt;

    match fs::metadata(path) {
        Ok(m) if m.permissions().mode() & 0o111 != 0 => 0o755,
        _ => 0o644,
    }
}

#[cfg(not(unix))]
fn entry_permissions(_path: &Path) -> u32 {
    0o644
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand::BrandParameters;
    use crate::color::HexColor;
    use crate::generator;
    use crate::validator::{ImageProbe, ProbeOutcome};
    use tempfile::TempDir;
    use zip::ZipArchive;

    struct FixedProbe;

    impl ImageProbe for FixedProbe {
        fn probe(&self, _path: &Path) -> ProbeOutcome {
            ProbeOutcome::Measured {
                width: 400,
                height: 200,
            }
        }
    }

    fn packager(output: &Path, exclusions: ExclusionPatternSet) -> Packager {
        Packager::new(output, exclusions).with_validator(Validator::with_probe(FixedProbe))
    }

    fn valid_bundle(base: &Path, name: &str) -> PathBuf {
        let params = BrandParameters::new(name)
            .with_primary_color(HexColor::parse("primary-color", "#0066CC").unwrap());
        let bundle = generator::generate(&params, base, false).unwrap().path;
        fs::write(bundle.join("assets/logo.png"), vec![0u8; 4096]).unwrap();
        bundle
    }

    fn entry_names(archive_path: &Path) -> Vec<String> {
        let archive = ZipArchive::new(File::open(archive_path).unwrap()).unwrap();
        let mut names: Vec<String> = archive.file_names().map(String::from).collect();
        names.sort();
        names
    }

    #[test]
    fn test_package_excludes_placeholders() {
        let temp = TempDir::new().unwrap();
        let bundle = valid_bundle(&temp.path().join("brand-skills"), "Acme Corp");
        let output = temp.path().join("dist");

        let archive = packager(&output, ExclusionPatternSet::new([".placeholder"]))
            .package(&bundle)
            .unwrap();

        assert_eq!(archive.archive_path, output.join("acme-corp.skill"));
        assert!(archive.archive_path.is_file());
        assert!(archive.bytes > 0);

        let names = entry_names(&archive.archive_path);
        assert!(names.iter().all(|n| !n.contains(".placeholder")));
        assert!(names.contains(&"acme-corp/SKILL.md".to_string()));
        assert!(names.contains(&"acme-corp/assets/logo.png".to_string()));
        assert!(names.contains(&"acme-corp/scripts/apply_brand.sh".to_string()));
        assert!(names.iter().all(|n| n.starts_with("acme-corp/")));
        assert_eq!(archive.skipped.len(), 2);
        assert_eq!(archive.file_count(), names.len());
    }

    #[test]
    fn test_package_includes_every_generated_file_without_exclusions() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("brand-skills");
        let params = BrandParameters::new("Acme Corp");
        let generated = generator::generate(&params, &base, false).unwrap();
        fs::write(generated.path.join("assets/logo.png"), vec![0u8; 4096]).unwrap();

        let archive = packager(&temp.path().join("dist"), ExclusionPatternSet::empty())
            .package(&generated.path)
            .unwrap();

        let names = entry_names(&archive.archive_path);
        for file in &generated.files {
            let expected = format!("acme-corp/{}", archive_entry_name(file));
            assert!(names.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn test_package_refuses_invalid_bundle() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("brand-skills");
        // placeholder logo only: validation error
        let bundle = generator::generate(&BrandParameters::new("Acme"), &base, false)
            .unwrap()
            .path;
        let output = temp.path().join("dist");

        let err = packager(&output, ExclusionPatternSet::default())
            .package(&bundle)
            .unwrap_err();

        match err {
            BrandkitError::ValidationFailed { name, errors } => {
                assert_eq!(name, "acme");
                assert!(!errors.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!output.join("acme.skill").exists());
    }

    #[test]
    fn test_package_prunes_excluded_directories() {
        let temp = TempDir::new().unwrap();
        let bundle = valid_bundle(&temp.path().join("brand-skills"), "Acme");
        fs::create_dir_all(bundle.join("node_modules/pkg")).unwrap();
        fs::write(bundle.join("node_modules/pkg/index.js"), "x").unwrap();
        fs::create_dir_all(bundle.join("scripts/__pycache__")).unwrap();
        fs::write(bundle.join("scripts/__pycache__/a.pyc"), "x").unwrap();

        let archive = packager(&temp.path().join("dist"), ExclusionPatternSet::default())
            .package(&bundle)
            .unwrap();

        let names = entry_names(&archive.archive_path);
        assert!(names.iter().all(|n| !n.contains("node_modules")));
        assert!(names.iter().all(|n| !n.contains("__pycache__")));
        // pruned directories are never visited, so nothing inside them is reported
        assert!(archive.skipped.iter().all(|s| !s.contains("node_modules")));
    }

    #[test]
    fn test_package_overwrites_previous_archive() {
        let temp = TempDir::new().unwrap();
        let bundle = valid_bundle(&temp.path().join("brand-skills"), "Acme");
        let output = temp.path().join("dist");
        let packager = packager(&output, ExclusionPatternSet::default());

        packager.package(&bundle).unwrap();
        fs::remove_file(bundle.join("assets/README.md")).unwrap();
        let archive = packager.package(&bundle).unwrap();

        let names = entry_names(&archive.archive_path);
        assert!(!names.contains(&"acme/assets/README.md".to_string()));
    }

    #[cfg(unix)]
    #[test]
    fn test_package_preserves_executable_mode() {
        let temp = TempDir::new().unwrap();
        let bundle = valid_bundle(&temp.path().join("brand-skills"), "Acme");
        let archive = packager(&temp.path().join("dist"), ExclusionPatternSet::default())
            .package(&bundle)
            .unwrap();

        let mut zip = ZipArchive::new(File::open(&archive.archive_path).unwrap()).unwrap();
        let script = zip.by_name("acme/scripts/apply_brand.sh").unwrap();
        assert_eq!(script.unix_mode().map(|m| m & 0o777), Some(0o755));
    }

    #[test]
    fn test_package_all_continues_after_failure() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("brand-skills");
        valid_bundle(&base, "Alpha");
        generator::generate(&BrandParameters::new("Beta"), &base, false).unwrap();
        valid_bundle(&base, "Gamma");
        fs::create_dir_all(base.join("not-a-bundle")).unwrap();

        let output = temp.path().join("dist");
        let summary = packager(&output, ExclusionPatternSet::default())
            .package_all(&base)
            .unwrap();

        assert_eq!(summary.total(), 3);
        assert!(!summary.all_succeeded());
        let packaged: Vec<_> = summary.packaged.iter().map(|a| a.bundle_name.as_str()).collect();
        assert_eq!(packaged, vec!["alpha", "gamma"]);
        assert_eq!(summary.failed.len(), 1);
        assert_eq!(summary.failed[0].0, "beta");
        assert!(output.join("alpha.skill").exists());
        assert!(!output.join("beta.skill").exists());
        assert!(output.join("gamma.skill").exists());
    }

    #[test]
    fn test_package_all_no_bundles() {
        let temp = TempDir::new().unwrap();
        let err = packager(&temp.path().join("dist"), ExclusionPatternSet::default())
            .package_all(temp.path())
            .unwrap_err();
        assert!(matches!(err, BrandkitError::NoBundlesFound { .. }));
    }

    #[test]
    fn test_discover_bundles_missing_base() {
        let temp = TempDir::new().unwrap();
        let err = discover_bundles(&temp.path().join("missing")).unwrap_err();
        assert!(matches!(err, BrandkitError::BundleNotFound { .. }));
    }

    #[test]
    fn test_archive_entry_name_uses_forward_slashes() {
        let path: PathBuf = ["acme", "assets", "logo.png"].iter().collect();
        assert_eq!(archive_entry_name(&path), "acme/assets/logo.png");
    }
}
