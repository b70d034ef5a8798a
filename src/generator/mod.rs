//! Bundle generator
//!
//! Turns [`BrandParameters`] into a bundle directory:
//!
//! ```text
//! <slug>/
//!   SKILL.md
//!   assets/README.md
//!   assets/logo.png.placeholder
//!   assets/logo-white.png.placeholder
//!   references/{color-system,typography,logo-usage}.md
//!   scripts/apply_brand.sh
//! ```
//!
//! Files are written one at a time. A failure part-way leaves earlier files
//! in place; re-running with `force` regenerates everything.

pub mod templates;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::brand::BrandParameters;
use crate::error::{Result, bundle, color, fs as fs_error};
use crate::layout;

/// A rendered file, relative to the bundle root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub relative_path: PathBuf,
    pub contents: String,
    pub executable: bool,
}

impl Document {
    fn new(relative_path: impl Into<PathBuf>, contents: String) -> Self {
        Self {
            relative_path: relative_path.into(),
            contents,
            executable: false,
        }
    }

    fn executable(mut self) -> Self {
        self.executable = true;
        self
    }
}

/// Outcome of a successful generation run.
#[derive(Debug, Clone)]
pub struct GeneratedBundle {
    pub slug: String,
    pub path: PathBuf,
    /// Files written, relative to `path`, in write order
    pub files: Vec<PathBuf>,
    /// Whether an existing directory was written over
    pub overwritten: bool,
}

/// Render every document of a bundle in write order.
pub fn render_documents(params: &BrandParameters, slug: &str) -> Vec<Document> {
    let assets = Path::new(layout::ASSETS_DIR);
    let references = Path::new(layout::REFERENCES_DIR);

    vec![
        Document::new(layout::DESCRIPTOR, templates::descriptor(params, slug)),
        Document::new(
            references.join(layout::COLOR_REFERENCE),
            templates::color_reference(params),
        ),
        Document::new(
            references.join(layout::TYPOGRAPHY_REFERENCE),
            templates::typography_reference(params),
        ),
        Document::new(
            references.join(layout::LOGO_REFERENCE),
            templates::logo_reference(params),
        ),
        Document::new(assets.join(layout::ASSETS_README), templates::assets_readme()),
        Document::new(
            assets.join(layout::placeholder_name(layout::PRIMARY_LOGO)),
            templates::logo_placeholder("primary"),
        ),
        Document::new(
            assets.join(layout::placeholder_name(layout::REVERSED_LOGO)),
            templates::logo_placeholder("white"),
        ),
        Document::new(
            Path::new(layout::SCRIPTS_DIR).join(layout::EXAMPLE_SCRIPT),
            templates::example_script(params),
        )
        .executable(),
    ]
}

/// Generate a bundle for `params` under `base_path`.
///
/// Refuses to touch an existing bundle directory unless `force` is set.
pub fn generate(params: &BrandParameters, base_path: &Path, force: bool) -> Result<GeneratedBundle> {
    let slug = params.slug();
    if slug.is_empty() {
        return Err(color::empty_slug(&params.name));
    }

    let bundle_path = base_path.join(&slug);
    let overwritten = bundle_path.exists();
    if overwritten {
        if !force {
            return Err(bundle::already_exists(bundle_path.display().to_string()));
        }
        warn!(path = %bundle_path.display(), "Overwriting existing bundle");
    }

    for dir in [
        bundle_path.clone(),
        bundle_path.join(layout::ASSETS_DIR),
        bundle_path.join(layout::REFERENCES_DIR),
        bundle_path.join(layout::SCRIPTS_DIR),
    ] {
        fs::create_dir_all(&dir).map_err(|e| fs_error::write_failed(&dir, e))?;
    }

    let mut files = Vec::new();
    for document in render_documents(params, &slug) {
        let target = bundle_path.join(&document.relative_path);
        write_document(&target, &document)?;
        debug!(path = %target.display(), bytes = document.contents.len(), "Wrote bundle file");
        files.push(document.relative_path);
    }

    info!(slug = %slug, path = %bundle_path.display(), files = files.len(), "Bundle generated");

    Ok(GeneratedBundle {
        slug,
        path: bundle_path,
        files,
        overwritten,
    })
}

fn write_document(target: &Path, document: &Document) -> Result<()> {
    fs::write(target, &document.contents).map_err(|e| fs_error::write_failed(target, e))?;
    if document.executable {
        make_executable(target)?;
    }
    Ok(())
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = fs::metadata(path)
        .map_err(|e| fs_error::write_failed(path, e))?
        .permissions();
    permissions.set_mode(permissions.mode() | 0o755);
    fs::set_permissions(path, permissions).map_err(|e| fs_error::write_failed(path, e))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
