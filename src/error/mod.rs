//! Error types and handling for brandkit
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Validation findings are not errors: they accumulate in a
//! [`ValidationReport`](crate::validator::ValidationReport). The variants here
//! cover conditions that abort an operation outright.
//!
//! Constructors are grouped by domain:
//! - [`bundle`]: Bundle lifecycle errors
//! - [`color`]: Brand parameter errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system and archive errors

pub mod bundle;
pub mod color;
pub mod config;
pub mod fs;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for brandkit operations
#[derive(Error, Diagnostic, Debug)]
pub enum BrandkitError {
    // Brand parameter errors
    #[error("Invalid hex color for --{field}: {value}")]
    #[diagnostic(
        code(brandkit::color::invalid),
        help("Color must be in format #RRGGBB (e.g., #0066CC)")
    )]
    InvalidColor { field: String, value: String },

    #[error("Cannot derive a bundle identifier from name '{name}'")]
    #[diagnostic(
        code(brandkit::bundle::empty_slug),
        help("The brand name must contain at least one letter or digit")
    )]
    EmptySlug { name: String },

    // Bundle errors
    #[error("Bundle directory '{path}' already exists")]
    #[diagnostic(
        code(brandkit::bundle::already_exists),
        help("Use --force to overwrite")
    )]
    BundleExists { path: String },

    #[error("Bundle not found: {path}")]
    #[diagnostic(code(brandkit::bundle::not_found))]
    BundleNotFound { path: String },

    #[error("No bundles found in {path}")]
    #[diagnostic(
        code(brandkit::bundle::none_found),
        help("A bundle is a directory containing a SKILL.md descriptor")
    )]
    NoBundlesFound { path: String },

    #[error("No bundle specified")]
    #[diagnostic(
        code(brandkit::bundle::unspecified),
        help("Name a bundle or pass --all")
    )]
    BundleNotSpecified,

    #[error("Bundle '{name}' failed validation with {} error(s)", errors.len())]
    #[diagnostic(
        code(brandkit::bundle::validation_failed),
        help("Run 'brandkit validate' for the full report")
    )]
    ValidationFailed { name: String, errors: Vec<String> },

    #[error("Bundle '{name}' is not valid{}", if *strict { " (strict mode)" } else { "" })]
    #[diagnostic(code(brandkit::bundle::invalid))]
    BundleInvalid { name: String, strict: bool },

    #[error("Failed to package {failed} of {total} bundle(s)")]
    #[diagnostic(code(brandkit::bundle::package_failed))]
    PackagingFailed { failed: usize, total: usize },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(brandkit::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(brandkit::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(brandkit::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(brandkit::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(brandkit::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to create archive: {path}: {reason}")]
    #[diagnostic(code(brandkit::fs::archive_failed))]
    ArchiveFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(brandkit::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for BrandkitError {
    fn from(err: std::io::Error) -> Self {
        BrandkitError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<walkdir::Error> for BrandkitError {
    fn from(err: walkdir::Error) -> Self {
        BrandkitError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for BrandkitError {
    fn from(err: serde_yaml::Error) -> Self {
        BrandkitError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for BrandkitError {
    fn from(err: serde_json::Error) -> Self {
        BrandkitError::IoError {
            message: format!("JSON serialization failed: {err}"),
        }
    }
}

impl From<zip::result::ZipError> for BrandkitError {
    fn from(err: zip::result::ZipError) -> Self {
        BrandkitError::ArchiveFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, BrandkitError>;

#[cfg(test)]
mod tests;
