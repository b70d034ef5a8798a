//! Bundle lifecycle errors

use super::BrandkitError;

/// Creates a bundle already exists error
pub fn already_exists(path: impl Into<String>) -> BrandkitError {
    BrandkitError::BundleExists { path: path.into() }
}

/// Creates a bundle not found error
pub fn not_found(path: impl Into<String>) -> BrandkitError {
    BrandkitError::BundleNotFound { path: path.into() }
}

/// Creates a no bundles found error
pub fn none_found(path: impl Into<String>) -> BrandkitError {
    BrandkitError::NoBundlesFound { path: path.into() }
}

/// Creates a missing bundle argument error
pub fn not_specified() -> BrandkitError {
    BrandkitError::BundleNotSpecified
}

/// Creates a packaging gate error carrying the blocking findings
pub fn validation_failed(name: impl Into<String>, errors: Vec<String>) -> BrandkitError {
    BrandkitError::ValidationFailed {
        name: name.into(),
        errors,
    }
}

/// Creates an invalid bundle verdict error
pub fn invalid(name: impl Into<String>, strict: bool) -> BrandkitError {
    BrandkitError::BundleInvalid {
        name: name.into(),
        strict,
    }
}

/// Creates a batch packaging failure error
pub fn packaging_failed(failed: usize, total: usize) -> BrandkitError {
    BrandkitError::PackagingFailed { failed, total }
}
