//! File system and archive errors

use super::BrandkitError;
use std::path::Path;

/// Creates a file read failed error
pub fn read_failed(path: &Path, reason: impl ToString) -> BrandkitError {
    BrandkitError::FileReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: &Path, reason: impl ToString) -> BrandkitError {
    BrandkitError::FileWriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an archive failed error
pub fn archive_failed(path: &Path, reason: impl ToString) -> BrandkitError {
    BrandkitError::ArchiveFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}
