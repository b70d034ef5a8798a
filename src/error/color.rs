//! Brand parameter errors

use super::BrandkitError;

/// Creates an invalid color error for the named field
pub fn invalid(field: impl Into<String>, value: impl Into<String>) -> BrandkitError {
    BrandkitError::InvalidColor {
        field: field.into(),
        value: value.into(),
    }
}

/// Creates an empty slug error
pub fn empty_slug(name: impl Into<String>) -> BrandkitError {
    BrandkitError::EmptySlug { name: name.into() }
}
