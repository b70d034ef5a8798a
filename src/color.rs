//! Hex color parsing, normalization and RGB conversion.
//!
//! Colors travel through the tool as `#RRGGBB` strings with uppercase digits.
//! [`HexColor`] is the validated form; the free functions operate on raw input.

use std::fmt;

use crate::error::{Result, color};

/// Check whether `s` is an acceptable hex color.
///
/// Empty input is valid because every color field is optional. Otherwise a
/// single optional leading `#` is allowed, followed by exactly six hex digits.
///
/// # Examples
/// ```
/// use brandkit::color::validate_hex;
/// assert!(validate_hex("#0066CC"));
/// assert!(validate_hex("0066cc"));
/// assert!(!validate_hex("#ZZZZZZ"));
/// ```
pub fn validate_hex(s: &str) -> bool {
    if s.is_empty() {
        return true;
    }
    let digits = s.strip_prefix('#').unwrap_or(s);
    digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Normalize a hex color to `#RRGGBB` with uppercase digits.
///
/// Absent or blank input stays absent. Input is not validated here; callers
/// run [`validate_hex`] first.
pub fn normalize_hex(s: Option<&str>) -> Option<String> {
    let trimmed = s?.trim();
    if trimmed.is_empty() {
        return None;
    }
    let with_hash = if trimmed.starts_with('#') {
        trimmed.to_string()
    } else {
        format!("#{trimmed}")
    };
    Some(with_hash.to_uppercase())
}

/// Convert a validated hex color into its decimal RGB triple.
///
/// Only defined for input accepted by [`validate_hex`]; malformed groups
/// decode as zero.
pub fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    let digits = hex.trim_start_matches('#');
    let channel = |i: usize| {
        digits
            .get(i..i + 2)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .unwrap_or(0)
    };
    (channel(0), channel(2), channel(4))
}

/// A validated, normalized `#RRGGBB` color.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor(String);

impl HexColor {
    /// Parse and normalize user input for the named field.
    ///
    /// `field` is only used in the error message (e.g. `primary-color`).
    pub fn parse(field: &str, value: &str) -> Result<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() || !validate_hex(trimmed) {
            return Err(color::invalid(field, value));
        }
        match normalize_hex(Some(trimmed)) {
            Some(normalized) => Ok(Self(normalized)),
            None => Err(color::invalid(field, value)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        hex_to_rgb(&self.0)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
