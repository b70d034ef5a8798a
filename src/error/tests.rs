//! Error type tests
//!
//! Tests for BrandkitError and its conversions.

#![allow(clippy::expect_used)]

use crate::error::{BrandkitError, bundle, color, config, fs};
use miette::Diagnostic;
use std::path::Path;

macro_rules! test_error_contains {
    ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
        #[test]
        fn $test_name() {
            let err = $err;
            let error_string = err.to_string();
            $(
                assert!(error_string.contains($contains),
                    "Error message should contain '{}', got: {}",
                    $contains,
                    error_string
                );
            )+
        }
    };
}

#[test]
fn test_error_display() {
    let err = color::invalid("primary-color", "#ZZZZZZ");
    assert_eq!(
        err.to_string(),
        "Invalid hex color for --primary-color: #ZZZZZZ"
    );
}

#[test]
fn test_error_code() {
    let err = bundle::already_exists("brand-skills/acme-corp");
    assert_eq!(
        err.code().map(|c| c.to_string()),
        Some("brandkit::bundle::already_exists".to_string())
    );
}

#[test]
fn test_error_help_mentions_force() {
    let err = bundle::already_exists("brand-skills/acme-corp");
    let help = err.help().map(|h| h.to_string()).unwrap_or_default();
    assert!(help.contains("--force"));
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: BrandkitError = io_err.into();
    assert!(matches!(err, BrandkitError::IoError { .. }));
}

#[test]
fn test_yaml_error_conversion() {
    let parse_result: std::result::Result<serde_yaml::Value, _> =
        serde_yaml::from_str("invalid: yaml: content: [unclosed");
    let yaml_err = parse_result.expect_err("YAML parsing should have failed");
    let err: BrandkitError = yaml_err.into();
    assert!(matches!(err, BrandkitError::ConfigParseFailed { .. }));
}

#[test]
fn test_zip_error_conversion() {
    let zip_err = zip::result::ZipError::FileNotFound;
    let err: BrandkitError = zip_err.into();
    assert!(matches!(err, BrandkitError::ArchiveFailed { .. }));
}

test_error_contains!(
    test_empty_slug,
    color::empty_slug("!!!"),
    "Cannot derive a bundle identifier",
    "!!!"
);

test_error_contains!(
    test_bundle_not_found,
    bundle::not_found("brand-skills/missing"),
    "Bundle not found",
    "brand-skills/missing"
);

test_error_contains!(
    test_no_bundles_found,
    bundle::none_found("brand-skills"),
    "No bundles found in brand-skills"
);

test_error_contains!(
    test_validation_failed_counts_errors,
    bundle::validation_failed("acme", vec!["a".into(), "b".into()]),
    "'acme'",
    "2 error(s)"
);

test_error_contains!(
    test_invalid_strict,
    bundle::invalid("acme", true),
    "not valid (strict mode)"
);

test_error_contains!(
    test_invalid_non_strict,
    bundle::invalid("acme", false),
    "Bundle 'acme' is not valid"
);

test_error_contains!(
    test_packaging_failed,
    BrandkitError::PackagingFailed {
        failed: 1,
        total: 3
    },
    "1 of 3"
);

test_error_contains!(
    test_config_parse_failed,
    config::parse_failed("brandkit.yaml", "bad key"),
    "Failed to parse configuration file",
    "bad key"
);

test_error_contains!(
    test_config_read_failed,
    config::read_failed("brandkit.yaml", "denied"),
    "Failed to read configuration file"
);

test_error_contains!(
    test_config_not_found,
    config::not_found("custom.yaml"),
    "Configuration file not found"
);

test_error_contains!(
    test_file_write_failed,
    fs::write_failed(Path::new("/x/SKILL.md"), "disk full"),
    "Failed to write file",
    "/x/SKILL.md",
    "disk full"
);

test_error_contains!(
    test_file_read_failed,
    fs::read_failed(Path::new("/x/SKILL.md"), "denied"),
    "Failed to read file"
);

test_error_contains!(
    test_archive_failed,
    fs::archive_failed(Path::new("dist/acme.skill"), "no space"),
    "Failed to create archive",
    "dist/acme.skill"
);


test_error_contains!(
    test_not_specified_message,
    bundle::not_specified(),
    "No bundle specified"
);
