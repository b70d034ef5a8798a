//! On-disk bundle layout shared by the generator, validator and packager.

/// Top-level descriptor file
pub const DESCRIPTOR: &str = "SKILL.md";

pub const ASSETS_DIR: &str = "assets";
pub const REFERENCES_DIR: &str = "references";
pub const SCRIPTS_DIR: &str = "scripts";
pub const TEMPLATES_DIR: &str = "templates";

/// Line that opens and closes the descriptor frontmatter
pub const FRONTMATTER_DELIMITER: &str = "---";

/// Suffix marking a text stand-in for a not-yet-supplied asset
pub const PLACEHOLDER_SUFFIX: &str = ".placeholder";

pub const COLOR_REFERENCE: &str = "color-system.md";
pub const TYPOGRAPHY_REFERENCE: &str = "typography.md";
pub const LOGO_REFERENCE: &str = "logo-usage.md";

/// Reference documents in generation order
pub const REFERENCE_DOCS: [&str; 3] = [COLOR_REFERENCE, TYPOGRAPHY_REFERENCE, LOGO_REFERENCE];

pub const ASSETS_README: &str = "README.md";
pub const EXAMPLE_SCRIPT: &str = "apply_brand.sh";

pub const PRIMARY_LOGO: &str = "logo.png";
pub const VECTOR_LOGO: &str = "logo.svg";
pub const REVERSED_LOGO: &str = "logo-white.png";
pub const HORIZONTAL_LOGO: &str = "logo-horizontal.png";

/// Extension of packaged bundles
pub const ARCHIVE_EXTENSION: &str = "skill";

/// Placeholder file name for an asset, e.g. `logo.png.placeholder`
pub fn placeholder_name(asset: &str) -> String {
    format!("{asset}{PLACEHOLDER_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_name() {
        assert_eq!(placeholder_name(PRIMARY_LOGO), "logo.png.placeholder");
    }
}
