//! Content rules for the `SKILL.md` descriptor.

use std::sync::LazyLock;

use regex::Regex;

use super::report::ReportBuilder;
use crate::color::validate_hex;
use crate::layout::FRONTMATTER_DELIMITER;

pub const REQUIRED_FIELDS: [&str; 2] = ["name", "description"];
pub const RECOMMENDED_FIELD: &str = "license";

pub const RECOMMENDED_SECTIONS: [&str; 5] = [
    "## Overview",
    "## Brand Assets",
    "### Logo",
    "### Colors",
    "## Implementation Guidelines",
];

pub const PLACEHOLDER_MARKERS: [&str; 4] = ["[PLACEHOLDER]", "TODO:", "FIXME:", "XXX:"];

/// Backtick-quoted hex-shaped tokens: all hex digits of any length, or six
/// alphanumerics. Words such as `#branding` are not candidates.
#[allow(clippy::expect_used)]
static HEX_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"`(#(?:[0-9A-Fa-f]+|[0-9A-Za-z]{6}))`").expect("valid hex token regex")
});

#[allow(clippy::expect_used)]
static RGB_TRIPLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"RGB:\s*(\d+),\s*(\d+),\s*(\d+)").expect("valid RGB triple regex")
});

/// Descriptor split at its frontmatter delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sections<'a> {
    pub frontmatter: &'a str,
    pub body: &'a str,
}

/// Why a descriptor could not be split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontmatterError {
    /// First line is not the delimiter
    Missing,
    /// Opening delimiter is never closed
    Unterminated,
}

/// Split `content` into frontmatter and body at lines holding only `---`.
pub fn split_frontmatter(content: &str) -> Result<Sections<'_>, FrontmatterError> {
    let mut lines = content.split_inclusive('\n');
    let first = lines.next().ok_or(FrontmatterError::Missing)?;
    if first.trim_end() != FRONTMATTER_DELIMITER {
        return Err(FrontmatterError::Missing);
    }

    let start = first.len();
    let mut offset = start;
    for line in lines {
        if line.trim_end() == FRONTMATTER_DELIMITER {
            return Ok(Sections {
                frontmatter: &content[start..offset],
                body: &content[offset + line.len()..],
            });
        }
        offset += line.len();
    }
    Err(FrontmatterError::Unterminated)
}

fn has_field(frontmatter: &str, field: &str) -> bool {
    frontmatter.lines().any(|line| {
        line.trim_start()
            .strip_prefix(field)
            .is_some_and(|rest| rest.starts_with(':'))
    })
}

/// Structural and content checks. Returns the split descriptor when the
/// frontmatter is well formed.
pub fn check_descriptor<'a>(content: &'a str, report: &mut ReportBuilder) -> Option<Sections<'a>> {
    let sections = match split_frontmatter(content) {
        Ok(sections) => sections,
        Err(FrontmatterError::Missing) => {
            report.error("SKILL.md missing YAML frontmatter (should start with '---')");
            return None;
        }
        Err(FrontmatterError::Unterminated) => {
            report.error("SKILL.md has malformed YAML frontmatter (no closing '---')");
            return None;
        }
    };

    for field in REQUIRED_FIELDS {
        if !has_field(sections.frontmatter, field) {
            report.error(format!(
                "SKILL.md frontmatter missing required field: {field}"
            ));
        }
    }

    if !has_field(sections.frontmatter, RECOMMENDED_FIELD) {
        report.warning(format!(
            "SKILL.md frontmatter missing '{RECOMMENDED_FIELD}:' field (recommended)"
        ));
    }

    for section in RECOMMENDED_SECTIONS {
        if !sections.body.contains(section) {
            report.warning(format!("SKILL.md missing recommended section: {section}"));
        }
    }

    for marker in PLACEHOLDER_MARKERS {
        if content.contains(marker) {
            report.warning(format!("SKILL.md contains placeholder text: {marker}"));
        }
    }

    Some(sections)
}

/// Color tokens in the descriptor body.
///
/// Every `RGB: r, g, b` triple is checked, including ones inside example
/// snippets that have nothing to do with the brand palette.
pub fn check_colors(text: &str, report: &mut ReportBuilder) {
    for capture in HEX_TOKEN.captures_iter(text) {
        let token = &capture[1];
        if token.len() == 7 && validate_hex(token) {
            report.info(format!("Found color: {token}"));
        } else {
            report.error(format!("Invalid hex color format: {token}"));
        }
    }

    for capture in RGB_TRIPLE.captures_iter(text) {
        let in_range = (1..=3).all(|i| capture[i].parse::<u32>().is_ok_and(|v| v <= 255));
        if !in_range {
            report.error(format!("Invalid RGB color values: {}", &capture[0]));
        }
    }
}
