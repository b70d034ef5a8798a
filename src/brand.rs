//! Brand parameters consumed by the bundle generator.

use crate::color::HexColor;
use crate::slug::slugify;

/// Fallbacks used only where a rendered example needs a concrete value.
pub const DEFAULT_PRIMARY: &str = "#0066CC";
pub const DEFAULT_SECONDARY: &str = "#FF6600";
pub const DEFAULT_HEADING_FONT: &str = "Arial";
pub const DEFAULT_BODY_FONT: &str = "Helvetica";

/// Neutral palette shared by every bundle.
pub const NEUTRAL_DARK: &str = "#1A1A1A";
pub const NEUTRAL_LIGHT: &str = "#F5F5F5";
pub const NEUTRAL_WHITE: &str = "#FFFFFF";

/// Everything the generator knows about a brand.
///
/// Built once from user input and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrandParameters {
    /// Human display name, e.g. "Acme Corp"
    pub name: String,
    pub primary_color: Option<HexColor>,
    pub secondary_color: Option<HexColor>,
    pub accent_color: Option<HexColor>,
    pub heading_font: Option<String>,
    pub subheading_font: Option<String>,
    pub body_font: Option<String>,
}

impl BrandParameters {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_primary_color(mut self, color: HexColor) -> Self {
        self.primary_color = Some(color);
        self
    }

    pub fn with_secondary_color(mut self, color: HexColor) -> Self {
        self.secondary_color = Some(color);
        self
    }

    pub fn with_accent_color(mut self, color: HexColor) -> Self {
        self.accent_color = Some(color);
        self
    }

    pub fn with_heading_font(mut self, font: impl Into<String>) -> Self {
        self.heading_font = Some(font.into());
        self
    }

    pub fn with_subheading_font(mut self, font: impl Into<String>) -> Self {
        self.subheading_font = Some(font.into());
        self
    }

    pub fn with_body_font(mut self, font: impl Into<String>) -> Self {
        self.body_font = Some(font.into());
        self
    }

    /// Bundle identifier derived from the display name. May be empty.
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }

    pub fn has_fonts(&self) -> bool {
        self.heading_font.is_some() || self.subheading_font.is_some() || self.body_font.is_some()
    }

    pub fn primary_or_default(&self) -> &str {
        self.primary_color
            .as_ref()
            .map_or(DEFAULT_PRIMARY, HexColor::as_str)
    }

    pub fn secondary_or_default(&self) -> &str {
        self.secondary_color
            .as_ref()
            .map_or(DEFAULT_SECONDARY, HexColor::as_str)
    }

    pub fn heading_font_or_default(&self) -> &str {
        self.heading_font.as_deref().unwrap_or(DEFAULT_HEADING_FONT)
    }

    pub fn body_font_or_default(&self) -> &str {
        self.body_font.as_deref().unwrap_or(DEFAULT_BODY_FONT)
    }

    /// Supplied colors in palette order, labelled by role.
    pub fn palette(&self) -> Vec<(&'static str, &HexColor)> {
        [
            ("Primary", self.primary_color.as_ref()),
            ("Secondary", self.secondary_color.as_ref()),
            ("Accent", self.accent_color.as_ref()),
        ]
        .into_iter()
        .filter_map(|(role, color)| color.map(|c| (role, c)))
        .collect()
    }
}
