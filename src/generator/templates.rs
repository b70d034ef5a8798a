//! Document rendering for generated bundles.
//!
//! Every function here is pure: it turns [`BrandParameters`] into text.
//! Sections that describe a color or font appear only when that value was
//! supplied. The descriptor and the example script fall back to the
//! documented defaults in `brand` when they need a concrete value.

use std::fmt::Write;

use crate::brand::{BrandParameters, NEUTRAL_DARK, NEUTRAL_LIGHT, NEUTRAL_WHITE};
use crate::color::{HexColor, hex_to_rgb};
use crate::layout;

fn rgb_triple(hex: &str) -> String {
    let (r, g, b) = hex_to_rgb(hex);
    format!("RGB: {r}, {g}, {b}")
}

fn color_line(label: &str, color: &HexColor) -> String {
    format!("- **{label}**: `{color}` ({})", rgb_triple(color.as_str()))
}

fn descriptor_color_usage(role: &str) -> &'static str {
    match role {
        "Primary" => "  - Use for: Headlines, primary CTAs, key UI elements\n  - Primary brand color - use prominently\n",
        "Secondary" => "  - Use for: Accents, highlights, supporting elements\n",
        _ => "  - Use for: Highlights, important callouts\n  - Use sparingly for maximum impact\n",
    }
}

fn descriptor_colors(params: &BrandParameters) -> String {
    let mut out = String::new();
    for (role, color) in params.palette() {
        let _ = writeln!(out, "**{role} Color:**");
        let _ = writeln!(out, "{}", color_line(&format!("{} {role}", params.name), color));
        out.push_str(descriptor_color_usage(role));
        out.push('\n');
    }
    let _ = writeln!(out, "**Neutral Colors:**");
    let _ = writeln!(
        out,
        "- **Dark**: `{NEUTRAL_DARK}` ({})",
        rgb_triple(NEUTRAL_DARK)
    );
    let _ = writeln!(out, "  - Use for: Body text, dark backgrounds");
    let _ = writeln!(
        out,
        "- **Light**: `{NEUTRAL_LIGHT}` ({})",
        rgb_triple(NEUTRAL_LIGHT)
    );
    let _ = writeln!(out, "  - Use for: Light backgrounds, subtle sections");
    out
}

fn descriptor_typography(params: &BrandParameters) -> String {
    if !params.has_fonts() {
        return String::new();
    }
    let mut out = String::from("### Typography\n\n**Fonts:**\n");
    if let Some(font) = &params.heading_font {
        let _ = writeln!(out, "- **Headings**: {font}");
    }
    if let Some(font) = &params.subheading_font {
        let _ = writeln!(out, "- **Subheadings**: {font}");
    }
    if let Some(font) = &params.body_font {
        let _ = writeln!(out, "- **Body Text**: {font}");
    }
    out.push_str(
        "- **Fallbacks**: Arial/Helvetica for headings, sans-serif for body

**Font Sizes:**
- H1: 36-48pt
- H2: 28-32pt
- H3: 20-24pt
- Body: 14-16pt

For detailed typography guidelines, see `references/typography.md`

",
    );
    out
}

/// Render `SKILL.md`.
pub fn descriptor(params: &BrandParameters, slug: &str) -> String {
    let name = &params.name;
    let colors = descriptor_colors(params);
    let typography = descriptor_typography(params);
    let primary = params.primary_or_default();
    let secondary = params.secondary_or_default();
    let heading_font = params.heading_font_or_default();
    let body_font = params.body_font_or_default();

    format!(
        "---
name: {slug}
description: Applies {name}'s official brand colors, typography, and visual identity to documents, presentations, and web artifacts. Use when creating any {name}-branded content or when the user requests {name} branding.
license: Proprietary - For {name} use only
---

# {name} Brand Guidelines

## Overview

Apply {name}'s brand identity to presentations, documents, reports, and web pages so every {name} artifact looks consistent.

**Keywords**: {name}, {name} branding, corporate identity, brand colors, {name} typography, visual identity

## Brand Assets

### Logo

Available logos in `assets/`:
- `logo.png` - Primary logo for light backgrounds
- `logo-white.png` - Logo for dark backgrounds (if applicable)
- `logo-horizontal.png` - Horizontal orientation for headers (if applicable)

**Logo Usage:**
- Minimum size: 50px height for digital, 0.5\" for print
- Always maintain clearspace
- Never distort, rotate, or add effects to the logo

For comprehensive logo usage rules, see `references/logo-usage.md`

### Colors

{colors}
**Color Application:**
- Headings: Primary brand color or white (on dark backgrounds)
- Body text: Dark neutral
- Backgrounds: Light neutral or white
- Accents: Secondary/Accent colors sparingly

For comprehensive color usage rules, see `references/color-system.md`

{typography}## Artifact-Specific Guidelines

### Presentations

- Title slide: Primary brand color background with white text and logo
- Content slides: White background with primary color headings
- Section dividers: Dark background with white text

### Documents

- Cover page: Primary brand color header with logo
- Headers: Primary brand color, heading font
- Body: Dark text, body font
- Footers: Small logo (right-aligned) with page numbers

### Web Content

```css
:root {{
  --primary-color: {primary};
  --secondary-color: {secondary};
  --dark: {NEUTRAL_DARK};
  --light: {NEUTRAL_LIGHT};

  --font-heading: '{heading_font}', sans-serif;
  --font-body: '{body_font}', sans-serif;
}}
```

## Implementation Guidelines

### Simple Branding Requests

When the user asks for \"{name} branding\" or \"our brand colors\":
1. Apply the primary brand color to all headings
2. Apply the dark neutral to body text
3. Use the light neutral for backgrounds
4. Add the logo from `assets/logo.png` to the header or footer

### Comprehensive Branding

When creating from scratch or asked for the full {name} treatment:
1. Read the reference files for detailed guidance
2. Start from templates in `assets/templates/` when available
3. Follow all logo usage rules
4. Check color contrast and accessibility

### Quality Checklist

Before delivering branded artifacts, verify:
- [ ] Logo is present and properly sized
- [ ] Primary colors are used correctly
- [ ] Typography follows specified fonts
- [ ] Accent colors are used sparingly
- [ ] Text has sufficient contrast (4.5:1 minimum)
- [ ] Visual hierarchy is clear and consistent

## Reference Files

- `references/color-system.md` - Color palette and usage
- `references/typography.md` - Font specifications and pairing rules
- `references/logo-usage.md` - Logo clearspace and placement

## Next Steps

1. **Add Logo Assets**: place {name}'s logo files in `assets/` (`logo.png` is required)
2. **Customize References**: extend the files in `references/` with detailed specifications
3. **Add Templates**: place pre-branded templates in `assets/templates/`
4. **Validate**: run `brandkit validate {slug}`
"
    )
}

/// Render `references/color-system.md`.
pub fn color_reference(params: &BrandParameters) -> String {
    let name = &params.name;
    let mut out = format!(
        "# {name} Color System

Color specifications and usage guidelines for {name} materials.

"
    );

    if let Some(color) = &params.primary_color {
        let _ = write!(
            out,
            "## Primary Color

{}
  - Use for: Primary CTAs, headings, key UI elements
  - Recommended uses: Buttons, links, headlines, brand accents

**Usage Rules:**
- Always use for primary brand touchpoints
- Ensure 4.5:1 contrast ratio for text
- Pair with white or light neutral backgrounds

",
            color_line(&format!("{name} Primary"), color)
        );
    }

    if let Some(color) = &params.secondary_color {
        let _ = write!(
            out,
            "## Secondary Color

{}
  - Use for: Supporting elements, accents, highlights
  - Works well with: Primary color and neutrals

",
            color_line(&format!("{name} Secondary"), color)
        );
    }

    if let Some(color) = &params.accent_color {
        let _ = write!(
            out,
            "## Accent Color

{}
  - Use for: Highlights, important callouts
  - Limit to <20% of any design
  - Never use for body text

",
            color_line(&format!("{name} Accent"), color)
        );
    }

    let _ = write!(
        out,
        "## Neutral Colors

- **Dark**: `{NEUTRAL_DARK}` ({})
  - Use for: Body text, dark backgrounds
- **Light**: `{NEUTRAL_LIGHT}` ({})
  - Use for: Light backgrounds, subtle sections
- **White**: `{NEUTRAL_WHITE}` ({})
  - Use for: Main backgrounds, text on dark backgrounds

## Color Combinations

1. **Headers**: Primary color on white background
2. **Body**: Dark text on white or light background
3. **CTAs**: White text on primary color background
4. **Accents**: Accent color sparingly on white background

Avoid low contrast combinations and keep accent colors under 20% of a design.

## Accessibility

All combinations should meet WCAG 2.1 Level AA:
- Normal text: 4.5:1 contrast ratio minimum
- Large text (18pt+): 3:1 contrast ratio minimum
- UI components: 3:1 contrast ratio minimum

",
        rgb_triple(NEUTRAL_DARK),
        rgb_triple(NEUTRAL_LIGHT),
        rgb_triple(NEUTRAL_WHITE)
    );

    out.push_str("## CSS Variables\n\n```css\n:root {\n");
    for (role, color) in params.palette() {
        let _ = writeln!(out, "  --{}: {color};", role.to_lowercase());
    }
    let _ = write!(
        out,
        "  --dark: {NEUTRAL_DARK};\n  --light: {NEUTRAL_LIGHT};\n  --white: {NEUTRAL_WHITE};\n}}\n```\n"
    );

    if let Some(color) = &params.primary_color {
        let (r, g, b) = color.rgb();
        let _ = write!(
            out,
            "
## Hex vs RGB

- **Hex**: Use for CSS and design tools (e.g., `{color}`)
- **RGB**: Use for alpha transparency (e.g., `rgba({r}, {g}, {b}, 0.8)`)
"
        );
    }

    out
}

/// Render `references/typography.md`.
pub fn typography_reference(params: &BrandParameters) -> String {
    let name = &params.name;
    let mut fonts = String::new();
    if let Some(font) = &params.heading_font {
        let _ = write!(
            fonts,
            "### Heading Font: {font}

- **Usage**: H1, H2, H3 headlines
- **Weights**: Bold (700), SemiBold (600) preferred
- **Fallback**: Arial, Helvetica, sans-serif

"
        );
    }
    if let Some(font) = &params.subheading_font {
        let _ = write!(
            fonts,
            "### Subheading Font: {font}

- **Usage**: H4, H5, section headers
- **Weights**: SemiBold (600), Medium (500)
- **Fallback**: Arial, sans-serif

"
        );
    }
    if let Some(font) = &params.body_font {
        let _ = write!(
            fonts,
            "### Body Font: {font}

- **Usage**: Paragraphs, body text, captions
- **Weights**: Regular (400), Medium (500) for emphasis
- **Fallback**: Helvetica, Arial, sans-serif

"
        );
    }
    if fonts.is_empty() {
        let _ = write!(
            fonts,
            "**Note**: Update this section with {name}'s specified fonts.\n\n"
        );
    }

    let mut out = format!(
        "# {name} Typography Guidelines

Font usage, sizing, and pairing rules for {name} brand materials.

## Font Families

{fonts}## Font Sizing

### Desktop/Print

- **H1**: 36-48pt
- **H2**: 28-32pt
- **H3**: 20-24pt
- **Body**: 14-16pt
- **Caption**: 12-14pt

### Mobile

- **H1**: 28-32pt
- **H2**: 22-26pt
- **H3**: 18-20pt
- **Body**: 16-18pt
- **Caption**: 14pt

## Line Height & Spacing

- **Headlines**: 1.2-1.3 line height
- **Body text**: 1.5-1.6 line height
- **Paragraph spacing**: 1em between paragraphs

## Pairing Rules

1. **Contrast**: Headings and body should be clearly distinct
2. **Hierarchy**: Use size, weight, and color to establish hierarchy
3. **Consistency**: At most 2-3 font families per document
4. **Readability**: Keep body text at 12pt or larger
"
    );

    if params.heading_font.is_some() || params.body_font.is_some() {
        out.push_str("\n## CSS\n\n```css\n");
        if let Some(font) = &params.body_font {
            let _ = writeln!(
                out,
                "body {{\n  font-family: '{font}', Arial, sans-serif;\n  line-height: 1.6;\n}}\n"
            );
        }
        if let Some(font) = &params.heading_font {
            let _ = writeln!(
                out,
                "h1, h2, h3 {{\n  font-family: '{font}', sans-serif;\n  line-height: 1.3;\n}}"
            );
        }
        out.push_str("```\n");
    }

    let _ = write!(
        out,
        "
## Font Licensing

Ensure {name} holds licenses for every font used in brand materials, including web embedding rights.
"
    );
    out
}

/// Render `references/logo-usage.md`.
pub fn logo_reference(params: &BrandParameters) -> String {
    let name = &params.name;
    format!(
        "# {name} Logo Usage Guidelines

How to use {name}'s logo correctly.

## Available Logo Files

Place logo files in `assets/`:
- `logo.png` - Primary logo for light backgrounds
- `logo-white.png` - Variant for dark backgrounds
- `logo-horizontal.png` - Horizontal orientation (if applicable)
- `logo.svg` - Vector format for scaling (recommended)

## Minimum Size

- **Digital**: 50px height minimum, 80-120px recommended
- **Print**: 0.5 inches minimum, 1-2 inches recommended

## Clearspace

Keep clearspace of at least twice the height of the primary logo element.
No text or graphics may intrude into it.

## File Formats

- **PNG**: Digital applications
- **SVG**: Responsive web and anything that scales
- **EPS/PDF**: Print and professional design software
- **JPG**: Avoid (no transparency)

## Usage Rules

### Do

- Use official logo files only
- Maintain the aspect ratio
- Use the light variant on dark backgrounds and the primary logo on light ones

### Don't

- Rotate the logo
- Add drop shadows, gradients, or outlines
- Change logo colors outside approved variants
- Place it on busy backgrounds that reduce legibility

## Placement

- **Documents**: Header right-aligned or centered; footer small, next to page numbers
- **Presentations**: Large on the title slide, small and consistent on content slides
- **Web**: Header left-aligned at 80-120px height, footer at 40-60px

## Quality Checklist

- [ ] Official logo file used
- [ ] Aspect ratio maintained
- [ ] Minimum size respected
- [ ] Clearspace respected
- [ ] Sufficient contrast with background (4.5:1+)

If you need logo files, check `assets/` or contact {name}'s brand team. Never recreate the logo.
"
    )
}

/// Render `assets/README.md`. Independent of the brand.
pub fn assets_readme() -> String {
    format!(
        "# Brand Assets

Place brand assets in this directory.

## Logo Files

- `{primary}` - Primary logo for light backgrounds (required)
- `{reversed}` - Logo for dark backgrounds (recommended)
- `{horizontal}` - Horizontal logo orientation (optional)
- `{vector}` - Vector format for scaling (recommended)

Files ending in `{suffix}` are stand-ins. Replace each one with the real
image and delete the stand-in.

## Templates (optional)

Create a `{templates}/` subdirectory for pre-branded templates such as
presentation decks or report documents.

## Fonts (optional)

If distributing custom fonts, add them under `fonts/` and make sure the
license allows it.
",
        primary = layout::PRIMARY_LOGO,
        reversed = layout::REVERSED_LOGO,
        horizontal = layout::HORIZONTAL_LOGO,
        vector = layout::VECTOR_LOGO,
        suffix = layout::PLACEHOLDER_SUFFIX,
        templates = layout::TEMPLATES_DIR,
    )
}

/// Render the text stand-in for a logo image.
pub fn logo_placeholder(kind: &str) -> String {
    format!(
        "PLACEHOLDER: {} LOGO

Replace this file with the actual logo image.

Recommended formats:
- PNG (with transparency)
- SVG (vector, scalable)

Minimum requirements:
- Digital: 50px height minimum
- Print: 300 DPI, 0.5\" height minimum

See references/logo-usage.md for details.
",
        kind.to_uppercase()
    )
}

/// Render the example automation script.
pub fn example_script(params: &BrandParameters) -> String {
    let name = &params.name;
    let primary = params.primary_or_default();
    let secondary = params.secondary_or_default();
    format!(
        "#!/bin/sh
# Example script for applying {name} brand colors.
# Customize to fit your tooling.

PRIMARY_COLOR=\"{primary}\"
SECONDARY_COLOR=\"{secondary}\"
DARK=\"{NEUTRAL_DARK}\"
LIGHT=\"{NEUTRAL_LIGHT}\"

echo \"Applying {name} brand colors...\"
echo \"Primary: $PRIMARY_COLOR\"
echo \"Secondary: $SECONDARY_COLOR\"
echo \"Dark: $DARK\"
echo \"Light: $LIGHT\"
"
    )
}
