//! Init command: generate a new bundle

use crate::brand::BrandParameters;
use crate::cli::InitArgs;
use crate::color::HexColor;
use crate::config::ProjectConfig;
use crate::error::Result;
use crate::generator;
use crate::ui;

/// Run init command
pub fn run(config: &ProjectConfig, args: InitArgs) -> Result<()> {
    let params = brand_parameters(&args)?;
    let base_path = config.bundle_path(args.path);

    let bundle = generator::generate(&params, &base_path, args.force)?;
    print!("{}", ui::render_generated(&params, &bundle));
    Ok(())
}

/// Validate every color flag before anything is written.
fn brand_parameters(args: &InitArgs) -> Result<BrandParameters> {
    let mut params = BrandParameters::new(args.name.clone());

    if let Some(color) = parse_color("primary-color", args.primary_color.as_deref())? {
        params = params.with_primary_color(color);
    }
    if let Some(color) = parse_color("secondary-color", args.secondary_color.as_deref())? {
        params = params.with_secondary_color(color);
    }
    if let Some(color) = parse_color("accent-color", args.accent_color.as_deref())? {
        params = params.with_accent_color(color);
    }

    if let Some(font) = non_blank(args.font_heading.as_deref()) {
        params = params.with_heading_font(font);
    }
    if let Some(font) = non_blank(args.font_subheading.as_deref()) {
        params = params.with_subheading_font(font);
    }
    if let Some(font) = non_blank(args.font_body.as_deref()) {
        params = params.with_body_font(font);
    }

    Ok(params)
}

/// Blank input counts as not supplied.
fn parse_color(field: &str, value: Option<&str>) -> Result<Option<HexColor>> {
    match non_blank(value) {
        Some(value) => HexColor::parse(field, value).map(Some),
        None => Ok(None),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
