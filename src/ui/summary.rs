//! Generation and packaging summaries

use std::path::Path;

use console::Style;

use super::{banner, rule};
use crate::brand::BrandParameters;
use crate::generator::GeneratedBundle;
use crate::layout;
use crate::packager::{BatchSummary, PackagedArchive};

/// Recap printed after `init`: location, created files, brand info, next steps.
pub fn render_generated(params: &BrandParameters, bundle: &GeneratedBundle) -> String {
    let bold = Style::new().bold();
    let mut out = String::from("\n");
    banner(&mut out, "✓ Brand skill created successfully!");

    out.push_str(&format!("Skill name: {}\n", params.name));
    out.push_str(&format!("Skill slug: {}\n", bundle.slug));
    out.push_str(&format!("Location: {}\n\n", display_absolute(&bundle.path)));

    out.push_str(&format!("{}\n", bold.apply_to("Created files:")));
    for file in &bundle.files {
        out.push_str(&format!("  • {}\n", file.display()));
    }
    out.push('\n');

    let recap = brand_recap(params);
    if !recap.is_empty() {
        out.push_str(&format!("{}\n", bold.apply_to("Brand information:")));
        for (label, value) in recap {
            out.push_str(&format!("  • {label}: {value}\n"));
        }
        out.push('\n');
    }

    out.push_str(&format!("{}\n", bold.apply_to("Next steps:")));
    out.push_str(&format!(
        "  1. Add logo files to: {}/\n",
        bundle.path.join(layout::ASSETS_DIR).display()
    ));
    out.push_str(&format!(
        "  2. Review and customize: {}\n",
        bundle.path.join(layout::DESCRIPTOR).display()
    ));
    out.push_str(&format!(
        "  3. Add detailed specs to files in: {}/\n",
        bundle.path.join(layout::REFERENCES_DIR).display()
    ));
    out.push_str(&format!("  4. Run validation: brandkit validate {}\n", bundle.slug));
    out
}

fn brand_recap(params: &BrandParameters) -> Vec<(&'static str, &str)> {
    [
        ("Primary color", params.primary_color.as_ref().map(|c| c.as_str())),
        ("Secondary color", params.secondary_color.as_ref().map(|c| c.as_str())),
        ("Accent color", params.accent_color.as_ref().map(|c| c.as_str())),
        ("Heading font", params.heading_font.as_deref()),
        ("Subheading font", params.subheading_font.as_deref()),
        ("Body font", params.body_font.as_deref()),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.map(|v| (label, v)))
    .collect()
}

fn display_absolute(path: &Path) -> String {
    dunce::canonicalize(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

/// Per-bundle packaging result.
pub fn render_packaged(source: &Path, archive: &PackagedArchive) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Packaging: {}\n",
        Style::new().bold().apply_to(&archive.bundle_name)
    ));
    out.push_str(&format!("Source: {}\n", source.display()));
    out.push_str(&format!("Output: {}\n\n", archive.archive_path.display()));

    for skipped in &archive.skipped {
        out.push_str(&format!(
            "   {} {}\n",
            Style::new().dim().apply_to("Skipping:"),
            skipped
        ));
    }
    if !archive.skipped.is_empty() {
        out.push('\n');
    }

    out.push_str(&format!(
        "{} Package created: {}\n",
        Style::new().green().apply_to("✓"),
        archive.archive_path.display()
    ));
    out.push_str(&format!("   Files included: {}\n", archive.file_count()));
    out.push_str(&format!("   Size: {}\n", format_size(archive.bytes)));
    out
}

/// Summary after packaging one or more bundles.
pub fn render_batch_summary(summary: &BatchSummary) -> String {
    let mut out = String::from("\n");
    banner(&mut out, "PACKAGING SUMMARY");

    if !summary.packaged.is_empty() {
        out.push_str(&format!(
            "{} Successfully packaged {} skill(s):\n",
            Style::new().green().apply_to("✓"),
            summary.packaged.len()
        ));
        for archive in &summary.packaged {
            out.push_str(&format!("   • {}\n", archive.archive_path.display()));
        }
        out.push('\n');
    }

    if !summary.failed.is_empty() {
        out.push_str(&format!(
            "{} Failed to package {} skill(s):\n",
            Style::new().red().apply_to("✗"),
            summary.failed.len()
        ));
        for (name, error) in &summary.failed {
            out.push_str(&format!("   • {name}: {error}\n"));
        }
        out.push('\n');
    }

    if summary.all_succeeded() {
        out.push_str("Next steps:\n");
        out.push_str("  1. Upload the .skill files to your skills directory\n");
        out.push_str("  2. Share the archives with your team\n");
    } else {
        out.push_str("Run 'brandkit validate <bundle>' to see what blocks packaging.\n");
    }
    out.push_str(&rule('-'));
    out.push('\n');
    out
}

/// Archive size in KB with one decimal.
pub fn format_size(bytes: u64) -> String {
    format!("{:.1} KB", bytes as f64 / 1024.0)
}
