//! Validation report rendering

use console::Style;

use super::{banner, rule};
use crate::validator::{Severity, ValidationReport};

const SECTIONS: [(Severity, &str, &str); 4] = [
    (Severity::Error, "ERRORS:", "✗"),
    (Severity::Warning, "WARNINGS:", "⚠"),
    (Severity::Suggestion, "SUGGESTIONS:", "💡"),
    (Severity::Info, "INFO:", "ℹ"),
];

fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::Error => Style::new().red(),
        Severity::Warning => Style::new().yellow(),
        Severity::Suggestion => Style::new().cyan(),
        Severity::Info => Style::new().dim(),
    }
}

/// Styled report: header, one block per non-empty channel, summary line.
pub fn render_report(report: &ValidationReport) -> String {
    let mut out = String::from("\n");
    banner(&mut out, "BRAND ASSET VALIDATION REPORT");

    for (severity, title, glyph) in SECTIONS {
        let findings = report.channel(severity);
        if findings.is_empty() {
            continue;
        }
        let style = severity_style(severity);
        out.push_str(&style.clone().bold().apply_to(title).to_string());
        out.push('\n');
        for finding in findings {
            out.push_str(&format!("  {} {}\n", style.apply_to(glyph), finding));
        }
        out.push('\n');
    }

    out.push_str(&rule('='));
    out.push('\n');
    out.push_str(&summary_line(report));
    out.push('\n');
    out.push_str(&rule('='));
    out.push('\n');
    out
}

/// One-line verdict for the report footer.
pub fn summary_line(report: &ValidationReport) -> String {
    let errors = report.errors().len();
    let warnings = report.warnings().len();

    if errors > 0 {
        Style::new()
            .red()
            .bold()
            .apply_to(format!("✗ Validation failed with {errors} error(s)"))
            .to_string()
    } else if warnings > 0 {
        Style::new()
            .yellow()
            .bold()
            .apply_to(format!("✓ Validation passed with {warnings} warning(s)"))
            .to_string()
    } else {
        Style::new()
            .green()
            .bold()
            .apply_to("✓ All validations passed!")
            .to_string()
    }
}
