//! Terminal presentation
//!
//! Renders validation reports and command summaries as styled text. The
//! renderers return strings; commands decide where they go.

pub mod report;
pub mod summary;

use console::Style;

pub use report::render_report;
pub use summary::{render_batch_summary, render_generated, render_packaged};

/// Width of the `=` and `-` rules framing each block
pub const RULE_WIDTH: usize = 70;

fn rule(ch: char) -> String {
    ch.to_string().repeat(RULE_WIDTH)
}

/// Heading framed by `=` rules.
fn banner(out: &mut String, title: &str) {
    let bold = Style::new().bold();
    out.push_str(&rule('='));
    out.push('\n');
    out.push_str(&bold.apply_to(title).to_string());
    out.push('\n');
    out.push_str(&rule('='));
    out.push_str("\n\n");
}
