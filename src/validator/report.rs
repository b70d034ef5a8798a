//! Validation report and the accumulator that builds it.

use serde::Serialize;

/// Channel a finding is recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks packaging
    Error,
    /// Non-blocking unless validating in strict mode
    Warning,
    /// Advisory
    Suggestion,
    /// Observational
    Info,
}

/// Findings of one validation pass, grouped by severity in the order produced.
///
/// Only [`ReportBuilder`] creates reports; once built a report is read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    errors: Vec<String>,
    warnings: Vec<String>,
    suggestions: Vec<String>,
    info: Vec<String>,
}

impl ValidationReport {
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn info(&self) -> &[String] {
        &self.info
    }

    /// Findings recorded under `severity`.
    pub fn channel(&self, severity: Severity) -> &[String] {
        match severity {
            Severity::Error => &self.errors,
            Severity::Warning => &self.warnings,
            Severity::Suggestion => &self.suggestions,
            Severity::Info => &self.info,
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Pass/fail verdict. Warnings only fail the bundle in strict mode.
    pub fn is_valid(&self, strict: bool) -> bool {
        if self.has_errors() {
            return false;
        }
        !(strict && !self.warnings.is_empty())
    }

    /// True when any finding in `severity` contains `needle`.
    pub fn contains(&self, severity: Severity, needle: &str) -> bool {
        self.channel(severity).iter().any(|m| m.contains(needle))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Accumulator threaded by `&mut` through every rule of a validation pass.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    report: ValidationReport,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.report.errors.push(message.into());
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.report.warnings.push(message.into());
    }

    pub fn suggestion(&mut self, message: impl Into<String>) {
        self.report.suggestions.push(message.into());
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.report.info.push(message.into());
    }

    pub fn push(&mut self, severity: Severity, message: impl Into<String>) {
        match severity {
            Severity::Error => self.error(message),
            Severity::Warning => self.warning(message),
            Severity::Suggestion => self.suggestion(message),
            Severity::Info => self.info(message),
        }
    }

    pub fn finish(self) -> ValidationReport {
        self.report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_valid() {
        let report = ReportBuilder::new().finish();
        assert!(report.is_valid(false));
        assert!(report.is_valid(true));
    }

    #[test]
    fn test_error_fails_both_modes() {
        let mut builder = ReportBuilder::new();
        builder.error("boom");
        let report = builder.finish();
        assert!(!report.is_valid(false));
        assert!(!report.is_valid(true));
    }

    #[test]
    fn test_warning_fails_only_strict() {
        let mut builder = ReportBuilder::new();
        builder.warning("careful");
        let report = builder.finish();
        assert!(report.is_valid(false));
        assert!(!report.is_valid(true));
    }

    #[test]
    fn test_suggestions_and_info_never_fail() {
        let mut builder = ReportBuilder::new();
        builder.suggestion("maybe");
        builder.info("fyi");
        let report = builder.finish();
        assert!(report.is_valid(true));
    }

    #[test]
    fn test_channels_keep_order() {
        let mut builder = ReportBuilder::new();
        builder.push(Severity::Warning, "first");
        builder.info("noise");
        builder.push(Severity::Warning, "second");
        let report = builder.finish();
        assert_eq!(report.warnings(), ["first", "second"]);
        assert_eq!(report.channel(Severity::Info), ["noise"]);
        assert!(report.contains(Severity::Warning, "sec"));
        assert!(!report.contains(Severity::Error, "first"));
    }

    #[test]
    fn test_json_shape() {
        let mut builder = ReportBuilder::new();
        builder.error("missing");
        let json: serde_json::Value =
            serde_json::from_str(&builder.finish().to_json().unwrap()).unwrap();
        assert_eq!(json["errors"][0], "missing");
        assert!(json["warnings"].as_array().unwrap().is_empty());
        assert!(json["suggestions"].is_array());
        assert!(json["info"].is_array());
    }
}
