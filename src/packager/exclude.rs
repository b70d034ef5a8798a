//! Exclusion patterns for packaging.

/// Patterns excluded when none are configured.
pub const DEFAULT_EXCLUDES: [&str; 8] = [
    ".placeholder",
    "__pycache__",
    ".pyc",
    ".DS_Store",
    ".git",
    "node_modules",
    ".vscode",
    ".idea",
];

/// Case-insensitive substring patterns.
///
/// A path is excluded when its lowercased form contains any pattern anywhere,
/// so `.git` also matches `.gitignore` and `my.github/x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionPatternSet {
    patterns: Vec<String>,
}

impl Default for ExclusionPatternSet {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDES)
    }
}

impl ExclusionPatternSet {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| p.as_ref().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect();
        Self { patterns }
    }

    /// Set that excludes nothing.
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Pattern matching `path`, if any.
    pub fn matching(&self, path: &str) -> Option<&str> {
        let lowered = path.to_lowercase();
        self.patterns
            .iter()
            .find(|p| lowered.contains(p.as_str()))
            .map(String::as_str)
    }

    pub fn is_excluded(&self, path: &str) -> bool {
        self.matching(path).is_some()
    }
}
