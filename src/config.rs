//! Project configuration (brandkit.yaml)
//!
//! Settings resolve in layers, lowest precedence first: built-in defaults,
//! the YAML file, `BRANDKIT_*` environment variables, command-line flags.
//! The environment layer is handled by clap, which folds it into the flag
//! values before they reach [`ProjectConfig`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BrandkitError, Result, config};
use crate::packager::{DEFAULT_EXCLUDES, ExclusionPatternSet};

/// Implicit configuration file name, looked up in the current directory
pub const CONFIG_FILE: &str = "brandkit.yaml";

pub const DEFAULT_BUNDLE_PATH: &str = "brand-skills";
pub const DEFAULT_OUTPUT_DIR: &str = "dist";

pub const PATH_ENV: &str = "BRANDKIT_PATH";
pub const OUTPUT_ENV: &str = "BRANDKIT_OUTPUT";

/// Contents of `brandkit.yaml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Base directory holding bundles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Archive output directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// Exclusion patterns replacing the defaults
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,
}

impl ProjectConfig {
    /// Parse configuration from YAML. Blank input is an empty configuration.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load the configuration file.
    ///
    /// An explicit file must exist. Without one, `brandkit.yaml` in `dir` is
    /// used when present and defaults otherwise.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        let path = match explicit {
            Some(path) if !path.is_file() => {
                return Err(config::not_found(path.display().to_string()));
            }
            Some(path) => path.to_path_buf(),
            None => {
                let implicit = dir.join(CONFIG_FILE);
                if !implicit.is_file() {
                    debug!("No {} found, using defaults", CONFIG_FILE);
                    return Ok(Self::default());
                }
                implicit
            }
        };

        debug!(path = %path.display(), "Loading configuration");
        let content = fs::read_to_string(&path)
            .map_err(|e| config::read_failed(path.display().to_string(), e.to_string()))?;
        Self::from_yaml(&content).map_err(|e| match e {
            BrandkitError::ConfigParseFailed { reason, .. } => {
                config::parse_failed(path.display().to_string(), reason)
            }
            other => other,
        })
    }

    /// Bundle base path: flag (or env), then file, then default.
    pub fn bundle_path(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BUNDLE_PATH))
    }

    /// Archive output directory: flag (or env), then file, then default.
    pub fn output_dir(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.output.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }

    /// Exclusion patterns. An explicitly empty list disables exclusion.
    pub fn exclusions(&self, flag: Option<Vec<String>>) -> ExclusionPatternSet {
        match flag.or_else(|| self.exclude.clone()) {
            Some(patterns) => ExclusionPatternSet::new(patterns),
            None => ExclusionPatternSet::new(DEFAULT_EXCLUDES),
        }
    }
}
