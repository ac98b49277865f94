use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root scanned when no override is given.
pub const DEFAULT_ROOT: &str = "/home/ty/Repositories/ai_workspace/esaf-framework/src";

/// Inputs for one fix run. Passed explicitly into discovery and the driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixConfig {
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// File-name globs, matched case-sensitively.
    #[serde(default = "default_patterns")]
    pub patterns: Vec<String>,
}

impl Default for FixConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            patterns: default_patterns(),
        }
    }
}

impl FixConfig {
    /// Default patterns rooted at `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(DEFAULT_ROOT)
}

fn default_patterns() -> Vec<String> {
    vec!["*.ts".to_string(), "*.tsx".to_string()]
}
