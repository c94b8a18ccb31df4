use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DatasetError, Result};

/// Environment variable naming an explicit dataset file.
pub const CSV_PATH_VAR: &str = "CSV_PATH";
/// Environment variable naming the desired target column.
pub const TARGET_VAR: &str = "TARGET";
/// Settings file picked up by the binary when present in the working directory.
pub const SETTINGS_FILE: &str = "tabular_target.toml";

/// Fallback dataset locations, relative to the repository root, in probe order.
pub const DEFAULT_CANDIDATES: [&str; 6] = [
    "src/data/modeldata.csv",
    "src/data/modeldata_demo.csv",
    "Project/src/data/modeldata.csv",
    "Project/src/data/modeldata_demo.csv",
    "src/data/datasets/tabular/modeldata.csv",
    "src/data/datasets/tabular/modeldata_demo.csv",
];

pub const DEFAULT_TARGET: &str = "IsInsurable";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub repo_root: PathBuf,
    pub candidates: Vec<PathBuf>,
    pub default_target: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            repo_root: PathBuf::from("."),
            candidates: DEFAULT_CANDIDATES.iter().map(PathBuf::from).collect(),
            default_target: DEFAULT_TARGET.to_string(),
        }
    }
}

impl Settings {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config_error = |message: String| DatasetError::Config {
            path: path.to_path_buf(),
            message,
        };
        let contents = fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
        toml::from_str(&contents).map_err(|e| config_error(e.to_string()))
    }

    /// Loads `path` if it exists, otherwise falls back to the built-in defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn with_repo_root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.repo_root = root.into();
        self
    }
}

/// Values normally taken from `CSV_PATH` and `TARGET`.
///
/// The process environment is read once, at the program boundary, and the
/// result threaded through as a plain value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub csv_path: Option<PathBuf>,
    pub target: Option<String>,
}

impl Overrides {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            csv_path: lookup(CSV_PATH_VAR)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            target: lookup(TARGET_VAR),
        }
    }

    pub fn with_csv_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.csv_path = Some(path.into());
        self
    }

    pub fn with_target<S: Into<String>>(mut self, target: S) -> Self {
        self.target = Some(target.into());
        self
    }
}
