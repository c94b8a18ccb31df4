use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

use crate::config::{Overrides, Settings, CSV_PATH_VAR, DEFAULT_CANDIDATES};
use crate::error::{DatasetError, Result};

/// One place a dataset may live, in the order it is probed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSource {
    Override(PathBuf),
    Candidate(PathBuf),
}

impl PathSource {
    pub fn path(&self) -> &Path {
        match self {
            Self::Override(p) | Self::Candidate(p) => p,
        }
    }
}

/// Finds the dataset file from an explicit override or a fixed candidate list
#[derive(Debug, Clone)]
pub struct PathResolver {
    root: PathBuf,
    candidates: Vec<PathBuf>,
}

impl PathResolver {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            candidates: DEFAULT_CANDIDATES.iter().map(PathBuf::from).collect(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            root: settings.repo_root.clone(),
            candidates: settings.candidates.clone(),
        }
    }

    pub fn with_candidates<I, P>(mut self, candidates: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.candidates = candidates.into_iter().map(Into::into).collect();
        self
    }

    /// Every source the resolver will probe, highest priority first.
    pub fn sources(&self, overrides: &Overrides) -> Vec<PathSource> {
        overrides
            .csv_path
            .iter()
            .cloned()
            .map(PathSource::Override)
            .chain(
                self.candidates
                    .iter()
                    .map(|c| PathSource::Candidate(self.root.join(c))),
            )
            .collect()
    }

    /// Returns the first existing source. A `CSV_PATH` that does not exist is
    /// skipped rather than reported.
    #[instrument(skip(self))]
    pub fn resolve(&self, overrides: &Overrides) -> Result<PathBuf> {
        for source in self.sources(overrides) {
            let exists = source.path().exists();
            debug!(path = %source.path().display(), exists, "Probing dataset location");
            match source {
                PathSource::Override(path) if exists => return Ok(path),
                PathSource::Override(path) => {
                    warn!(path = %path.display(), "{} does not exist, trying default locations", CSV_PATH_VAR);
                }
                PathSource::Candidate(path) if exists => return Ok(path),
                PathSource::Candidate(_) => {}
            }
        }
        Err(DatasetError::NotFound {
            override_var: CSV_PATH_VAR,
        })
    }
}

/// Resolves the dataset path under `root` using the built-in candidate list.
pub fn resolve_path<P: Into<PathBuf>>(overrides: &Overrides, root: P) -> Result<PathBuf> {
    PathResolver::new(root).resolve(overrides)
}
