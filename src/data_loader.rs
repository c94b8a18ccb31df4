use polars::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::config::{Overrides, Settings, DEFAULT_TARGET};
use crate::error::{DatasetError, Result};
use crate::resolver::PathResolver;

/// Column name used by older exports for what is now `IsInsurable`.
pub const LEGACY_TARGET: &str = "SLA_Breached";

/// Cell contents read as missing, in addition to empty fields.
pub const NA_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// DatasetLoader locates the modeling dataset and reads it into a DataFrame
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    resolver: PathResolver,
}

impl DatasetLoader {
    pub fn new(resolver: PathResolver) -> Self {
        Self { resolver }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(PathResolver::from_settings(settings))
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    /// Resolves the dataset path and loads it
    pub fn load(&self, overrides: &Overrides) -> Result<DataFrame> {
        let path = self.resolver.resolve(overrides)?;
        info!(path = %path.display(), "Dataset located");
        load_dataset_from(path)
    }
}

/// Loads the dataset found under `root` using the built-in candidate list.
pub fn load_dataset<P: Into<PathBuf>>(overrides: &Overrides, root: P) -> Result<DataFrame> {
    DatasetLoader::new(PathResolver::new(root)).load(overrides)
}

/// Parses a CSV file with a header row, inferring column types, then applies
/// the legacy column rename. Empty fields and [`NA_TOKENS`] load as null.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_dataset_from<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
    let path = path.as_ref();
    let parse_error = |source: PolarsError| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .map_parse_options(|opts| {
            opts.with_null_values(Some(NullValues::AllColumns(
                NA_TOKENS.iter().map(|t| (*t).into()).collect(),
            )))
        })
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(parse_error)?
        .finish()
        .map_err(parse_error)?;
    debug!(shape = ?df.shape(), "Dataset parsed");

    if apply_legacy_rename(&mut df)? {
        info!("Renamed legacy column {} to {}", LEGACY_TARGET, DEFAULT_TARGET);
    }
    Ok(df)
}

/// Renames `SLA_Breached` to `IsInsurable` when only the former is present.
/// Returns whether a rename happened.
pub fn apply_legacy_rename(df: &mut DataFrame) -> Result<bool> {
    let has_current = df.get_column_index(DEFAULT_TARGET).is_some();
    let has_legacy = df.get_column_index(LEGACY_TARGET).is_some();
    if has_current || !has_legacy {
        return Ok(false);
    }
    df.rename(LEGACY_TARGET, DEFAULT_TARGET.into())?;
    Ok(true)
}
