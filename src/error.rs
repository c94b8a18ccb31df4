use std::path::PathBuf;

use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Could not locate dataset. Set {override_var} or place modeldata.csv under src/data/.")]
    NotFound { override_var: &'static str },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    #[error("Dataframe has no columns to select a target from.")]
    EmptyTable,

    #[error("Column inspection error: {0}")]
    Column(#[from] PolarsError),

    #[error("Invalid settings file {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, DatasetError>;
