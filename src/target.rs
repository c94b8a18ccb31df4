use polars::prelude::*;
use tracing::{debug, instrument};

use crate::config::{Overrides, Settings, DEFAULT_TARGET};
use crate::error::{DatasetError, Result};
use crate::sanitize::{SafeColumn, Sanitizer};

/// Values that mark a column as boolean-like once trimmed and lower-cased.
const BOOLEAN_TOKENS: [&str; 6] = ["yes", "no", "true", "false", "0", "1"];

/// A single step of target selection. Steps are tried in [`Strategy::ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Name passed by the caller.
    Preferred,
    /// Name from `TARGET`.
    Environment,
    /// The configured default name, `IsInsurable` unless overridden.
    DefaultName,
    /// First binary column whose name starts with `i`/`I`.
    PrefixedBinary,
    /// First binary column.
    AnyBinary,
    /// Last column of the table.
    LastColumn,
}

impl Strategy {
    pub const ORDER: [Strategy; 6] = [
        Strategy::Preferred,
        Strategy::Environment,
        Strategy::DefaultName,
        Strategy::PrefixedBinary,
        Strategy::AnyBinary,
        Strategy::LastColumn,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetChoice {
    pub column: String,
    pub strategy: Strategy,
}

/// Picks the prediction target column of a table.
#[derive(Debug, Clone)]
pub struct TargetSelector<S = SafeColumn> {
    sanitizer: S,
    default_target: String,
}

impl TargetSelector<SafeColumn> {
    pub fn new() -> Self {
        Self {
            sanitizer: SafeColumn,
            default_target: DEFAULT_TARGET.to_string(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new().with_default_target(settings.default_target.clone())
    }
}

impl Default for TargetSelector<SafeColumn> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Sanitizer> TargetSelector<S> {
    pub fn with_sanitizer<T: Sanitizer>(self, sanitizer: T) -> TargetSelector<T> {
        TargetSelector {
            sanitizer,
            default_target: self.default_target,
        }
    }

    pub fn with_default_target<N: Into<String>>(mut self, name: N) -> Self {
        self.default_target = name.into();
        self
    }

    /// Matches `name` against `columns`, first as given (trimmed) and then in
    /// sanitized form. Blank names never match.
    pub fn resolve_name(&self, columns: &[String], name: Option<&str>) -> Option<String> {
        let name = name.map(str::trim).filter(|n| !n.is_empty())?;
        let sanitized = self.sanitizer.sanitize(name);
        let found = [name, sanitized.as_str()]
            .into_iter()
            .find(|variant| columns.iter().any(|c| c.as_str() == *variant))
            .map(str::to_string);
        found
    }

    #[instrument(skip(self, df), fields(width = df.width()))]
    pub fn select(
        &self,
        df: &DataFrame,
        preferred: Option<&str>,
        overrides: &Overrides,
    ) -> Result<TargetChoice> {
        if df.width() == 0 {
            return Err(DatasetError::EmptyTable);
        }
        let columns: Vec<String> = df
            .get_column_names()
            .into_iter()
            .map(|c| c.to_string())
            .collect();

        let mut binary = None;
        for strategy in Strategy::ORDER {
            let found = match strategy {
                Strategy::Preferred => self.resolve_name(&columns, preferred),
                Strategy::Environment => self.resolve_name(&columns, overrides.target.as_deref()),
                Strategy::DefaultName => self.resolve_name(&columns, Some(self.default_target.as_str())),
                Strategy::PrefixedBinary => binary_columns(df, &mut binary)
                    .iter()
                    .find(|c| c.to_lowercase().starts_with('i'))
                    .cloned(),
                Strategy::AnyBinary => binary_columns(df, &mut binary).first().cloned(),
                Strategy::LastColumn => columns.last().cloned(),
            };
            if let Some(column) = found {
                debug!(%column, ?strategy, "Target column selected");
                return Ok(TargetChoice { column, strategy });
            }
        }
        Err(DatasetError::EmptyTable)
    }
}

/// Selects the target column with the default sanitizer and target name.
pub fn guess_target(df: &DataFrame, preferred: Option<&str>, overrides: &Overrides) -> Result<String> {
    TargetSelector::new()
        .select(df, preferred, overrides)
        .map(|choice| choice.column)
}

/// Names of binary columns in table order, computed on first use.
fn binary_columns<'a>(df: &DataFrame, cache: &'a mut Option<Vec<String>>) -> &'a [String] {
    cache.get_or_insert_with(|| {
        let found: Vec<String> = df
            .iter()
            .filter(|series| is_binary(series))
            .map(|series| series.name().to_string())
            .collect();
        debug!(?found, "Binary columns detected");
        found
    })
}

/// A column is binary when it has at least one present value and is boolean
/// typed, holds at most two distinct values, or only holds yes/no style tokens.
/// Nulls and float NaN count as missing. Columns polars cannot reduce to
/// distinct values are never binary.
pub fn is_binary(series: &Series) -> bool {
    match check_binary(series) {
        Ok(binary) => binary,
        Err(err) => {
            debug!(column = %series.name(), %err, "Column not inspectable, treating as non-binary");
            false
        }
    }
}

fn check_binary(series: &Series) -> PolarsResult<bool> {
    if series.dtype().is_nested() {
        return Ok(false);
    }
    let mut present = series.drop_nulls();
    if present.dtype().is_float() {
        present = present.filter(&present.is_not_nan()?)?;
    }
    if present.is_empty() {
        return Ok(false);
    }
    if present.dtype() == &DataType::Boolean {
        return Ok(true);
    }
    let distinct = present.unique()?;
    if distinct.len() <= 2 {
        return Ok(true);
    }
    let text = distinct.cast(&DataType::String)?;
    let all_tokens = text
        .str()?
        .into_iter()
        .flatten()
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
        .all(|v| BOOLEAN_TOKENS.contains(&v.as_str()));
    Ok(all_tokens)
}
