use anyhow::Context;
use tabular_target::config::SETTINGS_FILE;
use tabular_target::{DatasetLoader, Overrides, Settings, TargetSelector};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

#[instrument]
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    debug!("Loading settings from path: {}", SETTINGS_FILE);
    let settings = Settings::load_or_default(SETTINGS_FILE)
        .with_context(|| format!("Failed to load {}", SETTINGS_FILE))?;
    debug!(?settings, "Settings loaded");

    // The only place the process environment is consulted
    let overrides = Overrides::from_env();
    debug!(?overrides, "Environment overrides read");

    let df = DatasetLoader::from_settings(&settings)
        .load(&overrides)
        .context("Failed to load dataset")?;
    info!(shape = ?df.shape(), "Dataset loaded");

    let choice = TargetSelector::from_settings(&settings)
        .select(&df, None, &overrides)
        .context("Failed to select target column")?;
    info!(target = %choice.column, strategy = ?choice.strategy, "Target column chosen");

    println!("{}", choice.column);
    Ok(())
}
