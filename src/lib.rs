pub mod config;
pub mod data_loader;
pub mod error;
pub mod resolver;
pub mod sanitize;
pub mod target;

pub use config::{Overrides, Settings};
pub use data_loader::{load_dataset, load_dataset_from, DatasetLoader};
pub use error::{DatasetError, Result};
pub use resolver::{resolve_path, PathResolver};
pub use sanitize::{SafeColumn, Sanitizer};
pub use target::{guess_target, Strategy, TargetChoice, TargetSelector};
