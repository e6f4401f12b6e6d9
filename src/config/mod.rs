//! Config module - match tuning data and loading.

mod data;
mod error;
mod plugin;

pub use data::{load_match_config, MatchConfig, MATCH_CONFIG_PATH};
pub use error::DataLoadError;
pub use plugin::ConfigPlugin;
