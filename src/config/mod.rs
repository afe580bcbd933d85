//! Configuration system for the coin-selection strategy.
//!
//! Schemas are declared once with embedded defaults through `config_struct!`,
//! which also emits the per-field rendering metadata the frontend consumes.
//! All mutations flow through the explicit patch types in [`patch`]; the
//! global instance and persistence helpers live in [`utils`].

mod macros;
pub mod metadata;
pub mod patch;
pub mod schemas;
pub mod summary;
pub mod utils;

pub use metadata::collect_config_metadata;
pub use patch::{CoinSourcePatch, RegisterPatch};
pub use schemas::*;
pub use summary::PipelineSummary;
pub use utils::{
    get_config_clone, is_config_initialized, load_config, load_config_from_path, reload_config,
    reload_config_from_path, save_config, update_config_section, update_with_diff, with_config,
    CONFIG, CONFIG_FILE_PATH,
};
