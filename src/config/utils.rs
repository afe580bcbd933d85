/// Configuration utilities - loading, reloading, and access helpers
///
/// This module provides utility functions for working with the configuration system:
/// - Loading configuration from disk
/// - Hot-reloading configuration at runtime
/// - Thread-safe access helpers
/// - In-memory updates with optional persistence
use once_cell::sync::OnceCell;
use std::path::Path;
use std::sync::RwLock;

use super::schemas::StrategyConfig;
use crate::errors::ConfigError;
use crate::logger::{self, LogTag};

/// Global configuration instance
///
/// This is the single source of truth for all configuration values.
/// Access it using the helper functions below.
pub static CONFIG: OnceCell<RwLock<StrategyConfig>> = OnceCell::new();

/// Default configuration file path
pub const CONFIG_FILE_PATH: &str = "data/config.toml";

/// Load configuration from disk and initialize the global CONFIG
///
/// This should be called once at startup. If the config file doesn't exist,
/// it will use default values from the schema definitions.
pub fn load_config() -> Result<(), ConfigError> {
    load_config_from_path(CONFIG_FILE_PATH)
}

/// Load configuration from a specific file path
pub fn load_config_from_path(path: &str) -> Result<(), ConfigError> {
    let config = if Path::new(path).exists() {
        read_config_file(path)?
    } else {
        logger::warning(
            LogTag::Config,
            &format!("Config file '{}' not found, using default values", path),
        );
        StrategyConfig::default()
    };

    CONFIG
        .set(RwLock::new(config))
        .map_err(|_| ConfigError::AlreadyInitialized)?;

    Ok(())
}

/// Reload configuration from disk
///
/// This allows hot-reloading configuration changes without restarting the
/// application. The configuration is atomically replaced, so reads are
/// always consistent.
pub fn reload_config() -> Result<(), ConfigError> {
    reload_config_from_path(CONFIG_FILE_PATH)
}

/// Reload configuration from a specific file path
pub fn reload_config_from_path(path: &str) -> Result<(), ConfigError> {
    let new_config = read_config_file(path)?;

    let config_lock = CONFIG.get().ok_or(ConfigError::NotInitialized)?;
    let mut config = config_lock
        .write()
        .map_err(|_| ConfigError::LockPoisoned)?;
    *config = new_config;

    Ok(())
}

fn read_config_file(path: &str) -> Result<StrategyConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_string(),
        source,
    })?;

    toml::from_str::<StrategyConfig>(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_string(),
        source,
    })
}

/// Execute a function with read access to the configuration
///
/// This is the recommended way to read configuration values.
/// The closure receives an immutable reference to the StrategyConfig.
///
/// # Panics
/// Panics if the config has not been initialized via [`load_config`].
pub fn with_config<F, R>(f: F) -> R
where
    F: FnOnce(&StrategyConfig) -> R,
{
    let config_lock = CONFIG
        .get()
        .expect("Config not initialized. Call load_config() first.");

    let config = config_lock
        .read()
        .expect("Failed to acquire config read lock");

    f(&config)
}

/// Get a clone of the entire configuration
///
/// This is useful when you need to hold onto config values across await
/// points. Note: this clones the entire config, so use with_config() for
/// simple reads.
pub fn get_config_clone() -> StrategyConfig {
    with_config(|cfg| cfg.clone())
}

/// Save the current configuration to disk
///
/// Writes the current in-memory configuration to the specified file,
/// creating parent directories as needed. Useful for persisting runtime
/// changes made through the editors.
pub fn save_config(path: Option<&str>) -> Result<(), ConfigError> {
    let path = path.unwrap_or(CONFIG_FILE_PATH);

    let config_str = with_config(|cfg| toml::to_string_pretty(cfg))?;

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: path.to_string(),
                source,
            })?;
        }
    }

    std::fs::write(path, config_str).map_err(|source| ConfigError::Write {
        path: path.to_string(),
        source,
    })?;

    Ok(())
}

/// Check if configuration has been initialized
pub fn is_config_initialized() -> bool {
    CONFIG.get().is_some()
}

// ============================================================================
// CONFIG UPDATE HELPERS
// ============================================================================

/// Update the config in-memory and optionally save to disk
///
/// Generic helper for applying any mutation. The closure receives a mutable
/// reference; the write lock is released before the optional save.
pub fn update_config_section<F>(update_fn: F, save_to_disk: bool) -> Result<(), ConfigError>
where
    F: FnOnce(&mut StrategyConfig),
{
    let config_lock = CONFIG.get().ok_or(ConfigError::NotInitialized)?;

    {
        let mut config = config_lock
            .write()
            .map_err(|_| ConfigError::LockPoisoned)?;

        update_fn(&mut config);
    } // Lock released here

    if save_to_disk {
        save_config(None)?;
    }

    Ok(())
}

/// Get a snapshot of config state before and after an update
///
/// Useful for tracking changes and generating diff responses.
pub fn update_with_diff<F, T>(
    get_section: impl Fn(&StrategyConfig) -> T,
    update_fn: F,
    save_to_disk: bool,
) -> Result<(T, T), ConfigError>
where
    F: FnOnce(&mut StrategyConfig),
    T: Clone,
{
    let old_value = with_config(|cfg| get_section(cfg));

    update_config_section(update_fn, save_to_disk)?;

    let new_value = with_config(|cfg| get_section(cfg));

    Ok((old_value, new_value))
}
