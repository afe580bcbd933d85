//! Structured error types for the configuration layer.
//!
//! Register-store I/O uses `anyhow` with context at the call sites; the
//! typed errors here cover the global config lifecycle where callers need
//! to distinguish failure classes.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to write config file '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("config not initialized; call load_config() first")]
    NotInitialized,

    #[error("config already initialized")]
    AlreadyInitialized,

    #[error("config lock poisoned")]
    LockPoisoned,
}
