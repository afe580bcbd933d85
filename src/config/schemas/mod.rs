// Config schema submodule - one file per section, re-exported flat

use crate::config_struct;

mod coin_source;
mod register;

pub use coin_source::*;
pub use register::*;

// ============================================================================
// ROOT CONFIGURATION
// ============================================================================

config_struct! {
    /// Root configuration structure containing all sub-configurations
    pub struct StrategyConfig {
        /// Coin-selection pipeline configuration
        coin_source: CoinSourceConfig = CoinSourceConfig::default(),

        /// Decision-history register configuration
        register: RegisterConfig = RegisterConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_defaults() {
        let config = StrategyConfig::default();
        assert_eq!(config.coin_source.source_type, SourceType::Static);
        assert!(config.register.enabled);
    }

    #[test]
    fn test_root_toml_round_trip() {
        let config = StrategyConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains("[coin_source]"));
        assert!(text.contains("[register]"));
        let back: StrategyConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
