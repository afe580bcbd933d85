use serde::{Deserialize, Serialize};

use crate::config::metadata::{FieldType, FieldTypeInfo};
use crate::config_struct;
use crate::field_metadata;

// ============================================================================
// SOURCE TYPE
// ============================================================================

/// Coin-selection strategy mode.
///
/// Five mutually exclusive modes, all reachable from each other in one step.
/// Switching modes never clears fields belonging to other modes: the config
/// is sparse/additive, so a `Mixed` setup can later fall back to a previous
/// mode with its settings intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Static,
    Ai500,
    OiTop,
    OiLow,
    Mixed,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Static => "static",
            SourceType::Ai500 => "ai500",
            SourceType::OiTop => "oi_top",
            SourceType::OiLow => "oi_low",
            SourceType::Mixed => "mixed",
        }
    }

    pub fn from_str(value: &str) -> Self {
        match value {
            "ai500" => SourceType::Ai500,
            "oi_top" => SourceType::OiTop,
            "oi_low" => SourceType::OiLow,
            "mixed" => SourceType::Mixed,
            _ => SourceType::Static,
        }
    }

    /// All modes in the order the selector presents them.
    pub fn all() -> [SourceType; 5] {
        [
            SourceType::Static,
            SourceType::Ai500,
            SourceType::OiTop,
            SourceType::OiLow,
            SourceType::Mixed,
        ]
    }
}

impl FieldTypeInfo for SourceType {
    fn field_type() -> FieldType {
        FieldType::String
    }
}

// ============================================================================
// DEFAULTS
// ============================================================================

pub const DEFAULT_AI500_LIMIT: u32 = 10;
pub const DEFAULT_OI_TOP_LIMIT: u32 = 10;
pub const DEFAULT_OI_LOW_LIMIT: u32 = 10;
pub const DEFAULT_BINANCE_TOP_VOL_LIMIT: u32 = 100;
pub const DEFAULT_BINANCE_FILTER_INTERVAL: u32 = 30;
pub const DEFAULT_BLACKBOX_CUTOFF_LIMIT: u32 = 5;

/// Cache refresh intervals (minutes) the Binance top-volume source supports.
pub const BINANCE_FILTER_INTERVALS: [u32; 4] = [15, 30, 60, 120];

// ============================================================================
// COIN SOURCE CONFIGURATION
// ============================================================================

config_struct! {
    /// Coin-selection pipeline configuration.
    ///
    /// Dependent numeric fields are `Option` where `None` means "never set";
    /// the accessor methods below resolve them to their defaults, so an
    /// enabled source can never present an undefined limit. Disabling a
    /// source leaves its numbers in place - re-enabling restores them.
    pub struct CoinSourceConfig {
        #[metadata(field_metadata! {
            label: "source_type",
            hint: "mixed_desc",
        })]
        source_type: SourceType = SourceType::Static,

        /// Normalized symbols, ordered, unique.
        #[metadata(field_metadata! {
            label: "static_coins",
            hint: "static_desc",
        })]
        static_coins: Vec<String> = Vec::new(),

        /// Normalized symbols dropped from every source, ordered, unique.
        #[metadata(field_metadata! {
            label: "excluded_coins",
            hint: "excluded_coins_desc",
        })]
        excluded_coins: Vec<String> = Vec::new(),

        #[metadata(field_metadata! {
            label: "use_ai500",
            hint: "ai500_desc",
        })]
        use_ai500: bool = false,

        /// When true the AI500 feed is taken unfiltered and `ai500_limit` is ignored.
        #[metadata(field_metadata! {
            label: "ai500_fetch_all",
        })]
        ai500_fetch_all: bool = false,

        #[metadata(field_metadata! {
            label: "ai500_limit",
            min: 1,
            unit: "coins",
        })]
        #[serde(skip_serializing_if = "Option::is_none")]
        ai500_limit: Option<u32> = None,

        #[metadata(field_metadata! {
            label: "use_oi_top",
            hint: "oi_top_desc",
        })]
        use_oi_top: bool = false,

        #[metadata(field_metadata! {
            label: "oi_top_limit",
            min: 1,
            unit: "coins",
        })]
        #[serde(skip_serializing_if = "Option::is_none")]
        oi_top_limit: Option<u32> = None,

        #[metadata(field_metadata! {
            label: "use_oi_low",
            hint: "oi_low_desc",
        })]
        use_oi_low: bool = false,

        #[metadata(field_metadata! {
            label: "oi_low_limit",
            min: 1,
            unit: "coins",
        })]
        #[serde(skip_serializing_if = "Option::is_none")]
        oi_low_limit: Option<u32> = None,

        #[metadata(field_metadata! {
            label: "use_binance_top_vol",
        })]
        use_binance_top_vol: bool = false,

        #[metadata(field_metadata! {
            label: "binance_top_vol_limit",
            min: 1,
            unit: "coins",
        })]
        #[serde(skip_serializing_if = "Option::is_none")]
        binance_top_vol_limit: Option<u32> = None,

        /// One of [`BINANCE_FILTER_INTERVALS`].
        #[metadata(field_metadata! {
            label: "binance_filter_interval",
            min: 15,
            max: 120,
            unit: "minutes",
        })]
        #[serde(skip_serializing_if = "Option::is_none")]
        binance_filter_interval: Option<u32> = None,

        /// Final truncation applied after all sources combine (mixed mode only).
        #[metadata(field_metadata! {
            label: "blackbox_cutoff_limit",
            hint: "pipeline_desc",
            min: 1,
            unit: "coins",
        })]
        #[serde(skip_serializing_if = "Option::is_none")]
        blackbox_cutoff_limit: Option<u32> = None,
    }
}

impl FieldTypeInfo for CoinSourceConfig {
    fn field_type() -> FieldType {
        FieldType::Object
    }
}

impl CoinSourceConfig {
    /// AI500 fetch limit, defaulting to 10. Ignored when `ai500_fetch_all` is set.
    pub fn ai500_limit(&self) -> u32 {
        self.ai500_limit.unwrap_or(DEFAULT_AI500_LIMIT)
    }

    /// OI-increase fetch limit, defaulting to 10.
    pub fn oi_top_limit(&self) -> u32 {
        self.oi_top_limit.unwrap_or(DEFAULT_OI_TOP_LIMIT)
    }

    /// OI-decrease fetch limit, defaulting to 10.
    pub fn oi_low_limit(&self) -> u32 {
        self.oi_low_limit.unwrap_or(DEFAULT_OI_LOW_LIMIT)
    }

    /// Binance top-volume prefetch limit, defaulting to 100.
    pub fn binance_top_vol_limit(&self) -> u32 {
        self.binance_top_vol_limit
            .unwrap_or(DEFAULT_BINANCE_TOP_VOL_LIMIT)
    }

    /// Binance volume cache refresh interval in minutes, defaulting to 30.
    pub fn binance_filter_interval(&self) -> u32 {
        self.binance_filter_interval
            .unwrap_or(DEFAULT_BINANCE_FILTER_INTERVAL)
    }

    /// Blackbox truncation limit, defaulting to 5.
    pub fn blackbox_cutoff_limit(&self) -> u32 {
        self.blackbox_cutoff_limit
            .unwrap_or(DEFAULT_BLACKBOX_CUTOFF_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CoinSourceConfig::default();
        assert_eq!(config.source_type, SourceType::Static);
        assert!(config.static_coins.is_empty());
        assert!(!config.use_ai500);
        assert_eq!(config.ai500_limit(), 10);
        assert_eq!(config.binance_top_vol_limit(), 100);
        assert_eq!(config.binance_filter_interval(), 30);
        assert_eq!(config.blackbox_cutoff_limit(), 5);
    }

    #[test]
    fn test_source_type_round_trip() {
        for mode in SourceType::all() {
            assert_eq!(SourceType::from_str(mode.as_str()), mode);
        }
        assert_eq!(SourceType::from_str("garbage"), SourceType::Static);
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        // A sparse document from an older frontend must not fail.
        let config: CoinSourceConfig =
            serde_json::from_str(r#"{"source_type":"mixed","use_ai500":true}"#).unwrap();
        assert_eq!(config.source_type, SourceType::Mixed);
        assert!(config.use_ai500);
        assert_eq!(config.ai500_limit, None);
        assert_eq!(config.ai500_limit(), DEFAULT_AI500_LIMIT);
    }

    #[test]
    fn test_unset_numerics_survive_toml_round_trip() {
        let config = CoinSourceConfig::default();
        let text = toml::to_string(&config).unwrap();
        let back: CoinSourceConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
