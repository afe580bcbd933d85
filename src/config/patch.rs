//! Explicit patch types for config mutation.
//!
//! Every editor mutation is expressed as a partial patch applied to the
//! current config, producing a fully-formed replacement value. The apply
//! step is also where cross-field rules live: enabling a source for the
//! first time initializes its dependent fields, so the frontend never shows
//! an enabled source with an undefined limit.

use serde::{Deserialize, Serialize};

use super::schemas::{
    CoinSourceConfig, RegisterConfig, SourceType, DEFAULT_BINANCE_FILTER_INTERVAL,
    DEFAULT_BINANCE_TOP_VOL_LIMIT, MAX_REGISTER_RECORDS, MIN_REGISTER_RECORDS,
};

/// Partial update for [`CoinSourceConfig`]. Unset fields leave the current
/// value untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoinSourcePatch {
    pub source_type: Option<SourceType>,
    pub static_coins: Option<Vec<String>>,
    pub excluded_coins: Option<Vec<String>>,
    pub use_ai500: Option<bool>,
    pub ai500_fetch_all: Option<bool>,
    pub ai500_limit: Option<u32>,
    pub use_oi_top: Option<bool>,
    pub oi_top_limit: Option<u32>,
    pub use_oi_low: Option<bool>,
    pub oi_low_limit: Option<u32>,
    pub use_binance_top_vol: Option<bool>,
    pub binance_top_vol_limit: Option<u32>,
    pub binance_filter_interval: Option<u32>,
    pub blackbox_cutoff_limit: Option<u32>,
}

impl CoinSourcePatch {
    /// Apply this patch to a config, returning the replacement value.
    ///
    /// Numeric limits clamp to a minimum of 1. Enable transitions
    /// (false -> true) initialize dependent fields that were never set:
    /// AI500 defaults to the unfiltered feed, Binance top-volume gets its
    /// prefetch limit and cache interval. Disabling never clears numbers,
    /// so re-enabling restores the previous values.
    pub fn apply(&self, config: &CoinSourceConfig) -> CoinSourceConfig {
        let mut next = config.clone();

        if let Some(source_type) = self.source_type {
            next.source_type = source_type;
        }
        if let Some(coins) = &self.static_coins {
            next.static_coins = coins.clone();
        }
        if let Some(coins) = &self.excluded_coins {
            next.excluded_coins = coins.clone();
        }

        // Numerics first, so enable transitions below see same-patch values.
        if let Some(limit) = self.ai500_limit {
            next.ai500_limit = Some(limit.max(1));
        }
        if let Some(limit) = self.oi_top_limit {
            next.oi_top_limit = Some(limit.max(1));
        }
        if let Some(limit) = self.oi_low_limit {
            next.oi_low_limit = Some(limit.max(1));
        }
        if let Some(limit) = self.binance_top_vol_limit {
            next.binance_top_vol_limit = Some(limit.max(1));
        }
        if let Some(interval) = self.binance_filter_interval {
            next.binance_filter_interval = Some(interval);
        }
        if let Some(limit) = self.blackbox_cutoff_limit {
            next.blackbox_cutoff_limit = Some(limit.max(1));
        }
        if let Some(fetch_all) = self.ai500_fetch_all {
            next.ai500_fetch_all = fetch_all;
        }

        if let Some(enabled) = self.use_ai500 {
            if enabled && !config.use_ai500 && self.ai500_fetch_all.is_none() {
                // First enable defaults to the unfiltered feed.
                next.ai500_fetch_all = true;
            }
            next.use_ai500 = enabled;
        }
        if let Some(enabled) = self.use_binance_top_vol {
            if enabled && !config.use_binance_top_vol {
                if next.binance_top_vol_limit.is_none() {
                    next.binance_top_vol_limit = Some(DEFAULT_BINANCE_TOP_VOL_LIMIT);
                }
                if next.binance_filter_interval.is_none() {
                    next.binance_filter_interval = Some(DEFAULT_BINANCE_FILTER_INTERVAL);
                }
            }
            next.use_binance_top_vol = enabled;
        }
        // OI limits stay unset on enable; the accessor default covers them.
        if let Some(enabled) = self.use_oi_top {
            next.use_oi_top = enabled;
        }
        if let Some(enabled) = self.use_oi_low {
            next.use_oi_low = enabled;
        }

        next
    }
}

/// Partial update for [`RegisterConfig`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterPatch {
    pub enabled: Option<bool>,
    pub max_records: Option<u32>,
    pub include_decisions: Option<bool>,
    pub include_market_data: Option<bool>,
}

impl RegisterPatch {
    /// Apply this patch, clamping `max_records` into the slider range.
    pub fn apply(&self, config: &RegisterConfig) -> RegisterConfig {
        let mut next = config.clone();

        if let Some(enabled) = self.enabled {
            next.enabled = enabled;
        }
        if let Some(max_records) = self.max_records {
            next.max_records = max_records.clamp(MIN_REGISTER_RECORDS, MAX_REGISTER_RECORDS);
        }
        if let Some(include) = self.include_decisions {
            next.include_decisions = include;
        }
        if let Some(include) = self.include_market_data {
            next.include_market_data = include;
        }

        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed_config() -> CoinSourceConfig {
        let mut config = CoinSourceConfig::default();
        config.source_type = SourceType::Mixed;
        config
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let config = mixed_config();
        assert_eq!(CoinSourcePatch::default().apply(&config), config);
    }

    #[test]
    fn test_first_ai500_enable_defaults_to_fetch_all() {
        let config = mixed_config();
        let next = CoinSourcePatch {
            use_ai500: Some(true),
            ..Default::default()
        }
        .apply(&config);

        assert!(next.use_ai500);
        assert!(next.ai500_fetch_all);
        // Everything else untouched.
        assert_eq!(next.static_coins, config.static_coins);
        assert_eq!(next.ai500_limit, None);
        assert!(!next.use_oi_top);
    }

    #[test]
    fn test_same_patch_fetch_all_wins_over_implied_default() {
        let next = CoinSourcePatch {
            use_ai500: Some(true),
            ai500_fetch_all: Some(false),
            ..Default::default()
        }
        .apply(&mixed_config());

        assert!(next.use_ai500);
        assert!(!next.ai500_fetch_all);
    }

    #[test]
    fn test_first_binance_enable_populates_limit_and_interval() {
        let next = CoinSourcePatch {
            use_binance_top_vol: Some(true),
            ..Default::default()
        }
        .apply(&mixed_config());

        assert!(next.use_binance_top_vol);
        assert_eq!(next.binance_top_vol_limit, Some(100));
        assert_eq!(next.binance_filter_interval, Some(30));
    }

    #[test]
    fn test_binance_enable_keeps_same_patch_limit() {
        let next = CoinSourcePatch {
            use_binance_top_vol: Some(true),
            binance_top_vol_limit: Some(250),
            ..Default::default()
        }
        .apply(&mixed_config());

        assert_eq!(next.binance_top_vol_limit, Some(250));
    }

    #[test]
    fn test_disable_retains_numerics_for_re_enable() {
        let config = mixed_config();
        let enabled = CoinSourcePatch {
            use_binance_top_vol: Some(true),
            binance_top_vol_limit: Some(40),
            ..Default::default()
        }
        .apply(&config);

        let disabled = CoinSourcePatch {
            use_binance_top_vol: Some(false),
            ..Default::default()
        }
        .apply(&enabled);
        assert!(!disabled.use_binance_top_vol);
        assert_eq!(disabled.binance_top_vol_limit, Some(40));

        let re_enabled = CoinSourcePatch {
            use_binance_top_vol: Some(true),
            ..Default::default()
        }
        .apply(&disabled);
        assert_eq!(re_enabled.binance_top_vol_limit, Some(40));
    }

    #[test]
    fn test_oi_enable_leaves_limit_to_accessor_default() {
        let next = CoinSourcePatch {
            use_oi_top: Some(true),
            ..Default::default()
        }
        .apply(&mixed_config());

        assert!(next.use_oi_top);
        assert_eq!(next.oi_top_limit, None);
        assert_eq!(next.oi_top_limit(), 10);
    }

    #[test]
    fn test_limits_clamp_to_one() {
        let next = CoinSourcePatch {
            ai500_limit: Some(0),
            blackbox_cutoff_limit: Some(0),
            ..Default::default()
        }
        .apply(&mixed_config());

        assert_eq!(next.ai500_limit, Some(1));
        assert_eq!(next.blackbox_cutoff_limit, Some(1));
    }

    #[test]
    fn test_mode_switch_preserves_other_modes_fields() {
        let mut config = mixed_config();
        config.static_coins = vec!["BTCUSDT".to_string()];
        config.use_oi_top = true;

        let next = CoinSourcePatch {
            source_type: Some(SourceType::Static),
            ..Default::default()
        }
        .apply(&config);

        assert_eq!(next.source_type, SourceType::Static);
        assert!(next.use_oi_top);
        assert_eq!(next.static_coins, config.static_coins);
    }

    #[test]
    fn test_register_patch_clamps_records() {
        let config = RegisterConfig::default();
        let next = RegisterPatch {
            max_records: Some(99),
            ..Default::default()
        }
        .apply(&config);
        assert_eq!(next.max_records, 20);

        let next = RegisterPatch {
            max_records: Some(0),
            ..Default::default()
        }
        .apply(&config);
        assert_eq!(next.max_records, 1);
    }
}
