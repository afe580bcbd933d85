//! Coin-selection pipeline.
//!
//! Turns a [`CoinSourceConfig`] plus a market-data provider into the final
//! ordered symbol list handed to the AI. Sources contribute in a fixed
//! precedence order, duplicates keep their first position, excluded symbols
//! are dropped last so they win over every source, and in mixed mode the
//! blackbox cutoff truncates the combined result.

mod rules;

pub use rules::{CoinMetrics, FilterRules};

use std::collections::HashSet;

use crate::config::schemas::{CoinSourceConfig, SourceType};
use crate::logger::{self, LogTag};

/// External feeds the pipeline can draw candidates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateSource {
    Ai500,
    BinanceTopVol,
    OiTop,
    OiLow,
}

impl CandidateSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateSource::Ai500 => "ai500",
            CandidateSource::BinanceTopVol => "binance_top_vol",
            CandidateSource::OiTop => "oi_top",
            CandidateSource::OiLow => "oi_low",
        }
    }
}

/// Supplies candidate symbols for one feed.
///
/// `limit` is the maximum number of symbols wanted; `None` means the whole
/// feed. Implementations return normalized symbols in feed order.
pub trait CandidateProvider {
    fn candidates(&self, source: CandidateSource, limit: Option<u32>) -> Vec<String>;
}

/// Assemble the final symbol list for the active mode.
///
/// Mixed mode combines sources in precedence order (AI500, Binance volume,
/// OI increase, OI decrease, custom list), deduplicates keeping the first
/// occurrence, then truncates to the blackbox cutoff. Single-source modes
/// skip the cutoff. Excluded symbols never survive, regardless of mode.
pub fn assemble(config: &CoinSourceConfig, provider: &dyn CandidateProvider) -> Vec<String> {
    let mut combined: Vec<String> = Vec::new();

    match config.source_type {
        SourceType::Static => {
            combined.extend(config.static_coins.iter().cloned());
        }
        SourceType::Ai500 => {
            combined.extend(provider.candidates(CandidateSource::Ai500, ai500_limit(config)));
        }
        SourceType::OiTop => {
            combined.extend(
                provider.candidates(CandidateSource::OiTop, Some(config.oi_top_limit())),
            );
        }
        SourceType::OiLow => {
            combined.extend(
                provider.candidates(CandidateSource::OiLow, Some(config.oi_low_limit())),
            );
        }
        SourceType::Mixed => {
            if config.use_ai500 {
                combined
                    .extend(provider.candidates(CandidateSource::Ai500, ai500_limit(config)));
            }
            if config.use_binance_top_vol {
                combined.extend(provider.candidates(
                    CandidateSource::BinanceTopVol,
                    Some(config.binance_top_vol_limit()),
                ));
            }
            if config.use_oi_top {
                combined.extend(
                    provider.candidates(CandidateSource::OiTop, Some(config.oi_top_limit())),
                );
            }
            if config.use_oi_low {
                combined.extend(
                    provider.candidates(CandidateSource::OiLow, Some(config.oi_low_limit())),
                );
            }
            combined.extend(config.static_coins.iter().cloned());
        }
    }

    let excluded: HashSet<&str> = config.excluded_coins.iter().map(String::as_str).collect();
    let mut seen: HashSet<String> = HashSet::new();
    let mut result: Vec<String> = Vec::new();

    for symbol in combined {
        if excluded.contains(symbol.as_str()) {
            continue;
        }
        if seen.insert(symbol.clone()) {
            result.push(symbol);
        }
    }

    if config.source_type == SourceType::Mixed {
        let cutoff = config.blackbox_cutoff_limit() as usize;
        if result.len() > cutoff {
            logger::debug(
                LogTag::Pipeline,
                &format!("Blackbox cutoff: {} -> {} coins", result.len(), cutoff),
            );
            result.truncate(cutoff);
        }
    }

    result
}

fn ai500_limit(config: &CoinSourceConfig) -> Option<u32> {
    if config.ai500_fetch_all {
        None
    } else {
        Some(config.ai500_limit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Fixed feeds keyed by source, truncated to the requested limit.
    struct FixtureProvider {
        feeds: HashMap<CandidateSource, Vec<&'static str>>,
    }

    impl FixtureProvider {
        fn new() -> Self {
            let mut feeds = HashMap::new();
            feeds.insert(
                CandidateSource::Ai500,
                vec!["BTCUSDT", "ETHUSDT", "SOLUSDT", "DOGEUSDT"],
            );
            feeds.insert(
                CandidateSource::BinanceTopVol,
                vec!["BTCUSDT", "XRPUSDT", "BNBUSDT"],
            );
            feeds.insert(CandidateSource::OiTop, vec!["SUIUSDT", "ETHUSDT"]);
            feeds.insert(CandidateSource::OiLow, vec!["APTUSDT"]);
            FixtureProvider { feeds }
        }
    }

    impl CandidateProvider for FixtureProvider {
        fn candidates(&self, source: CandidateSource, limit: Option<u32>) -> Vec<String> {
            let feed = self.feeds.get(&source).cloned().unwrap_or_default();
            let take = limit.map(|l| l as usize).unwrap_or(feed.len());
            feed.into_iter().take(take).map(String::from).collect()
        }
    }

    fn mixed_config() -> CoinSourceConfig {
        let mut config = CoinSourceConfig::default();
        config.source_type = SourceType::Mixed;
        config
    }

    #[test]
    fn test_static_mode_passes_list_through() {
        let mut config = CoinSourceConfig::default();
        config.static_coins = vec!["BTCUSDT".to_string(), "xyz:TSLA".to_string()];
        let result = assemble(&config, &FixtureProvider::new());
        assert_eq!(result, vec!["BTCUSDT", "xyz:TSLA"]);
    }

    #[test]
    fn test_single_mode_honors_limit() {
        let mut config = CoinSourceConfig::default();
        config.source_type = SourceType::Ai500;
        config.ai500_limit = Some(2);
        let result = assemble(&config, &FixtureProvider::new());
        assert_eq!(result, vec!["BTCUSDT", "ETHUSDT"]);
    }

    #[test]
    fn test_fetch_all_overrides_limit() {
        let mut config = CoinSourceConfig::default();
        config.source_type = SourceType::Ai500;
        config.ai500_fetch_all = true;
        config.ai500_limit = Some(1);
        let result = assemble(&config, &FixtureProvider::new());
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn test_mixed_mode_deduplicates_first_seen() {
        let mut config = mixed_config();
        config.use_ai500 = true;
        config.use_oi_top = true;
        config.blackbox_cutoff_limit = Some(20);

        let result = assemble(&config, &FixtureProvider::new());
        // ETHUSDT appears in both feeds; the AI500 position wins.
        assert_eq!(
            result,
            vec!["BTCUSDT", "ETHUSDT", "SOLUSDT", "DOGEUSDT", "SUIUSDT"]
        );
    }

    #[test]
    fn test_excluded_coins_win_over_every_source() {
        let mut config = mixed_config();
        config.use_ai500 = true;
        config.static_coins = vec!["DOGEUSDT".to_string(), "PEPEUSDT".to_string()];
        config.excluded_coins = vec!["DOGEUSDT".to_string(), "BTCUSDT".to_string()];
        config.blackbox_cutoff_limit = Some(20);

        let result = assemble(&config, &FixtureProvider::new());
        assert!(!result.contains(&"DOGEUSDT".to_string()));
        assert!(!result.contains(&"BTCUSDT".to_string()));
        assert!(result.contains(&"PEPEUSDT".to_string()));
    }

    #[test]
    fn test_blackbox_cutoff_applies_only_in_mixed_mode() {
        let mut config = mixed_config();
        config.use_ai500 = true;
        config.use_binance_top_vol = true;
        // Default cutoff is 5.
        let result = assemble(&config, &FixtureProvider::new());
        assert_eq!(result.len(), 5);

        let mut single = CoinSourceConfig::default();
        single.source_type = SourceType::Ai500;
        single.ai500_fetch_all = true;
        single.blackbox_cutoff_limit = Some(2);
        let result = assemble(&single, &FixtureProvider::new());
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn test_mixed_mode_custom_coins_come_last() {
        let mut config = mixed_config();
        config.use_oi_low = true;
        config.static_coins = vec!["BTCUSDT".to_string()];
        let result = assemble(&config, &FixtureProvider::new());
        assert_eq!(result, vec!["APTUSDT", "BTCUSDT"]);
    }
}
