//! Risk-control survival rules applied between sources and the blackbox.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::logger::{self, LogTag};

/// Minimum-quality thresholds a candidate must clear to survive.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterRules {
    /// Minimum days since listing.
    pub min_listing_days: i64,
    /// Minimum 24h quote volume in USD.
    pub min_quote_volume_24h: f64,
    /// Minimum open interest in USD.
    pub min_open_interest: f64,
}

impl Default for FilterRules {
    fn default() -> Self {
        FilterRules {
            min_listing_days: 90,
            min_quote_volume_24h: 50_000_000.0,
            min_open_interest: 10_000_000.0,
        }
    }
}

/// Market snapshot for one symbol, as fetched by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct CoinMetrics {
    pub quote_volume_24h: f64,
    pub open_interest_usd: f64,
    pub listed_at: DateTime<Utc>,
}

impl FilterRules {
    /// Order-preserving survival filter.
    ///
    /// Symbols missing from `metrics` are dropped. `limit` of 0 means
    /// unlimited; otherwise the survivors are truncated to it.
    pub fn clean(
        &self,
        symbols: &[String],
        metrics: &HashMap<String, CoinMetrics>,
        limit: usize,
    ) -> Vec<String> {
        self.clean_at(symbols, metrics, limit, Utc::now())
    }

    /// [`Self::clean`] with an explicit clock, for deterministic evaluation.
    pub fn clean_at(
        &self,
        symbols: &[String],
        metrics: &HashMap<String, CoinMetrics>,
        limit: usize,
        now: DateTime<Utc>,
    ) -> Vec<String> {
        let min_listed_before = now - Duration::days(self.min_listing_days);
        let mut survivors: Vec<String> = Vec::new();

        for symbol in symbols {
            let Some(m) = metrics.get(symbol) else {
                logger::debug(
                    LogTag::Pipeline,
                    &format!("Dropping {}: no market metrics", symbol),
                );
                continue;
            };

            if m.listed_at > min_listed_before {
                continue;
            }
            if m.quote_volume_24h < self.min_quote_volume_24h {
                continue;
            }
            if m.open_interest_usd < self.min_open_interest {
                continue;
            }

            survivors.push(symbol.clone());
            if limit > 0 && survivors.len() >= limit {
                break;
            }
        }

        survivors
    }
}
