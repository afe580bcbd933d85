//! Human-readable projection of the mixed-mode pipeline.

use std::fmt;

use super::schemas::CoinSourceConfig;

/// Ordered view of the active mixed-mode sources and the final cutoff.
///
/// Source labels follow a fixed precedence: AI500, Binance volume, OI
/// increase, OI decrease, then the custom list. The projection is `None`
/// when nothing is active, so callers can hide the summary line entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSummary {
    pub sources: Vec<&'static str>,
    pub blackbox_cutoff_limit: u32,
}

impl PipelineSummary {
    /// Project a config into its summary, or `None` when no source is active.
    pub fn project(config: &CoinSourceConfig) -> Option<Self> {
        let mut sources = Vec::new();

        if config.use_ai500 {
            sources.push("AI500");
        }
        if config.use_binance_top_vol {
            sources.push("BinanceVol");
        }
        if config.use_oi_top {
            sources.push("OI\u{2191}");
        }
        if config.use_oi_low {
            sources.push("OI\u{2193}");
        }
        if !config.static_coins.is_empty() {
            sources.push("Custom");
        }

        if sources.is_empty() {
            return None;
        }

        Some(PipelineSummary {
            sources,
            blackbox_cutoff_limit: config.blackbox_cutoff_limit(),
        })
    }
}

impl fmt::Display for PipelineSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} \u{279c} {}",
            self.sources.join(" + "),
            self.blackbox_cutoff_limit
        )
    }
}
