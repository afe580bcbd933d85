use crate::config::patch::CoinSourcePatch;
use crate::config::schemas::{CoinSourceConfig, SourceType, BINANCE_FILTER_INTERVALS};
use crate::config::summary::PipelineSummary;
use crate::locale::{default_catalog, LabelCatalog, Language};
use crate::logger::{self, LogTag};
use crate::symbols;

/// Headless editor for the coin-selection panel.
///
/// Holds the two pending text inputs (custom coin, excluded coin) and the
/// panel state; every mutation goes through [`CoinSourcePatch`] so the
/// enable-transition defaults apply uniformly. A disabled editor rejects
/// every mutation.
#[derive(Debug, Clone)]
pub struct CoinSourceEditor<'a> {
    disabled: bool,
    language: Language,
    catalog: &'a LabelCatalog,
    pending_coin: String,
    pending_excluded: String,
}

impl<'a> CoinSourceEditor<'a> {
    pub fn new(disabled: bool, language: Language) -> CoinSourceEditor<'static> {
        CoinSourceEditor::with_catalog(disabled, language, default_catalog())
    }

    pub fn with_catalog(
        disabled: bool,
        language: Language,
        catalog: &'a LabelCatalog,
    ) -> CoinSourceEditor<'a> {
        CoinSourceEditor {
            disabled,
            language,
            catalog,
            pending_coin: String::new(),
            pending_excluded: String::new(),
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Resolve a display label for the active language.
    pub fn label(&self, key: &'a str) -> &'a str {
        self.catalog.translate(key, self.language)
    }

    /// Apply a patch, returning `None` when disabled or nothing changed.
    fn apply(
        &self,
        config: &CoinSourceConfig,
        patch: CoinSourcePatch,
    ) -> Option<CoinSourceConfig> {
        if self.disabled {
            return None;
        }
        let next = patch.apply(config);
        if next == *config {
            None
        } else {
            Some(next)
        }
    }

    // ===== MODE =====

    pub fn select_source_type(
        &self,
        config: &CoinSourceConfig,
        source_type: SourceType,
    ) -> Option<CoinSourceConfig> {
        self.apply(
            config,
            CoinSourcePatch {
                source_type: Some(source_type),
                ..Default::default()
            },
        )
    }

    // ===== AI500 =====

    pub fn set_ai500_enabled(
        &self,
        config: &CoinSourceConfig,
        enabled: bool,
    ) -> Option<CoinSourceConfig> {
        self.apply(
            config,
            CoinSourcePatch {
                use_ai500: Some(enabled),
                ..Default::default()
            },
        )
    }

    pub fn set_ai500_fetch_all(
        &self,
        config: &CoinSourceConfig,
        fetch_all: bool,
    ) -> Option<CoinSourceConfig> {
        self.apply(
            config,
            CoinSourcePatch {
                ai500_fetch_all: Some(fetch_all),
                ..Default::default()
            },
        )
    }

    pub fn set_ai500_limit(
        &self,
        config: &CoinSourceConfig,
        limit: u32,
    ) -> Option<CoinSourceConfig> {
        self.apply(
            config,
            CoinSourcePatch {
                ai500_limit: Some(limit),
                ..Default::default()
            },
        )
    }

    // ===== OPEN INTEREST =====

    pub fn set_oi_top_enabled(
        &self,
        config: &CoinSourceConfig,
        enabled: bool,
    ) -> Option<CoinSourceConfig> {
        self.apply(
            config,
            CoinSourcePatch {
                use_oi_top: Some(enabled),
                ..Default::default()
            },
        )
    }

    pub fn set_oi_top_limit(
        &self,
        config: &CoinSourceConfig,
        limit: u32,
    ) -> Option<CoinSourceConfig> {
        self.apply(
            config,
            CoinSourcePatch {
                oi_top_limit: Some(limit),
                ..Default::default()
            },
        )
    }

    pub fn set_oi_low_enabled(
        &self,
        config: &CoinSourceConfig,
        enabled: bool,
    ) -> Option<CoinSourceConfig> {
        self.apply(
            config,
            CoinSourcePatch {
                use_oi_low: Some(enabled),
                ..Default::default()
            },
        )
    }

    pub fn set_oi_low_limit(
        &self,
        config: &CoinSourceConfig,
        limit: u32,
    ) -> Option<CoinSourceConfig> {
        self.apply(
            config,
            CoinSourcePatch {
                oi_low_limit: Some(limit),
                ..Default::default()
            },
        )
    }

    // ===== BINANCE TOP VOLUME =====

    pub fn set_binance_enabled(
        &self,
        config: &CoinSourceConfig,
        enabled: bool,
    ) -> Option<CoinSourceConfig> {
        self.apply(
            config,
            CoinSourcePatch {
                use_binance_top_vol: Some(enabled),
                ..Default::default()
            },
        )
    }

    pub fn set_binance_limit(
        &self,
        config: &CoinSourceConfig,
        limit: u32,
    ) -> Option<CoinSourceConfig> {
        self.apply(
            config,
            CoinSourcePatch {
                binance_top_vol_limit: Some(limit),
                ..Default::default()
            },
        )
    }

    /// Set the volume cache interval. Values outside the supported set are
    /// rejected as a no-op.
    pub fn set_binance_interval(
        &self,
        config: &CoinSourceConfig,
        interval: u32,
    ) -> Option<CoinSourceConfig> {
        if !BINANCE_FILTER_INTERVALS.contains(&interval) {
            return None;
        }
        self.apply(
            config,
            CoinSourcePatch {
                binance_filter_interval: Some(interval),
                ..Default::default()
            },
        )
    }

    // ===== BLACKBOX =====

    pub fn set_blackbox_cutoff(
        &self,
        config: &CoinSourceConfig,
        limit: u32,
    ) -> Option<CoinSourceConfig> {
        self.apply(
            config,
            CoinSourcePatch {
                blackbox_cutoff_limit: Some(limit),
                ..Default::default()
            },
        )
    }

    // ===== COIN LISTS =====

    pub fn set_pending_coin(&mut self, text: &str) {
        self.pending_coin = text.to_string();
    }

    pub fn pending_coin(&self) -> &str {
        &self.pending_coin
    }

    /// Normalize the pending input and append it to the custom list.
    ///
    /// The pending input is cleared whether or not the submit lands.
    /// Returns `None` when disabled, the input is empty, or the normalized
    /// symbol is already present.
    pub fn submit_coin(&mut self, config: &CoinSourceConfig) -> Option<CoinSourceConfig> {
        let raw = std::mem::take(&mut self.pending_coin);
        if self.disabled {
            return None;
        }
        let symbol = symbols::normalize(&raw)?;
        if config.static_coins.contains(&symbol) {
            return None;
        }

        logger::debug(LogTag::Editor, &format!("Adding custom coin {}", symbol));

        let mut coins = config.static_coins.clone();
        coins.push(symbol);
        self.apply(
            config,
            CoinSourcePatch {
                static_coins: Some(coins),
                ..Default::default()
            },
        )
    }

    /// Remove one symbol from the custom list. `None` when absent.
    pub fn remove_coin(
        &self,
        config: &CoinSourceConfig,
        symbol: &str,
    ) -> Option<CoinSourceConfig> {
        if !config.static_coins.iter().any(|c| c == symbol) {
            return None;
        }
        let coins: Vec<String> = config
            .static_coins
            .iter()
            .filter(|c| *c != symbol)
            .cloned()
            .collect();
        self.apply(
            config,
            CoinSourcePatch {
                static_coins: Some(coins),
                ..Default::default()
            },
        )
    }

    pub fn set_pending_excluded(&mut self, text: &str) {
        self.pending_excluded = text.to_string();
    }

    pub fn pending_excluded(&self) -> &str {
        &self.pending_excluded
    }

    /// Normalize the pending input and append it to the excluded list.
    /// Same clearing and rejection rules as [`Self::submit_coin`].
    pub fn submit_excluded(&mut self, config: &CoinSourceConfig) -> Option<CoinSourceConfig> {
        let raw = std::mem::take(&mut self.pending_excluded);
        if self.disabled {
            return None;
        }
        let symbol = symbols::normalize(&raw)?;
        if config.excluded_coins.contains(&symbol) {
            return None;
        }

        logger::debug(LogTag::Editor, &format!("Excluding coin {}", symbol));

        let mut coins = config.excluded_coins.clone();
        coins.push(symbol);
        self.apply(
            config,
            CoinSourcePatch {
                excluded_coins: Some(coins),
                ..Default::default()
            },
        )
    }

    pub fn remove_excluded(
        &self,
        config: &CoinSourceConfig,
        symbol: &str,
    ) -> Option<CoinSourceConfig> {
        if !config.excluded_coins.iter().any(|c| c == symbol) {
            return None;
        }
        let coins: Vec<String> = config
            .excluded_coins
            .iter()
            .filter(|c| *c != symbol)
            .cloned()
            .collect();
        self.apply(
            config,
            CoinSourcePatch {
                excluded_coins: Some(coins),
                ..Default::default()
            },
        )
    }

    // ===== SUMMARY =====

    /// Mixed-mode pipeline summary line, or `None` when no source is active.
    pub fn summary(&self, config: &CoinSourceConfig) -> Option<PipelineSummary> {
        PipelineSummary::project(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor() -> CoinSourceEditor<'static> {
        CoinSourceEditor::new(false, Language::En)
    }

    fn mixed_config() -> CoinSourceConfig {
        let mut config = CoinSourceConfig::default();
        config.source_type = SourceType::Mixed;
        config
    }

    #[test]
    fn test_disabled_editor_rejects_everything() {
        let mut editor = CoinSourceEditor::new(true, Language::En);
        let config = mixed_config();

        assert!(editor.select_source_type(&config, SourceType::Static).is_none());
        assert!(editor.set_ai500_enabled(&config, true).is_none());
        editor.set_pending_coin("btc");
        assert!(editor.submit_coin(&config).is_none());
        // Pending input still clears on submit.
        assert_eq!(editor.pending_coin(), "");
    }

    #[test]
    fn test_select_same_mode_is_noop() {
        let config = mixed_config();
        assert!(editor().select_source_type(&config, SourceType::Mixed).is_none());
        let next = editor()
            .select_source_type(&config, SourceType::Ai500)
            .unwrap();
        assert_eq!(next.source_type, SourceType::Ai500);
    }

    #[test]
    fn test_enable_ai500_implies_fetch_all() {
        let next = editor().set_ai500_enabled(&mixed_config(), true).unwrap();
        assert!(next.use_ai500);
        assert!(next.ai500_fetch_all);
    }

    #[test]
    fn test_submit_coin_normalizes_and_clears_pending() {
        let mut editor = editor();
        let config = mixed_config();

        editor.set_pending_coin("  btc ");
        let next = editor.submit_coin(&config).unwrap();
        assert_eq!(next.static_coins, vec!["BTCUSDT".to_string()]);
        assert_eq!(editor.pending_coin(), "");

        // Cross-market input gets the prefix form.
        editor.set_pending_coin("tsla");
        let next = editor.submit_coin(&next).unwrap();
        assert_eq!(
            next.static_coins,
            vec!["BTCUSDT".to_string(), "xyz:TSLA".to_string()]
        );
    }

    #[test]
    fn test_submit_duplicate_is_rejected_but_clears_pending() {
        let mut editor = editor();
        let mut config = mixed_config();
        config.static_coins = vec!["BTCUSDT".to_string()];

        editor.set_pending_coin("btcusdt");
        assert!(editor.submit_coin(&config).is_none());
        assert_eq!(editor.pending_coin(), "");
    }

    #[test]
    fn test_submit_empty_input_is_noop() {
        let mut editor = editor();
        editor.set_pending_coin("   ");
        assert!(editor.submit_coin(&mixed_config()).is_none());
    }

    #[test]
    fn test_remove_coin_preserves_order_of_rest() {
        let mut config = mixed_config();
        config.static_coins = vec![
            "BTCUSDT".to_string(),
            "ETHUSDT".to_string(),
            "xyz:TSLA".to_string(),
        ];

        let next = editor().remove_coin(&config, "ETHUSDT").unwrap();
        assert_eq!(
            next.static_coins,
            vec!["BTCUSDT".to_string(), "xyz:TSLA".to_string()]
        );
        assert!(editor().remove_coin(&config, "DOGEUSDT").is_none());
    }

    #[test]
    fn test_excluded_list_is_independent_of_custom_list() {
        let mut editor = editor();
        let config = mixed_config();

        editor.set_pending_excluded("doge");
        let next = editor.submit_excluded(&config).unwrap();
        assert_eq!(next.excluded_coins, vec!["DOGEUSDT".to_string()]);
        assert!(next.static_coins.is_empty());

        let back = editor.remove_excluded(&next, "DOGEUSDT").unwrap();
        assert!(back.excluded_coins.is_empty());
    }

    #[test]
    fn test_binance_interval_outside_supported_set_is_rejected() {
        let config = mixed_config();
        assert!(editor().set_binance_interval(&config, 45).is_none());
        let next = editor().set_binance_interval(&config, 60).unwrap();
        assert_eq!(next.binance_filter_interval, Some(60));
    }

    #[test]
    fn test_labels_resolve_for_active_language() {
        let en = CoinSourceEditor::new(false, Language::En);
        let zh = CoinSourceEditor::new(false, Language::Zh);
        assert_eq!(en.label("add_coin"), "Add Coin");
        assert_eq!(zh.label("add_coin"), "添加币种");
    }

    #[test]
    fn test_summary_reflects_active_sources() {
        let mut config = mixed_config();
        assert!(editor().summary(&config).is_none());

        config.use_ai500 = true;
        config.static_coins = vec!["BTCUSDT".to_string()];
        let summary = editor().summary(&config).unwrap();
        assert_eq!(summary.sources, vec!["AI500", "Custom"]);
    }
}
