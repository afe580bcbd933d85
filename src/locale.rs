//! Localized display strings for the configuration editors.
//!
//! The editors never embed display text: they resolve label keys through an
//! injected [`LabelCatalog`] so the frontend owns presentation while this
//! crate owns the key set. Unknown keys fall back to the raw key name, so a
//! missing translation degrades to something debuggable instead of a blank.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

/// Display language selected by the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Language {
    En,
    Zh,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }

    /// Parse a frontend language tag. Unknown tags fall back to English.
    pub fn from_str(value: &str) -> Self {
        match value {
            "zh" | "zh-CN" | "zh-TW" => Language::Zh,
            _ => Language::En,
        }
    }
}

/// Key -> (language -> display string) lookup supplied at construction.
#[derive(Debug, Clone, Default)]
pub struct LabelCatalog {
    entries: BTreeMap<&'static str, BTreeMap<Language, &'static str>>,
}

impl LabelCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one translation. Later inserts for the same key/language win.
    pub fn insert(&mut self, key: &'static str, language: Language, text: &'static str) {
        self.entries.entry(key).or_default().insert(language, text);
    }

    /// Resolve a key for a language, falling back to the raw key name.
    pub fn translate<'a>(&'a self, key: &'a str, language: Language) -> &'a str {
        self.entries
            .get(key)
            .and_then(|by_lang| by_lang.get(&language))
            .copied()
            .unwrap_or(key)
    }

    /// Number of registered keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// (key, english, chinese) triples for both editors.
const DEFAULT_STRINGS: &[(&str, &str, &str)] = &[
    // Coin source editor
    ("source_type", "Source Type", "数据来源类型"),
    ("static", "Static List", "静态列表"),
    ("ai500", "AI500 Data Provider", "AI500 数据源"),
    ("oi_top", "OI Increase", "OI 持仓增加"),
    ("oi_low", "OI Decrease", "OI 持仓减少"),
    ("mixed", "Mixed Mode", "混合模式"),
    ("static_desc", "Manually specify trading coins", "手动指定交易币种"),
    (
        "ai500_desc",
        "Use AI500 smart-filtered popular coins",
        "使用 AI500 智能筛选的热门币种",
    ),
    ("oi_top_desc", "OI increase ranking, for long", "持仓增加榜，适合做多"),
    ("oi_low_desc", "OI decrease ranking, for short", "持仓减少榜，适合做空"),
    ("mixed_desc", "Combine multiple sources", "组合多种数据源"),
    ("static_coins", "Custom Coins", "自定义币种"),
    ("add_coin", "Add Coin", "添加币种"),
    ("use_ai500", "Enable AI500 Data Provider", "启用 AI500 数据源"),
    ("ai500_limit", "Limit", "数量上限"),
    ("use_oi_top", "Enable OI Increase", "启用 OI 持仓增加榜"),
    ("oi_top_limit", "Limit", "数量上限"),
    ("use_oi_low", "Enable OI Decrease", "启用 OI 持仓减少榜"),
    ("oi_low_limit", "Limit", "数量上限"),
    ("mixed_config", "Combined Sources Configuration", "组合数据源配置"),
    ("mixed_summary", "Selected Sources", "已选组合"),
    ("data_source_config", "Data Source Configuration", "数据源配置"),
    ("excluded_coins", "Excluded Coins", "排除币种"),
    (
        "excluded_coins_desc",
        "These coins will be excluded from all sources and will not be traded",
        "这些币种将从所有数据源中排除，不会被交易",
    ),
    ("add_excluded_coin", "Add Excluded", "添加排除"),
    ("use_binance_top_vol", "Enable Binance Top Volume", "启用币安全网海选"),
    ("binance_top_vol_limit", "Fetch Limit", "预抓数量"),
    ("binance_filter_interval", "Filter Interval (m)", "缓存间隔(分)"),
    ("ai500_fetch_all", "Fetch All Data", "获取全部名单"),
    ("blackbox_source", "Core Blackbox Filter", "核心风控黑盒"),
    ("blackbox_cutoff_limit", "Final Output Limit (To AI)", "终极名额(交付AI)"),
    (
        "pipeline_desc",
        "Sources are filtered by risk control pipeline, then truncated by blackbox.",
        "外部输入源经过风控管线洗选后，统一由黑盒限制最大输出名额。",
    ),
    // Register editor
    ("register_config", "Register Config", "寄存器配置"),
    ("register_enabled", "Enable Register", "启用寄存器"),
    (
        "register_enabled_desc",
        "Record historical decisions and use as reference in next polling",
        "记录历史决策并在下次轮询时作为参考",
    ),
    ("max_records", "Max Records", "最大记录数"),
    (
        "max_records_desc",
        "Maximum number of decision records to save",
        "保存的最大决策记录数量",
    ),
    ("include_decisions", "Include Full Decisions", "包含完整决策"),
    (
        "include_decisions_desc",
        "Include complete decision details in register",
        "在寄存器中包含完整的决策详情",
    ),
    ("include_market_data", "Include Market Data", "包含市场数据"),
    (
        "include_market_data_desc",
        "Include market data in register",
        "在寄存器中包含市场数据",
    ),
    ("token_usage", "Token Usage Tip", "Token 使用提示"),
    (
        "token_usage_desc",
        "More records increase AI prompt length, recommended to keep 5-10 records",
        "更多记录会增加 AI 提示词长度，建议保持在 5-10 条记录",
    ),
];

static DEFAULT_CATALOG: Lazy<LabelCatalog> = Lazy::new(|| {
    let mut catalog = LabelCatalog::new();
    for &(key, en, zh) in DEFAULT_STRINGS {
        catalog.insert(key, Language::En, en);
        catalog.insert(key, Language::Zh, zh);
    }
    catalog
});

/// Built-in catalog carrying the stock frontend strings.
pub fn default_catalog() -> &'static LabelCatalog {
    &DEFAULT_CATALOG
}
