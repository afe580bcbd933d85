//! Ticker symbol normalization for the coin-selection pipeline.
//!
//! Symbols arrive as free-form user input ("btc", "BTCUSDT", "XYZ:tsla-usdc").
//! The pipeline stores exactly one canonical form per asset: crypto pairs as
//! `<BASE>USDT`, cross-market assets (equities, forex, commodities, indices)
//! as `xyz:<BASE>` with no currency suffix.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Prefix marking a cross-market (non-crypto) asset in the shared symbol namespace.
pub const CROSS_MARKET_PREFIX: &str = "xyz:";

/// Currency suffixes stripped before classification. Longest match first so
/// "-USDC" never decays into a bare "-USD" strip.
const CURRENCY_SUFFIXES: [&str; 3] = ["-USDC", "USDT", "USD"];

/// Cross-market assets tradable through the xyz dex.
static CROSS_MARKET_ASSETS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Stocks
        "TSLA", "NVDA", "AAPL", "MSFT", "META", "AMZN", "GOOGL", "AMD", "COIN", "NFLX",
        "PLTR", "HOOD", "INTC", "MSTR", "TSM", "ORCL", "MU", "RIVN", "COST", "LLY",
        "CRCL", "SKHX", "SNDK",
        // Forex
        "EUR", "JPY",
        // Commodities
        "GOLD", "SILVER",
        // Index
        "XYZ100",
    ]
    .into_iter()
    .collect()
});

/// Classification of a ticker after trimming and uppercasing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolClass {
    /// Regular crypto symbol, canonically stored with a USDT suffix.
    Native(String),
    /// Cross-market asset base, canonically stored as `xyz:<base>`.
    CrossMarket(String),
}

/// Classify a raw ticker.
///
/// Uppercases and trims, strips an optional case-insensitive `xyz:` prefix
/// and one trailing currency suffix, then tests the residual base against the
/// cross-market asset set. Inputs that miss the set come back unchanged
/// (uppercased) as [`SymbolClass::Native`].
pub fn classify(raw: &str) -> SymbolClass {
    let symbol = raw.trim().to_uppercase();

    let stripped = symbol.strip_prefix("XYZ:").unwrap_or(&symbol);
    let base = strip_currency_suffix(stripped);

    if CROSS_MARKET_ASSETS.contains(base) {
        SymbolClass::CrossMarket(base.to_string())
    } else {
        SymbolClass::Native(symbol)
    }
}

/// Whether a raw ticker refers to a cross-market asset.
pub fn is_cross_market(raw: &str) -> bool {
    matches!(classify(raw), SymbolClass::CrossMarket(_))
}

/// Convert a freely typed ticker into the canonical stored form.
///
/// Returns `None` when the input is empty after trimming. Idempotent:
/// normalizing an already-canonical symbol returns it unchanged.
pub fn normalize(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        return None;
    }

    let formatted = match classify(raw) {
        SymbolClass::CrossMarket(base) => format!("{}{}", CROSS_MARKET_PREFIX, base),
        SymbolClass::Native(symbol) => {
            if symbol.ends_with("USDT") {
                symbol
            } else {
                format!("{}USDT", symbol)
            }
        }
    };

    Some(formatted)
}

fn strip_currency_suffix(symbol: &str) -> &str {
    for suffix in CURRENCY_SUFFIXES {
        if let Some(base) = symbol.strip_suffix(suffix) {
            return base;
        }
    }
    symbol
}
