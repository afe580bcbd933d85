//! Decision-history register.
//!
//! Persists the most recent AI decisions per trader as a JSON file and
//! replays them into the next prompt, so the model sees what it did last
//! and how the market moved since. The record cap and the prompt's level
//! of detail come from [`RegisterConfig`].

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::schemas::RegisterConfig;
use crate::logger::{self, LogTag};

/// Default directory for per-trader history files.
pub const REGISTER_DIR: &str = "data/decision_history";

// ============================================================================
// RECORD TYPES
// ============================================================================

/// One decision the AI produced for a symbol.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Decision {
    pub symbol: String,
    pub action: String,
    pub stop_loss: f64,
    pub take_profit: f64,
}

/// Market snapshot for one symbol at record time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketSnapshot {
    pub price: f64,
    pub rsi: f64,
    pub change_4h: f64,
}

/// One polling cycle's entry in the register.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterRecord {
    /// RFC3339 UTC timestamp; records sort newest-first on this.
    pub timestamp: String,
    pub cycle: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub decisions: Vec<Decision>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub market_data: BTreeMap<String, MarketSnapshot>,
    pub execution_status: String,
    pub market_regime: String,
}

impl RegisterRecord {
    /// Build a record stamped now, deriving the regime from the BTC snapshot.
    pub fn new(
        cycle: u64,
        decisions: Vec<Decision>,
        market_data: BTreeMap<String, MarketSnapshot>,
        execution_status: &str,
    ) -> Self {
        let market_regime = market_data
            .get("BTCUSDT")
            .map(classify_market_regime)
            .unwrap_or("normal")
            .to_string();

        RegisterRecord {
            timestamp: chrono::Utc::now().to_rfc3339(),
            cycle,
            decisions,
            market_data,
            execution_status: execution_status.to_string(),
            market_regime,
        }
    }
}

/// Coarse regime label from the BTC snapshot. Momentum outranks RSI.
pub fn classify_market_regime(btc: &MarketSnapshot) -> &'static str {
    if btc.change_4h > 5.0 {
        "strong_uptrend"
    } else if btc.change_4h < -5.0 {
        "strong_downtrend"
    } else if btc.rsi > 70.0 {
        "overbought"
    } else if btc.rsi < 30.0 {
        "oversold"
    } else {
        "normal"
    }
}

// ============================================================================
// REGISTER STORE
// ============================================================================

/// Per-trader persistent decision history.
#[derive(Debug, Clone)]
pub struct Register {
    trader_id: String,
    config: RegisterConfig,
    base_dir: PathBuf,
}

impl Register {
    pub fn new(trader_id: &str, config: RegisterConfig) -> Self {
        Register::with_base_dir(trader_id, config, REGISTER_DIR)
    }

    /// Store under a custom directory instead of [`REGISTER_DIR`].
    pub fn with_base_dir(trader_id: &str, config: RegisterConfig, base_dir: impl AsRef<Path>) -> Self {
        Register {
            trader_id: trader_id.to_string(),
            config,
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn config(&self) -> &RegisterConfig {
        &self.config
    }

    /// Path of this trader's history file.
    pub fn register_path(&self) -> PathBuf {
        self.base_dir.join(format!("{}.json", self.trader_id))
    }

    /// Load all stored records, newest first. A missing file is empty history.
    pub fn load_records(&self) -> Result<Vec<RegisterRecord>> {
        let path = self.register_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read register file {}", path.display()))?;
        let mut records: Vec<RegisterRecord> = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse register file {}", path.display()))?;

        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(records)
    }

    /// Prepend a record and persist, truncating to the configured cap.
    pub fn save_record(&self, record: RegisterRecord) -> Result<()> {
        if !self.config.enabled {
            return Ok(());
        }

        let mut records = self.load_records()?;
        records.insert(0, record);
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        records.truncate(self.config.max_records() as usize);

        fs::create_dir_all(&self.base_dir).with_context(|| {
            format!("Failed to create register dir {}", self.base_dir.display())
        })?;

        let path = self.register_path();
        let contents =
            serde_json::to_string_pretty(&records).context("Failed to serialize register")?;
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write register file {}", path.display()))?;

        logger::debug(
            LogTag::Register,
            &format!(
                "Saved register for {} ({} records)",
                self.trader_id,
                records.len()
            ),
        );
        Ok(())
    }

    /// The newest `limit` records.
    pub fn recent_records(&self, limit: usize) -> Result<Vec<RegisterRecord>> {
        let mut records = self.load_records()?;
        records.truncate(limit);
        Ok(records)
    }

    /// Delete this trader's history file.
    pub fn clear_records(&self) -> Result<()> {
        let path = self.register_path();
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove register file {}", path.display()))?;
            logger::info(
                LogTag::Register,
                &format!("Cleared register for {}", self.trader_id),
            );
        }
        Ok(())
    }

    // ===== PROMPT =====

    /// Render the stored history as a prompt section.
    ///
    /// Returns an empty string when the register is disabled or empty, so
    /// callers can concatenate unconditionally. Decision and market detail
    /// lines respect the config's include flags.
    pub fn build_prompt(&self) -> Result<String> {
        if !self.config.enabled {
            return Ok(String::new());
        }
        let records = self.recent_records(self.config.max_records() as usize)?;
        if records.is_empty() {
            return Ok(String::new());
        }

        let mut prompt = String::new();
        prompt.push_str("## Recent Decision History\n");
        prompt.push_str("Your previous decisions, newest first. Consider consistency and avoid flip-flopping.\n\n");

        for (i, record) in records.iter().enumerate() {
            let _ = writeln!(
                prompt,
                "### Record {} | {} | cycle {} | regime: {} | status: {}",
                i + 1,
                record.timestamp,
                record.cycle,
                record.market_regime,
                record.execution_status
            );

            if self.config.include_decisions && !record.decisions.is_empty() {
                for d in &record.decisions {
                    let _ = writeln!(
                        prompt,
                        "- {} {} (SL {:.4}, TP {:.4})",
                        d.action, d.symbol, d.stop_loss, d.take_profit
                    );
                }
            }

            if self.config.include_market_data && !record.market_data.is_empty() {
                for (symbol, m) in &record.market_data {
                    let _ = writeln!(
                        prompt,
                        "- {}: price {:.4}, RSI {:.1}, 4h {:+.2}%",
                        symbol, m.price, m.rsi, m.change_4h
                    );
                }
            }

            prompt.push('\n');
        }

        Ok(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_register(config: RegisterConfig) -> (Register, TempDir) {
        let dir = TempDir::new().unwrap();
        let register = Register::with_base_dir("trader-1", config, dir.path());
        (register, dir)
    }

    fn record_at(timestamp: &str, cycle: u64) -> RegisterRecord {
        RegisterRecord {
            timestamp: timestamp.to_string(),
            cycle,
            execution_status: "executed".to_string(),
            market_regime: "normal".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_file_is_empty_history() {
        let (register, _dir) = test_register(RegisterConfig::default());
        assert!(register.load_records().unwrap().is_empty());
        assert_eq!(register.build_prompt().unwrap(), "");
    }

    #[test]
    fn test_save_prepends_and_truncates_to_cap() {
        let mut config = RegisterConfig::default();
        config.max_records = 3;
        let (register, _dir) = test_register(config);

        for i in 0..5 {
            register
                .save_record(record_at(&format!("2026-08-2{}T00:00:00+00:00", i), i))
                .unwrap();
        }

        let records = register.load_records().unwrap();
        assert_eq!(records.len(), 3);
        // Newest first.
        assert_eq!(records[0].cycle, 4);
        assert_eq!(records[2].cycle, 2);
    }

    #[test]
    fn test_disabled_register_saves_nothing() {
        let mut config = RegisterConfig::default();
        config.enabled = false;
        let (register, _dir) = test_register(config);

        register.save_record(record_at("2026-08-24T00:00:00+00:00", 1)).unwrap();
        assert!(!register.register_path().exists());
        assert_eq!(register.build_prompt().unwrap(), "");
    }

    #[test]
    fn test_out_of_order_saves_sort_newest_first() {
        let (register, _dir) = test_register(RegisterConfig::default());
        register.save_record(record_at("2026-08-24T00:00:00+00:00", 2)).unwrap();
        register.save_record(record_at("2026-08-20T00:00:00+00:00", 1)).unwrap();

        let records = register.load_records().unwrap();
        assert_eq!(records[0].cycle, 2);
        assert_eq!(records[1].cycle, 1);
    }

    #[test]
    fn test_prompt_honors_include_flags() {
        let mut record = record_at("2026-08-24T00:00:00+00:00", 7);
        record.decisions = vec![Decision {
            symbol: "BTCUSDT".to_string(),
            action: "BUY".to_string(),
            stop_loss: 58000.0,
            take_profit: 64000.0,
        }];
        record.market_data.insert(
            "BTCUSDT".to_string(),
            MarketSnapshot {
                price: 60000.0,
                rsi: 55.0,
                change_4h: 1.2,
            },
        );

        let mut config = RegisterConfig::default();
        config.include_decisions = true;
        config.include_market_data = false;
        let (register, _dir) = test_register(config);
        register.save_record(record.clone()).unwrap();

        let prompt = register.build_prompt().unwrap();
        assert!(prompt.contains("BUY BTCUSDT"));
        assert!(!prompt.contains("RSI"));

        let mut config = RegisterConfig::default();
        config.include_decisions = false;
        config.include_market_data = true;
        let (register, _dir) = test_register(config);
        register.save_record(record).unwrap();

        let prompt = register.build_prompt().unwrap();
        assert!(!prompt.contains("BUY BTCUSDT"));
        assert!(prompt.contains("RSI 55.0"));
    }

    #[test]
    fn test_market_regime_classification() {
        let snap = |rsi: f64, change_4h: f64| MarketSnapshot {
            price: 60000.0,
            rsi,
            change_4h,
        };
        assert_eq!(classify_market_regime(&snap(50.0, 6.0)), "strong_uptrend");
        assert_eq!(classify_market_regime(&snap(50.0, -6.0)), "strong_downtrend");
        assert_eq!(classify_market_regime(&snap(75.0, 1.0)), "overbought");
        assert_eq!(classify_market_regime(&snap(25.0, -1.0)), "oversold");
        assert_eq!(classify_market_regime(&snap(50.0, 0.0)), "normal");
    }

    #[test]
    fn test_record_new_derives_regime_from_btc() {
        let mut market_data = BTreeMap::new();
        market_data.insert(
            "BTCUSDT".to_string(),
            MarketSnapshot {
                price: 60000.0,
                rsi: 80.0,
                change_4h: 0.5,
            },
        );
        let record = RegisterRecord::new(3, Vec::new(), market_data, "executed");
        assert_eq!(record.market_regime, "overbought");
        assert!(!record.timestamp.is_empty());
    }

    #[test]
    fn test_clear_records_removes_file() {
        let (register, _dir) = test_register(RegisterConfig::default());
        register.save_record(record_at("2026-08-24T00:00:00+00:00", 1)).unwrap();
        assert!(register.register_path().exists());
        register.clear_records().unwrap();
        assert!(!register.register_path().exists());
        assert!(register.load_records().unwrap().is_empty());
    }
}
