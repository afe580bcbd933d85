//! coinsource - configuration layer for a coin-trading strategy.
//!
//! Owns the coin-selection pipeline configuration (static lists, AI500,
//! open-interest rankings, Binance top-volume, mixed pipelines) and the
//! decision-history "register" feature. The crate is the single source of
//! truth for:
//!
//! - typed config schemas with embedded defaults (`config`)
//! - explicit patch/reducer updates with enable-transition defaults
//! - ticker symbol normalization (`symbols`)
//! - headless editors mirroring the frontend controls (`editor`)
//! - candidate assembly and risk filtering (`pipeline`)
//! - the per-trader decision register store (`register`)

pub mod config;
pub mod editor;
pub mod errors;
pub mod locale;
pub mod logger;
pub mod pipeline;
pub mod register;
pub mod symbols;
