//! Headless configuration editors.
//!
//! Each editor mirrors one frontend panel: it holds the panel's transient
//! state (pending text inputs, disabled flag, active language) while the
//! config itself stays owned by the caller. Mutation methods take the
//! current config and return `Some(next)` when something changed, or `None`
//! for a rejected or no-op edit, so callers persist exactly the configs
//! that differ.

mod coin_source;
mod register;

pub use coin_source::CoinSourceEditor;
pub use register::RegisterConfigEditor;
