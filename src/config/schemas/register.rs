use crate::config::metadata::{FieldType, FieldTypeInfo};
use crate::config_struct;
use crate::field_metadata;

// ============================================================================
// REGISTER (DECISION HISTORY) CONFIGURATION
// ============================================================================

/// Bounds for the stored decision-record count.
pub const MIN_REGISTER_RECORDS: u32 = 1;
pub const MAX_REGISTER_RECORDS: u32 = 20;
pub const DEFAULT_REGISTER_RECORDS: u32 = 5;

config_struct! {
    /// Decision-history register configuration.
    ///
    /// When enabled, past decisions are recorded and replayed into the AI
    /// prompt on the next polling cycle. More records mean longer prompts;
    /// 5-10 is the recommended range.
    pub struct RegisterConfig {
        #[metadata(field_metadata! {
            label: "register_enabled",
            hint: "register_enabled_desc",
        })]
        enabled: bool = true,

        #[metadata(field_metadata! {
            label: "max_records",
            hint: "max_records_desc",
            min: MIN_REGISTER_RECORDS,
            max: MAX_REGISTER_RECORDS,
            step: 1,
            unit: "records",
        })]
        max_records: u32 = DEFAULT_REGISTER_RECORDS,

        #[metadata(field_metadata! {
            label: "include_decisions",
            hint: "include_decisions_desc",
        })]
        include_decisions: bool = true,

        #[metadata(field_metadata! {
            label: "include_market_data",
            hint: "include_market_data_desc",
        })]
        include_market_data: bool = false,
    }
}

impl FieldTypeInfo for RegisterConfig {
    fn field_type() -> FieldType {
        FieldType::Object
    }
}

impl RegisterConfig {
    /// Effective record cap: zero falls back to the default, everything else
    /// clamps into the 1..=20 range the slider covers.
    pub fn max_records(&self) -> u32 {
        if self.max_records == 0 {
            DEFAULT_REGISTER_RECORDS
        } else {
            self.max_records
                .clamp(MIN_REGISTER_RECORDS, MAX_REGISTER_RECORDS)
        }
    }
}
