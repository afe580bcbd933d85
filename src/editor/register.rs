use crate::config::patch::RegisterPatch;
use crate::config::schemas::RegisterConfig;
use crate::locale::{default_catalog, LabelCatalog, Language};

/// Headless editor for the decision-history register panel.
#[derive(Debug, Clone)]
pub struct RegisterConfigEditor<'a> {
    disabled: bool,
    language: Language,
    catalog: &'a LabelCatalog,
}

impl<'a> RegisterConfigEditor<'a> {
    pub fn new(disabled: bool, language: Language) -> RegisterConfigEditor<'static> {
        RegisterConfigEditor::with_catalog(disabled, language, default_catalog())
    }

    pub fn with_catalog(
        disabled: bool,
        language: Language,
        catalog: &'a LabelCatalog,
    ) -> RegisterConfigEditor<'a> {
        RegisterConfigEditor {
            disabled,
            language,
            catalog,
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

    fn apply(&self, config: &RegisterConfig, patch: RegisterPatch) -> Option<RegisterConfig> {
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

    pub fn set_enabled(&self, config: &RegisterConfig, enabled: bool) -> Option<RegisterConfig> {
        self.apply(
            config,
            RegisterPatch {
                enabled: Some(enabled),
                ..Default::default()
            },
        )
    }

    pub fn toggle_enabled(&self, config: &RegisterConfig) -> Option<RegisterConfig> {
        self.set_enabled(config, !config.enabled)
    }

    /// Set the record cap. Out-of-range values clamp into 1..=20.
    pub fn set_max_records(&self, config: &RegisterConfig, count: u32) -> Option<RegisterConfig> {
        self.apply(
            config,
            RegisterPatch {
                max_records: Some(count),
                ..Default::default()
            },
        )
    }

    pub fn set_include_decisions(
        &self,
        config: &RegisterConfig,
        include: bool,
    ) -> Option<RegisterConfig> {
        self.apply(
            config,
            RegisterPatch {
                include_decisions: Some(include),
                ..Default::default()
            },
        )
    }

    pub fn set_include_market_data(
        &self,
        config: &RegisterConfig,
        include: bool,
    ) -> Option<RegisterConfig> {
        self.apply(
            config,
            RegisterPatch {
                include_market_data: Some(include),
                ..Default::default()
            },
        )
    }
}
