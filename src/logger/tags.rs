/// Log tags identifying the subsystem that emitted a message.
///
/// Tags keep console output scannable and let embedding applications filter
/// by subsystem if they route our output somewhere else.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LogTag {
    Config,
    Editor,
    Pipeline,
    Register,
    Symbols,
    Test,
    Other(String),
}

impl LogTag {
    /// Uppercase column label used in console output
    pub fn as_str(&self) -> &str {
        match self {
            LogTag::Config => "CONFIG",
            LogTag::Editor => "EDITOR",
            LogTag::Pipeline => "PIPELINE",
            LogTag::Register => "REGISTER",
            LogTag::Symbols => "SYMBOLS",
            LogTag::Test => "TEST",
            LogTag::Other(name) => name,
        }
    }
}

impl std::fmt::Display for LogTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
