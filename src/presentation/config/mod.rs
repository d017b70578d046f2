mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VARIABLE, Environment};
pub use settings::{
    CleaningRuleSetting, CleaningSettings, CorpusSettings, DEFAULT_INPUT_ROOT, ExtractionSettings,
    LoggingSettings, Settings, SettingsError,
};
