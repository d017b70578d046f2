use std::path::PathBuf;

use config::{Config, ConfigBuilder, File, FileFormat, builder::DefaultState};
use serde::Deserialize;

use crate::application::services::CorpusOptions;
use crate::domain::{CleaningRuleError, CleaningRuleSet, SentinelPolicy};
use crate::infrastructure::persistence::DEFAULT_OUTPUT_PATH;
use crate::infrastructure::text_processing::DEFAULT_CONVERTER;

use super::Environment;

pub const DEFAULT_INPUT_ROOT: &str = "data/resume_job_other_data";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("cleaning rules: {0}")]
    CleaningRules(#[from] CleaningRuleError),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub corpus: CorpusSettings,
    pub extraction: ExtractionSettings,
    pub logging: LoggingSettings,
    pub cleaning: CleaningSettings,
}

impl Settings {
    /// Layers `appsettings.<env>.toml` (optional) under `APP_*` variables,
    /// e.g. `APP_CORPUS__CASE_FOLD=false`.
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        let builder = Config::builder()
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );
        Self::finish(builder)
    }

    /// Parses TOML alone; `APP_*` variables are not consulted.
    pub fn from_toml(contents: &str) -> Result<Self, SettingsError> {
        let builder = Config::builder().add_source(File::from_str(contents, FileFormat::Toml));
        Self::finish(builder)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, SettingsError> {
        let settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorpusSettings {
    pub input_root: PathBuf,
    pub output_path: PathBuf,
    pub case_fold: bool,
    pub sentinel_policy: SentinelPolicy,
    pub max_concurrent_extractions: usize,
}

impl Default for CorpusSettings {
    fn default() -> Self {
        Self {
            input_root: PathBuf::from(DEFAULT_INPUT_ROOT),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            case_fold: true,
            sentinel_policy: SentinelPolicy::Skip,
            max_concurrent_extractions: 1,
        }
    }
}

impl From<&CorpusSettings> for CorpusOptions {
    fn from(settings: &CorpusSettings) -> Self {
        Self {
            case_fold: settings.case_fold,
            sentinel_policy: settings.sentinel_policy,
            max_concurrent_extractions: settings.max_concurrent_extractions.max(1),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractionSettings {
    pub pdf_timeout_secs: u64,
    pub doc_converter: String,
    pub doc_converter_args: Vec<String>,
    pub doc_timeout_secs: Option<u64>,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            pdf_timeout_secs: 30,
            doc_converter: DEFAULT_CONVERTER.to_string(),
            doc_converter_args: Vec::new(),
            doc_timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CleaningSettings {
    pub rules: Vec<CleaningRuleSetting>,
}

impl CleaningSettings {
    pub fn to_rule_set(&self) -> Result<CleaningRuleSet, CleaningRuleError> {
        CleaningRuleSet::from_pairs(
            self.rules
                .iter()
                .map(|rule| (rule.pattern.as_str(), rule.replacement.clone())),
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CleaningRuleSetting {
    pub pattern: String,
    #[serde(default)]
    pub replacement: String,
}
