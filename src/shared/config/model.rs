use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub files: FilesConfig,
    pub tally: TallyConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FilesConfig {
    /// Running totals, read at the start of a run and overwritten at the end
    pub totals_path: String,
    /// Raw events of the batch being folded in
    pub incoming_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TallyConfig {
    /// Exception label counted by this run, matched exactly
    pub category: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub console_level: String,
    pub file_level: String,
}

use std::env;

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path = env::var("TOTALS_CONFIG").unwrap_or_else(|_| "config".to_string());
    load_settings_from(&config_path)
}

/// Loads settings from `path` (extension optional). A missing file leaves every key at its default.
pub fn load_settings_from(path: &str) -> Result<Settings, config::ConfigError> {
    let settings: Settings = config::Config::builder()
        .set_default("files.totals_path", "data/totals.csv")?
        .set_default("files.incoming_path", "data/incoming.csv")?
        .set_default("tally.category", "late")?
        .set_default("logging.log_dir", "logs")?
        .set_default("logging.console_level", "info")?
        .set_default("logging.file_level", "debug")?
        .add_source(config::File::with_name(path).required(false))
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
