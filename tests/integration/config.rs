use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Serialize)]
pub struct TestConfig {
    pub files: FilesConfig,
    pub tally: TallyConfig,
    pub logging: LoggingConfig,
}

#[derive(Serialize)]
pub struct FilesConfig {
    pub totals_path: String,
    pub incoming_path: String,
}

#[derive(Serialize)]
pub struct TallyConfig {
    pub category: String,
}

#[derive(Serialize)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub console_level: String,
    pub file_level: String,
}

/// Writes a config pointing every path into `base_dir`; returns the config path.
pub fn write_config_for(base_dir: &Path, category: &str) -> String {
    let base = base_dir.to_string_lossy();
    let config_path = format!("{}/config.test.toml", base);

    let config = TestConfig {
        files: FilesConfig {
            totals_path: format!("{}/data/totals.csv", base),
            incoming_path: format!("{}/data/incoming.csv", base),
        },
        tally: TallyConfig {
            category: category.into(),
        },
        logging: LoggingConfig {
            log_dir: format!("{}/logs", base),
            console_level: "debug".into(),
            file_level: "debug".into(),
        },
    };

    fs::create_dir_all(base_dir.join("data")).unwrap();
    let toml = toml::to_string_pretty(&config).unwrap();
    fs::write(&config_path, toml).unwrap();

    config_path
}
