use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub codec: CodecConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// zstd level used when writing frames. Readers accept any level.
    pub compression_level: i32,
    /// Entry capacity of the optional decoded-column cache.
    pub column_cache_capacity: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            compression_level: 7,
            column_cache_capacity: 16,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub stdout_level: String,
    pub file_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: "logs".to_string(),
            stdout_level: "info".to_string(),
            file_level: "debug".to_string(),
        }
    }
}

use std::env;

/// Loads settings from the file named by `JONX_CONFIG` (default "jonx").
/// The file is optional; absent keys fall back to defaults.
pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path = env::var("JONX_CONFIG").unwrap_or_else(|_| "jonx".to_string());

    let settings: Settings = config::Config::builder()
        .add_source(config::File::with_name(&config_path).required(false))
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
