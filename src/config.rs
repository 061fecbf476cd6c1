// src/config.rs
use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Settings for the command-line front end. The library core reads none of these.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Question file to load instead of the embedded bank
    #[serde(default)]
    pub questions_path: Option<PathBuf>,
    /// Default tracing filter when RUST_LOG is unset
    pub log_level: String,
}

impl AppConfig {
    /// Defaults, then `esg-readiness.toml` in the working directory, then
    /// `ESG_READINESS_*` environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let settings = ConfigBuilder::builder().set_default("log_level", "info")?;

        let settings = match env::current_dir() {
            Ok(current_dir) => {
                let config_path = current_dir.join("esg-readiness.toml");
                settings.add_source(File::from(config_path).required(false))
            }
            Err(_) => settings,
        };

        settings
            .add_source(Environment::with_prefix("ESG_READINESS"))
            .build()?
            .try_deserialize()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            questions_path: None,
            log_level: "info".to_string(),
        }
    }
}
