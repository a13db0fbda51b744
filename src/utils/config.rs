use crate::api;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::{env, fs};

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: None,
            model: api::config::DEFAULT_MODEL.to_string(),
            temperature: 0.0,
            log_level: "off".to_string(),
        }
    }
}

pub fn get_config_path() -> PathBuf {
    let mut path = get_executable_dir();
    path.push("config.toml");
    path
}

/// Validate config to prevent obviously wrong values.
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    if config.temperature < 0.0 || config.temperature > 2.0 {
        return Err(AppError::InvalidInput(
            "Temperature must be between 0.0 and 2.0".to_string(),
        ));
    }
    if config.model.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Model name cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Read config from file, creating a default config if none exists.
pub fn read_config() -> Result<Config, AppError> {
    let config_path = get_config_path();
    if !config_path.exists() {
        write_config(&Config::default())?;
    }
    let config_str = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&config_str)?;
    validate_config(&config)?;
    Ok(config)
}

pub fn write_config(config: &Config) -> Result<(), AppError> {
    let config_path = get_config_path();
    let config_str = toml::to_string(config)?;
    fs::write(config_path, config_str)?;
    Ok(())
}

/// The API key comes from the environment first, then from config.toml.
pub fn resolve_api_key(config: &Config) -> Result<String, AppError> {
    if let Ok(key) = env::var("DEEPSEEK_API_KEY") {
        if !key.trim().is_empty() {
            return Ok(key);
        }
    }
    config.api_key.clone().ok_or(AppError::MissingApiKey)
}

fn get_executable_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}
