use crate::api::errors::DeepSeekError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("DeepSeek API error: {0}")]
    DeepSeek(#[from] DeepSeekError),
    #[error("config parsing error: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("config serialization error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("API key is required: set DEEPSEEK_API_KEY or run `tinker config --set-api-key <key>`")]
    MissingApiKey,
}
