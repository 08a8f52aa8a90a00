use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("Team '{key}' not supported. Available teams: {}", .available.join(", "))]
    UnknownTeam { key: String, available: Vec<String> },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid block selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScraperError>;
