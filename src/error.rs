use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    ConfigValidation(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not find {binary}. Is it installed? error: {reason}")]
    ToolNotFound { binary: String, reason: String },

    #[error("failed to run gh: {0}")]
    ExternalCall(String),

    #[error("could not resolve repository: {0}")]
    Resolution(String),

    #[error("failed to fetch issues: {0}")]
    Fetch(String),

    #[error("cross-reference lookup failed: {0}")]
    Lookup(String),

    #[error("failed talking to API about issues: {0}")]
    ScanFailed(Box<Error>),
}

pub type Result<T> = std::result::Result<T, Error>;
