use miette::Diagnostic;
use thiserror::Error;

/// Main error type for galaxy operations
#[derive(Error, Diagnostic, Debug)]
pub enum GalaxyError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(galaxy::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("JSON error: {0}")]
    #[diagnostic(code(galaxy::json))]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(code(galaxy::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Out of resources: {message}")]
    #[diagnostic(code(galaxy::resource))]
    Resource {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl GalaxyError {
    /// Shorthand for a configuration error with optional help text.
    pub fn config(message: impl Into<String>, help: Option<&str>) -> Self {
        GalaxyError::Config {
            message: message.into(),
            help: help.map(str::to_string),
        }
    }
}

pub type Result<T> = std::result::Result<T, GalaxyError>;
