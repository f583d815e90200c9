//! Error types for configuration loading, validation and resolution.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Config parsing/loading errors
    #[error("config not found (looked for kiln.toml, kiln.config.json, package.json#kiln)")]
    NotFound,

    #[error("config file does not exist: {}", .path.display())]
    ConfigFileMissing { path: PathBuf },

    #[error("unsupported configuration format: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("failed to parse {source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    #[error("invalid config value for '{field}'{}", .hint.as_deref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue { field: String, hint: Option<String> },

    #[error("profile '{name}' not found (available: {})", format_available(.available))]
    ProfileNotFound {
        name: String,
        available: Vec<String>,
    },

    #[error("invalid profile override: {message}")]
    InvalidProfileOverride { message: String },

    // Schema validation errors (no filesystem checks)
    #[error("'{field}' must not be empty")]
    EmptyField { field: &'static str },

    #[error("schema validation failed: {message}{}", .hint.as_deref().map(|h| format!("\n\nHint: {h}")).unwrap_or_default())]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    // Filesystem validation errors (for CLI use)
    #[error("entry file not found: {}", .path.display())]
    EntryNotFound { path: PathBuf },

    #[error("content base directory not found: {}", .path.display())]
    ContentBaseNotFound { path: PathBuf },

    #[error("output path exists but is not a directory: {}", .path.display())]
    OutputNotDirectory { path: PathBuf },

    #[error(transparent)]
    Figment(#[from] Box<figment::Error>),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Figment(Box::new(err))
    }
}

fn format_available(available: &[String]) -> String {
    if available.is_empty() {
        "none".to_string()
    } else {
        available.join(", ")
    }
}
