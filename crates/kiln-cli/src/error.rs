//! Error handling for the Kiln CLI.
//!
//! Commands return [`CliError`]. `main` turns it into a `miette` report with
//! a hint where one helps.

use std::path::PathBuf;

use kiln_config::ConfigError;
use miette::Report;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading, validating or resolving configuration failed
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A config file is already present and --force was not given
    #[error("Refusing to overwrite {}", .0.display())]
    AlreadyExists(PathBuf),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML serialization errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),
}

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        CliError::AlreadyExists(path) => miette::miette!(
            help = "Pass --force to replace it",
            "Refusing to overwrite {}",
            path.display()
        ),
        _ => miette::miette!("{}", err),
    }
}

fn config_error_to_miette(err: ConfigError) -> Report {
    let help = match &err {
        ConfigError::NotFound => Some("Run 'kiln init' to create kiln.toml, or pass --config <path>"),
        ConfigError::UnsupportedFormat { .. } => {
            Some("Use a .toml or .json file, or the \"kiln\" field of package.json")
        }
        ConfigError::ProfileNotFound { .. } => Some("List declared profiles with 'kiln profiles'"),
        ConfigError::EntryNotFound { .. } => {
            Some("Check the 'entry' field or pass --entry <path>")
        }
        ConfigError::ContentBaseNotFound { .. } => {
            Some("Create the directory or change output.contentBase")
        }
        ConfigError::OutputNotDirectory { .. } => {
            Some("Remove the file or point output.path somewhere else")
        }
        _ => None,
    };

    match help {
        Some(help) => miette::miette!(help = help, "Configuration error: {}", err),
        None => miette::miette!("Configuration error: {}", err),
    }
}
