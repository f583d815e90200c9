//! Init command implementation.
//!
//! Writes a config file holding the built-in values.

use std::fs;
use std::path::PathBuf;

use kiln_config::KilnConfig;

use crate::cli::{InitArgs, InitFormat};
use crate::commands::utils;
use crate::error::{CliError, Result};
use crate::ui;

/// Execute the init command.
///
/// # Errors
///
/// Returns errors for:
/// - A `--dir` that is not a directory
/// - An existing config file without `--force`
/// - File write failures
pub fn execute(args: InitArgs) -> Result<()> {
    let path = write_config(&args)?;
    ui::success(&format!("Created {}", path.display()));
    Ok(())
}

/// Write the starter file and return its path.
pub fn write_config(args: &InitArgs) -> Result<PathBuf> {
    let dir = utils::project_root(args.dir.as_deref())?;
    if !dir.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "'{}' is not a directory",
            dir.display()
        )));
    }

    let path = dir.join(args.format.file_name());
    if path.exists() && !args.force {
        return Err(CliError::AlreadyExists(path));
    }

    fs::write(&path, render(args.format)?)?;
    Ok(path)
}

/// Contents of a fresh config file.
pub fn render(format: InitFormat) -> Result<String> {
    let config = KilnConfig::default();
    let mut content = match format {
        InitFormat::Toml => toml::to_string_pretty(&config)?,
        InitFormat::Json => serde_json::to_string_pretty(&config)?,
    };
    if !content.ends_with('\n') {
        content.push('\n');
    }
    Ok(content)
}
