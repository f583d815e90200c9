//! Check command implementation.
//!
//! Validates configuration without building.

use kiln_config::{ConfigLoader, ConfigValidator, FsValidator, SchemaValidator};

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load and merge every configuration layer
/// 2. Apply the selected profile
/// 3. Check field values
/// 4. Check the entry file and content base on disk (if --fs flag)
pub fn execute(args: CheckArgs) -> Result<()> {
    let (root, loader) = utils::loader_for(&args.source)?;

    match loader.source_file()? {
        Some(path) => ui::info(&format!("Checking {}", path.display())),
        None => ui::warning("No config file found, checking built-in values"),
    }

    let config = loader.load()?;

    if args.fs {
        FsValidator::new(&root).validate(&config)?;
    } else {
        SchemaValidator.validate(&config)?;
    }

    if let Some(profile) = loader.selected_profile() {
        ui::success(&format!("Configuration is valid (profile '{profile}')"));
    } else {
        ui::success("Configuration is valid");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::SourceArgs;
    use crate::error::CliError;
    use kiln_config::ConfigError;
    use std::fs;
    use tempfile::TempDir;

    fn args_in(dir: &TempDir, fs: bool) -> CheckArgs {
        CheckArgs {
            source: SourceArgs {
                root: Some(dir.path().to_path_buf()),
                no_env: true,
                ..Default::default()
            },
            fs,
        }
    }

    #[test]
    fn builtin_values_pass_schema_check() {
        let dir = TempDir::new().unwrap();
        execute(args_in(&dir, false)).unwrap();
    }

    #[test]
    fn fs_check_reports_missing_entry() {
        let dir = TempDir::new().unwrap();
        let err = execute(args_in(&dir, true)).unwrap_err();
        assert!(matches!(
            err,
            CliError::Config(ConfigError::EntryNotFound { .. })
        ));
    }

    #[test]
    fn fs_check_passes_with_project_layout() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/app.js"), "export {};\n").unwrap();
        fs::create_dir_all(dir.path().join("public")).unwrap();
        execute(args_in(&dir, true)).unwrap();
    }

    #[test]
    fn bad_public_path_fails() {
        let dir = TempDir::new().unwrap();
        let mut args = args_in(&dir, false);
        args.source.public_path = Some("/assets".to_string());
        let err = execute(args).unwrap_err();
        assert!(matches!(
            err,
            CliError::Config(ConfigError::SchemaValidation { .. })
        ));
    }
}
