//! Pluggable config validation strategies
//!
//! Separates filesystem validation (for CLI use) from schema validation (for library use).

use std::path::{Component, Path, PathBuf};

use crate::defaults::AUTO_PUBLIC_PATH;
use crate::error::{ConfigError, Result};
use crate::options::BuildConfig;
use crate::resolve::NAME_PLACEHOLDER;

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use kiln_config::{BuildConfig, ConfigValidator, SchemaValidator};
///
/// SchemaValidator.validate(BuildConfig::builtin()).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        if config.entry.trim().is_empty() {
            return Err(ConfigError::EmptyField { field: "entry" });
        }

        if config.output.path.trim().is_empty() {
            return Err(ConfigError::EmptyField {
                field: "output.path",
            });
        }

        validate_filename(&config.output.filename)?;
        validate_public_path(&config.output.public_path)?;

        Ok(())
    }
}

fn validate_filename(filename: &str) -> Result<()> {
    if filename.trim().is_empty() {
        return Err(ConfigError::EmptyField {
            field: "output.filename",
        });
    }

    let path = Path::new(filename);
    if path.has_root() {
        return Err(ConfigError::SchemaValidation {
            message: format!("output.filename '{filename}' must be relative"),
            hint: Some("Put the directory in output.path and keep only the file name here".into()),
        });
    }

    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(ConfigError::SchemaValidation {
            message: format!("output.filename '{filename}' escapes the output directory"),
            hint: Some("Remove '..' segments from output.filename".into()),
        });
    }

    let without_known = filename.replace(NAME_PLACEHOLDER, "");
    if let Some(start) = without_known.find('[') {
        let token = match without_known[start..].find(']') {
            Some(end) => &without_known[start..start + end + 1],
            None => &without_known[start..],
        };
        return Err(ConfigError::SchemaValidation {
            message: format!("unsupported placeholder '{token}' in output.filename"),
            hint: Some(format!("Only {NAME_PLACEHOLDER} is supported")),
        });
    }

    Ok(())
}

fn validate_public_path(public_path: &str) -> Result<()> {
    if public_path.is_empty() || public_path == AUTO_PUBLIC_PATH || public_path.ends_with('/') {
        return Ok(());
    }

    Err(ConfigError::SchemaValidation {
        message: format!("output.publicPath '{public_path}' must end with '/'"),
        hint: Some(format!("Use '{public_path}/', an empty string, or 'auto'")),
    })
}

/// Filesystem validator (for CLI use)
///
/// Validates that the entry file and content base exist on disk, and that the
/// output path is a directory when present.
///
/// # Example
///
/// ```no_run
/// use kiln_config::{BuildConfig, ConfigValidator, FsValidator};
///
/// FsValidator::new(".").validate(BuildConfig::builtin()).unwrap();
/// ```
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        // First run schema validation
        SchemaValidator.validate(config)?;

        let resolved = config.resolve(&self.root);

        if !resolved.entry.is_file() {
            return Err(ConfigError::EntryNotFound {
                path: resolved.entry,
            });
        }

        if !resolved.content_base.is_dir() {
            return Err(ConfigError::ContentBaseNotFound {
                path: resolved.content_base,
            });
        }

        if resolved.output_dir.exists() && !resolved.output_dir.is_dir() {
            return Err(ConfigError::OutputNotDirectory {
                path: resolved.output_dir,
            });
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &BuildConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &BuildConfig, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}
