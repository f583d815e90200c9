//! File-based config discovery for CLI use
//!
//! Handles finding and loading Kiln configuration files from the filesystem.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::config::KilnConfig;
use crate::error::{ConfigError, Result};
use crate::options::BuildConfig;

pub const TOML_CONFIG_FILE: &str = "kiln.toml";
pub const JSON_CONFIG_FILE: &str = "kiln.config.json";
pub const PACKAGE_JSON: &str = "package.json";
pub const PACKAGE_JSON_FIELD: &str = "kiln";

/// Supported config file flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
    /// The `kiln` field of a `package.json`
    PackageJson,
}

impl ConfigFormat {
    /// Pick a format from the file name.
    pub fn from_path(path: &Path) -> Result<Self> {
        if path.file_name() == Some(OsStr::new(PACKAGE_JSON)) {
            return Ok(Self::PackageJson);
        }

        match path.extension().and_then(OsStr::to_str) {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// File-based configuration discovery
///
/// Searches for Kiln configuration files in conventional locations and loads them.
/// Library users can build a [`KilnConfig`] with `KilnConfig::from_value()` directly.
///
/// # Example
///
/// ```no_run
/// use kiln_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let config = discovery.load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. kiln.toml
    /// 2. kiln.config.json
    /// 3. package.json (kiln field)
    pub fn find(&self) -> Option<PathBuf> {
        for name in [TOML_CONFIG_FILE, JSON_CONFIG_FILE] {
            let path = self.root.join(name);
            if path.is_file() {
                debug!(path = %path.display(), "found config file");
                return Some(path);
            }
        }

        let pkg_path = self.root.join(PACKAGE_JSON);
        let content = fs::read_to_string(&pkg_path).ok()?;
        let parsed = serde_json::from_str::<Value>(&content).ok()?;
        match parsed.get(PACKAGE_JSON_FIELD) {
            Some(field) if !field.is_null() => {
                debug!(path = %pkg_path.display(), "found config in package.json");
                Some(pkg_path)
            }
            _ => None,
        }
    }

    /// Load the discovered document without applying a profile.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load_document(&self) -> Result<KilnConfig> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        load_document_from(&path)
    }

    /// Load the discovered config with no profile applied.
    pub fn load(&self) -> Result<BuildConfig> {
        self.load_document()?.materialize_profile(None)
    }

    /// Load config with profile merging
    pub fn load_with_profile(&self, profile: &str) -> Result<BuildConfig> {
        self.load_document()?.materialize_profile(Some(profile))
    }
}

/// Load a config document from a specific file path.
pub fn load_document_from(path: &Path) -> Result<KilnConfig> {
    if !path.is_file() {
        return Err(ConfigError::ConfigFileMissing {
            path: path.to_path_buf(),
        });
    }

    let format = ConfigFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    debug!(path = %path.display(), ?format, "loading config document");

    match format {
        ConfigFormat::Toml => {
            let toml_val: toml::Value =
                toml::from_str(&content).map_err(|e| ConfigError::Parse {
                    source_name: path.display().to_string(),
                    message: format!("invalid TOML syntax: {e}"),
                })?;
            let value =
                serde_json::to_value(toml_val).map_err(|e| ConfigError::InvalidValue {
                    field: "toml".to_string(),
                    hint: Some(format!("TOML to JSON conversion failed: {e}")),
                })?;
            KilnConfig::from_value(value)
        }
        ConfigFormat::Json => {
            let value: Value = serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
                source_name: path.display().to_string(),
                message: format!("invalid JSON: {e}"),
            })?;
            KilnConfig::from_value(value)
        }
        ConfigFormat::PackageJson => {
            let value = read_package_json_field(&content, path)?;
            KilnConfig::from_value(value)
        }
    }
}

/// Extract the `kiln` field from package.json content.
pub(crate) fn read_package_json_field(content: &str, path: &Path) -> Result<Value> {
    let parsed: Value = serde_json::from_str(content).map_err(|e| ConfigError::Parse {
        source_name: path.display().to_string(),
        message: format!("invalid JSON: {e}"),
    })?;

    match parsed.get(PACKAGE_JSON_FIELD) {
        Some(Value::Null) => Err(ConfigError::InvalidValue {
            field: PACKAGE_JSON_FIELD.to_string(),
            hint: Some("The 'kiln' field cannot be null".to_string()),
        }),
        Some(value) => Ok(value.clone()),
        None => Err(ConfigError::InvalidValue {
            field: PACKAGE_JSON_FIELD.to_string(),
            hint: Some("Add a 'kiln' field to your package.json".to_string()),
        }),
    }
}

/// Discover and load config from current directory (convenience function)
///
/// # Example
///
/// ```no_run
/// use kiln_config::discover;
///
/// let config = discover().unwrap();
/// ```
pub fn discover() -> Result<BuildConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load()
}

/// Discover and load config with profile (convenience function)
///
/// # Example
///
/// ```no_run
/// use kiln_config::discover_with_profile;
///
/// let config = discover_with_profile("production").unwrap();
/// ```
pub fn discover_with_profile(profile: &str) -> Result<BuildConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load_with_profile(profile)
}
