//! Configuration loaders.
//!
//! [`BuiltinLoader`] hands out the configuration literal. [`LayeredLoader`]
//! merges several sources with increasing priority:
//!
//! 1. built-in defaults
//! 2. config file (`kiln.toml`, `kiln.config.json` or `package.json#kiln`)
//! 3. `KILN_*` environment variables (`__` separates nested keys, e.g.
//!    `KILN_OUTPUT__PUBLIC_PATH`)
//! 4. explicit [`Overrides`]
//!
//! The selected profile is applied last, over the merged document.

use std::fs;
use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized, Toml},
};
use serde_json::{Map, Value};
use tracing::debug;

use crate::config::KilnConfig;
use crate::discovery::{ConfigDiscovery, ConfigFormat, read_package_json_field};
use crate::error::{ConfigError, Result};
use crate::options::BuildConfig;

pub const ENV_PREFIX: &str = "KILN_";
pub const ENV_PROFILE: &str = "KILN_PROFILE";

/// Anything that can hand out a [`BuildConfig`].
pub trait ConfigLoader {
    fn load(&self) -> Result<BuildConfig>;
}

/// Returns the built-in configuration literal. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLoader;

impl ConfigLoader for BuiltinLoader {
    fn load(&self) -> Result<BuildConfig> {
        Ok(BuildConfig::builtin().clone())
    }
}

/// Values that take priority over every other source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub entry: Option<String>,
    pub output_path: Option<String>,
    pub public_path: Option<String>,
    pub filename: Option<String>,
    pub content_base: Option<String>,
}

impl Overrides {
    /// Read `KILN_ENTRY`, `KILN_OUTPUT__PATH`, `KILN_OUTPUT__PUBLIC_PATH`,
    /// `KILN_OUTPUT__FILENAME` and `KILN_OUTPUT__CONTENT_BASE`.
    ///
    /// Values are taken verbatim, so `KILN_OUTPUT__PATH=2024` is the string
    /// `"2024"`. Other `KILN_*` variables (`KILN_LOG`, `KILN_PROFILE`) are
    /// not config keys and are skipped.
    pub fn from_env() -> Self {
        let mut overrides = Self::default();
        for (key, value) in Env::prefixed(ENV_PREFIX).split("__").iter() {
            let slot = match key.as_str().to_ascii_lowercase().as_str() {
                "entry" => &mut overrides.entry,
                "output.path" => &mut overrides.output_path,
                "output.public_path" => &mut overrides.public_path,
                "output.filename" => &mut overrides.filename,
                "output.content_base" => &mut overrides.content_base,
                _ => continue,
            };
            *slot = Some(value);
        }
        overrides
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
            && self.output_path.is_none()
            && self.public_path.is_none()
            && self.filename.is_none()
            && self.content_base.is_none()
    }

    /// Sparse document containing only the fields that are set.
    fn to_value(&self) -> Value {
        let mut output = Map::new();
        let fields = [
            ("path", &self.output_path),
            ("publicPath", &self.public_path),
            ("filename", &self.filename),
            ("contentBase", &self.content_base),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                output.insert(key.to_string(), Value::String(value.clone()));
            }
        }

        let mut doc = Map::new();
        if let Some(entry) = &self.entry {
            doc.insert("entry".to_string(), Value::String(entry.clone()));
        }
        if !output.is_empty() {
            doc.insert("output".to_string(), Value::Object(output));
        }
        Value::Object(doc)
    }
}

/// Multi-source loader built on figment.
///
/// # Example
///
/// ```no_run
/// use kiln_config::{ConfigLoader, LayeredLoader, Overrides};
///
/// let config = LayeredLoader::new(".")
///     .profile("production")
///     .overrides(Overrides {
///         filename: Some("[name].js".into()),
///         ..Overrides::default()
///     })
///     .load()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct LayeredLoader {
    root: PathBuf,
    config_file: Option<PathBuf>,
    profile: Option<String>,
    overrides: Overrides,
    read_env: bool,
}

impl LayeredLoader {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            config_file: None,
            profile: None,
            overrides: Overrides::default(),
            read_env: true,
        }
    }

    /// Use this file instead of discovering one. Relative paths are taken
    /// from the loader root.
    pub fn config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    pub fn profile(mut self, name: impl Into<String>) -> Self {
        self.profile = Some(name.into());
        self
    }

    pub fn overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Skip `KILN_*` environment variables, including `KILN_PROFILE`.
    pub fn without_env(mut self) -> Self {
        self.read_env = false;
        self
    }

    /// The config file this loader would read, if any.
    pub fn source_file(&self) -> Result<Option<PathBuf>> {
        match &self.config_file {
            Some(path) => {
                let path = self.root.join(path);
                if !path.is_file() {
                    return Err(ConfigError::ConfigFileMissing { path });
                }
                Ok(Some(path))
            }
            None => Ok(ConfigDiscovery::new(&self.root).find()),
        }
    }

    /// Assemble the provider stack without extracting it.
    pub fn figment(&self) -> Result<Figment> {
        let mut figment = Figment::from(Serialized::defaults(KilnConfig::default()));

        if let Some(path) = self.source_file()? {
            debug!(path = %path.display(), "merging config file");
            figment = match ConfigFormat::from_path(&path)? {
                ConfigFormat::Toml => figment.merge(Toml::file_exact(&path)),
                ConfigFormat::Json => figment.merge(Json::file_exact(&path)),
                ConfigFormat::PackageJson => {
                    let content = fs::read_to_string(&path)?;
                    let value = read_package_json_field(&content, &path)?;
                    figment.merge(Serialized::defaults(value))
                }
            };
        }

        if self.read_env {
            let env = Overrides::from_env();
            if !env.is_empty() {
                debug!(env = ?env, "merging environment variables");
                figment = figment.merge(Serialized::defaults(env.to_value()));
            }
        }

        if !self.overrides.is_empty() {
            debug!(overrides = ?self.overrides, "merging explicit overrides");
            figment = figment.merge(Serialized::defaults(self.overrides.to_value()));
        }

        Ok(figment)
    }

    /// Merge all sources into a document, before any profile is applied.
    pub fn load_document(&self) -> Result<KilnConfig> {
        Ok(self.figment()?.extract()?)
    }

    /// Explicit profile first, then `KILN_PROFILE`.
    pub fn selected_profile(&self) -> Option<String> {
        self.profile.clone().or_else(|| {
            if self.read_env {
                std::env::var(ENV_PROFILE).ok().filter(|p| !p.is_empty())
            } else {
                None
            }
        })
    }
}

impl ConfigLoader for LayeredLoader {
    fn load(&self) -> Result<BuildConfig> {
        let document = self.load_document()?;
        let profile = self.selected_profile();
        document.materialize_profile(profile.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builtin_loader_is_stable() {
        let first = BuiltinLoader.load().unwrap();
        let second = BuiltinLoader.load().unwrap();
        assert_eq!(first, second);
        assert_eq!(&first, BuildConfig::builtin());
    }

    #[test]
    fn empty_overrides_serialize_to_empty_document() {
        assert!(Overrides::default().is_empty());
        assert_eq!(Overrides::default().to_value(), json!({}));
    }

    #[test]
    fn overrides_only_include_set_fields() {
        let overrides = Overrides {
            public_path: Some("/static/".into()),
            ..Overrides::default()
        };
        assert_eq!(
            overrides.to_value(),
            json!({ "output": { "publicPath": "/static/" } })
        );
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = LayeredLoader::new(dir.path())
            .without_env()
            .config_file("custom.toml")
            .load()
            .unwrap_err();
        assert!(matches!(err, ConfigError::ConfigFileMissing { .. }));
    }

    #[test]
    fn no_sources_yields_builtin() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = LayeredLoader::new(dir.path()).without_env().load().unwrap();
        assert_eq!(&config, BuildConfig::builtin());
    }
}
