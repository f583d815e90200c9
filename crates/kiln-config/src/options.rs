//! The build configuration object and its output section.

use once_cell::sync::Lazy;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::defaults::{
    default_content_base, default_entry, default_filename, default_output_path,
    default_public_path, DEFAULT_CONTENT_BASE, DEFAULT_ENTRY, DEFAULT_FILENAME,
    DEFAULT_OUTPUT_PATH, DEFAULT_PUBLIC_PATH,
};
use crate::error::{ConfigError, Result};

static BUILTIN: Lazy<BuildConfig> = Lazy::new(|| BuildConfig {
    entry: DEFAULT_ENTRY.to_string(),
    output: OutputSpec {
        path: DEFAULT_OUTPUT_PATH.to_string(),
        public_path: DEFAULT_PUBLIC_PATH.to_string(),
        filename: DEFAULT_FILENAME.to_string(),
        content_base: DEFAULT_CONTENT_BASE.to_string(),
    },
});

/// Build configuration consumed by the bundler.
///
/// Serializes to the same shape bundler config files use:
///
/// ```json
/// {
///   "entry": "./src/app.js",
///   "output": {
///     "path": "./bin",
///     "publicPath": "/assets/",
///     "filename": "app.bundle.js",
///     "contentBase": "./public"
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Path to the single source file the bundler starts from
    #[serde(default = "default_entry")]
    pub entry: String,

    /// Where and how the bundle is emitted
    #[serde(default)]
    pub output: OutputSpec,
}

/// Output section of a [`BuildConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OutputSpec {
    /// Destination directory for build artifacts
    #[serde(default = "default_output_path")]
    pub path: String,

    /// URL prefix under which emitted assets are referenced at runtime
    #[serde(default = "default_public_path")]
    pub public_path: String,

    /// Name of the emitted bundle file; `[name]` expands to the chunk name
    #[serde(default = "default_filename")]
    pub filename: String,

    /// Directory treated as the root for serving static assets
    #[serde(default = "default_content_base")]
    pub content_base: String,
}

impl Default for OutputSpec {
    fn default() -> Self {
        BUILTIN.output.clone()
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        BUILTIN.clone()
    }
}

impl BuildConfig {
    /// The built-in configuration literal.
    ///
    /// Every call returns the same process-wide instance.
    ///
    /// ```
    /// use kiln_config::BuildConfig;
    ///
    /// let config = BuildConfig::builtin();
    /// assert_eq!(config.entry, "./src/app.js");
    /// assert_eq!(config.output.public_path, "/assets/");
    /// assert!(std::ptr::eq(config, BuildConfig::builtin()));
    /// ```
    pub fn builtin() -> &'static BuildConfig {
        &BUILTIN
    }

    /// Create from serde_json::Value (for programmatic config from DB/API)
    ///
    /// Missing fields take their built-in values; unknown fields are rejected.
    ///
    /// ```
    /// use kiln_config::BuildConfig;
    /// use serde_json::json;
    ///
    /// let config = BuildConfig::from_value(json!({
    ///     "entry": "./src/main.ts",
    ///     "output": { "filename": "main.js" }
    /// }))
    /// .unwrap();
    ///
    /// assert_eq!(config.entry, "./src/main.ts");
    /// assert_eq!(config.output.filename, "main.js");
    /// assert_eq!(config.output.path, "./bin");
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    pub fn from_json_str(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| ConfigError::Parse {
            source_name: "JSON".to_string(),
            message: e.to_string(),
        })
    }

    /// Pretty-printed JSON with camelCase keys.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    pub fn from_toml_str(input: &str) -> Result<Self> {
        toml::from_str(input).map_err(|e| ConfigError::Parse {
            source_name: "TOML".to_string(),
            message: e.to_string(),
        })
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }
}
