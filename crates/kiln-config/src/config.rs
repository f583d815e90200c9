//! Config file document and profile merging.
//!
//! A config file carries the [`BuildConfig`] fields plus an optional table of
//! named profiles. For file discovery, see the `discovery` module.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::defaults::default_entry;
use crate::error::{ConfigError, Result};
use crate::options::{BuildConfig, OutputSpec};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct KilnConfig {
    /// Path to the single source file the bundler starts from
    #[serde(default = "default_entry")]
    pub entry: String,

    #[serde(default)]
    pub output: OutputSpec,

    /// Named partial configurations merged over the base on request
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub profiles: IndexMap<String, Value>,
}

impl Default for KilnConfig {
    fn default() -> Self {
        Self::from(BuildConfig::builtin().clone())
    }
}

impl From<BuildConfig> for KilnConfig {
    fn from(config: BuildConfig) -> Self {
        Self {
            entry: config.entry,
            output: config.output,
            profiles: IndexMap::new(),
        }
    }
}

impl KilnConfig {
    /// Create from serde_json::Value (for programmatic config from DB/API)
    ///
    /// # Example
    ///
    /// ```
    /// use kiln_config::KilnConfig;
    /// use serde_json::json;
    ///
    /// let value = json!({
    ///     "entry": "./src/index.js",
    ///     "profiles": {
    ///         "production": { "output": { "filename": "[name].min.js" } }
    ///     }
    /// });
    ///
    /// let config = KilnConfig::from_value(value).unwrap();
    /// assert_eq!(config.entry, "./src/index.js");
    /// assert_eq!(config.profile_names(), vec!["production"]);
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

    /// JSON Schema for config documents (`kiln.config.json`, `kiln.toml`).
    pub fn json_schema() -> Result<Value> {
        let schema = schemars::schema_for!(KilnConfig);
        serde_json::to_value(schema).map_err(|e| ConfigError::InvalidValue {
            field: "schema".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// The document without any profile applied.
    pub fn base(&self) -> BuildConfig {
        BuildConfig {
            entry: self.entry.clone(),
            output: self.output.clone(),
        }
    }

    /// Declared profile names, in file order.
    pub fn profile_names(&self) -> Vec<&str> {
        self.profiles.keys().map(String::as_str).collect()
    }

    /// Produce the effective [`BuildConfig`] for `profile`.
    ///
    /// Objects in the profile merge key by key into the base; any other
    /// value replaces the base value outright.
    pub fn materialize_profile(&self, profile: Option<&str>) -> Result<BuildConfig> {
        let base = self.base();
        let Some(name) = profile else {
            return Ok(base);
        };

        let overrides = self
            .profiles
            .get(name)
            .ok_or_else(|| ConfigError::ProfileNotFound {
                name: name.to_string(),
                available: self.profiles.keys().cloned().collect(),
            })?;

        if overrides.is_null() {
            return Ok(base);
        }

        if !overrides.is_object() {
            return Err(ConfigError::InvalidProfileOverride {
                message: format!("profile '{name}' must be a table of config fields"),
            });
        }

        debug!(profile = name, "applying config profile");

        let mut merged =
            serde_json::to_value(&base).map_err(|err| ConfigError::InvalidProfileOverride {
                message: err.to_string(),
            })?;
        merge_values(&mut merged, overrides);

        serde_json::from_value(merged).map_err(|err| ConfigError::InvalidProfileOverride {
            message: format!("profile '{name}': {err}"),
        })
    }
}

fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}
