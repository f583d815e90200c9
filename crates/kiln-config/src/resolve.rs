//! Turning a [`BuildConfig`] into concrete paths and URLs.

use std::path::{Path, PathBuf};

use path_clean::PathClean;
use serde::Serialize;

use crate::defaults::{AUTO_PUBLIC_PATH, DEFAULT_CHUNK_NAME};
use crate::options::BuildConfig;

pub const NAME_PLACEHOLDER: &str = "[name]";

/// A [`BuildConfig`] anchored to a project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    pub root: PathBuf,
    pub entry: PathBuf,
    pub output_dir: PathBuf,
    /// Filename with placeholders expanded
    pub filename: String,
    pub bundle_path: PathBuf,
    pub public_path: String,
    pub bundle_url: String,
    pub content_base: PathBuf,
}

impl BuildConfig {
    /// Anchor every path in the config to `root`.
    ///
    /// Relative paths are joined onto `root`, absolute paths are kept, and both
    /// are lexically cleaned. Nothing is read from disk.
    ///
    /// ```
    /// use kiln_config::BuildConfig;
    /// use std::path::Path;
    ///
    /// let resolved = BuildConfig::builtin().resolve("/srv/app");
    /// assert_eq!(resolved.entry, Path::new("/srv/app/src/app.js"));
    /// assert_eq!(resolved.bundle_path, Path::new("/srv/app/bin/app.bundle.js"));
    /// assert_eq!(resolved.bundle_url, "/assets/app.bundle.js");
    /// ```
    pub fn resolve(&self, root: impl AsRef<Path>) -> ResolvedConfig {
        let root = root.as_ref().to_path_buf().clean();
        let output_dir = anchor(&root, &self.output.path);
        let filename = render_filename(&self.output.filename, DEFAULT_CHUNK_NAME);
        let bundle_path = output_dir.join(&filename).clean();
        let bundle_url = join_url(&self.output.public_path, &filename);

        ResolvedConfig {
            entry: anchor(&root, &self.entry),
            content_base: anchor(&root, &self.output.content_base),
            output_dir,
            filename,
            bundle_path,
            public_path: self.output.public_path.clone(),
            bundle_url,
            root,
        }
    }
}

impl ResolvedConfig {
    /// URL under which an emitted asset is referenced at runtime.
    ///
    /// ```
    /// use kiln_config::BuildConfig;
    ///
    /// let resolved = BuildConfig::builtin().resolve(".");
    /// assert_eq!(resolved.asset_url("logo.png"), "/assets/logo.png");
    /// assert_eq!(resolved.asset_url("/logo.png"), "/assets/logo.png");
    /// ```
    pub fn asset_url(&self, asset: &str) -> String {
        join_url(&self.public_path, asset)
    }
}

/// Expand `[name]` in a filename template.
pub fn render_filename(template: &str, chunk_name: &str) -> String {
    template.replace(NAME_PLACEHOLDER, chunk_name)
}

fn anchor(root: &Path, path: &str) -> PathBuf {
    root.join(path).clean()
}

fn join_url(public_path: &str, asset: &str) -> String {
    let asset = asset.trim_start_matches('/');
    if public_path.is_empty() || public_path == AUTO_PUBLIC_PATH {
        return asset.to_string();
    }
    if public_path.ends_with('/') {
        format!("{public_path}{asset}")
    } else {
        format!("{public_path}/{asset}")
    }
}
