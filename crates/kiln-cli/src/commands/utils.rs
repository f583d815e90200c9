//! Shared utilities for command implementations.

use std::path::{Path, PathBuf};

use kiln_config::LayeredLoader;
use tracing::debug;

use crate::cli::SourceArgs;
use crate::error::Result;

/// Get the current working directory.
pub fn get_cwd() -> Result<PathBuf> {
    Ok(std::env::current_dir()?)
}

/// Resolve a path relative to a working directory.
///
/// Absolute paths are returned unchanged.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Project root from `--root`, defaulting to the working directory.
pub fn project_root(root: Option<&Path>) -> Result<PathBuf> {
    let cwd = get_cwd()?;
    Ok(match root {
        Some(root) => resolve_path(root, &cwd),
        None => cwd,
    })
}

/// Build a loader from the shared source flags.
pub fn loader_for(source: &SourceArgs) -> Result<(PathBuf, LayeredLoader)> {
    let root = project_root(source.root.as_deref())?;
    debug!(root = %root.display(), "using project root");

    let mut loader = LayeredLoader::new(&root).overrides(source.overrides());
    if let Some(config) = &source.config {
        loader = loader.config_file(config);
    }
    if let Some(profile) = &source.profile {
        loader = loader.profile(profile);
    }
    if source.no_env {
        loader = loader.without_env();
    }

    Ok((root, loader))
}
