//! Built-in option values.
//!
//! These are the values the configuration literal ships with. They double as
//! the fallbacks for fields left out of a partial config file.

pub const DEFAULT_ENTRY: &str = "./src/app.js";
pub const DEFAULT_OUTPUT_PATH: &str = "./bin";
pub const DEFAULT_PUBLIC_PATH: &str = "/assets/";
pub const DEFAULT_FILENAME: &str = "app.bundle.js";
pub const DEFAULT_CONTENT_BASE: &str = "./public";

/// Chunk name substituted for `[name]` when a single string entry is used.
pub const DEFAULT_CHUNK_NAME: &str = "main";

/// Public path value that defers URL resolution to runtime.
pub const AUTO_PUBLIC_PATH: &str = "auto";

pub(crate) fn default_entry() -> String {
    DEFAULT_ENTRY.to_string()
}

pub(crate) fn default_output_path() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}

pub(crate) fn default_public_path() -> String {
    DEFAULT_PUBLIC_PATH.to_string()
}

pub(crate) fn default_filename() -> String {
    DEFAULT_FILENAME.to_string()
}

pub(crate) fn default_content_base() -> String {
    DEFAULT_CONTENT_BASE.to_string()
}
