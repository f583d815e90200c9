//! Build configuration for the Kiln bundler.
//!
//! The configuration object names an entry file and describes the output:
//! directory, public URL prefix, bundle filename and static content base.
//! This crate models that object, loads it from files, the environment and
//! explicit overrides, validates it, and resolves it against a project root.

pub mod config;
pub mod defaults;
pub mod discovery;
pub mod error;
pub mod loader;
pub mod options;
pub mod resolve;
pub mod validation;

// Re-export main types
pub use config::*;
pub use error::*;
pub use loader::*;
pub use options::*;
pub use resolve::{render_filename, ResolvedConfig};

// Re-export discovery and validation
pub use discovery::{
    discover, discover_with_profile, load_document_from, ConfigDiscovery, ConfigFormat,
};
pub use validation::{validate_fs, validate_schema, ConfigValidator, FsValidator, SchemaValidator};
