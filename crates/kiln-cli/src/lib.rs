//! Kiln CLI - inspect, check and scaffold bundler build configuration.
//!
//! This crate provides the command-line interface over `kiln-config`.
//!
//! # Architecture
//!
//! - [`cli`] - Argument parsing with clap
//! - [`commands`] - Individual command implementations
//! - [`error`] - Error types and miette reporting
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Status messages on stderr
//!
//! # Example
//!
//! ```rust
//! use kiln_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     // CLI command implementations...
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
