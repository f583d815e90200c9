//! Command-line interface definition for Kiln.
//!
//! # Command Structure
//!
//! - `kiln show` - Print the effective configuration
//! - `kiln check` - Validate configuration (and optionally the filesystem)
//! - `kiln init` - Write a starter config file
//! - `kiln profiles` - List profiles declared in the config file
//! - `kiln schema` - Print the JSON Schema for config files

mod commands;
pub mod enums;

use clap::Parser;

pub use commands::{CheckArgs, Command, InitArgs, ProfilesArgs, ShowArgs, SourceArgs};
pub use enums::*;

/// Kiln - build configuration for JavaScript bundles
#[derive(Parser, Debug)]
#[command(
    name = "kiln",
    version,
    about = "Inspect and validate bundler build configuration",
    long_about = "Kiln loads bundler build configuration from kiln.toml, kiln.config.json or\n\
                  the \"kiln\" field of package.json, layers KILN_* environment variables and\n\
                  command-line overrides on top, and resolves the result against a project root."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress status messages and logs; errors and command output still print
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
