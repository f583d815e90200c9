//! Command implementations for the Kiln CLI.
//!
//! - [`show`] - Print the effective configuration
//! - [`check`] - Configuration validation
//! - [`init`] - Write a starter config file
//! - [`profiles`] - List declared profiles
//! - [`schema`] - Print the config JSON Schema
//!
//! Each command provides an `execute` function that takes the parsed command
//! arguments and returns a Result.

pub mod check;
pub mod init;
pub mod profiles;
pub mod schema;
pub mod show;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use init::execute as init_execute;
pub use profiles::execute as profiles_execute;
pub use schema::execute as schema_execute;
pub use show::execute as show_execute;
