//! Show command implementation.
//!
//! Prints the effective configuration after every layer and the selected
//! profile have been applied.

use kiln_config::ConfigLoader;
use serde::Serialize;
use tracing::debug;

use crate::cli::{PrintFormat, ShowArgs};
use crate::commands::utils;
use crate::error::Result;

/// Execute the show command.
///
/// Output goes to stdout so it can be piped; status lines go to stderr.
pub fn execute(args: ShowArgs) -> Result<()> {
    let output = render(&args)?;
    println!("{output}");
    Ok(())
}

/// Render the effective configuration in the requested format.
pub fn render(args: &ShowArgs) -> Result<String> {
    let (root, loader) = utils::loader_for(&args.source)?;

    match loader.source_file()? {
        Some(path) => debug!(path = %path.display(), "reading config file"),
        None => debug!("no config file found, using built-in values"),
    }

    let config = loader.load()?;

    if args.resolved {
        serialize(&config.resolve(&root), args.format)
    } else {
        serialize(&config, args.format)
    }
}

fn serialize<T: Serialize>(value: &T, format: PrintFormat) -> Result<String> {
    let rendered = match format {
        PrintFormat::Json => serde_json::to_string_pretty(value)?,
        PrintFormat::Toml => toml::to_string_pretty(value)?,
    };
    Ok(rendered.trim_end().to_string())
}
