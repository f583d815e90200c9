//! Schema command implementation.

use kiln_config::KilnConfig;

use crate::error::Result;

/// Print the JSON Schema for config documents to stdout.
pub fn execute() -> Result<()> {
    println!("{}", render()?);
    Ok(())
}

pub fn render() -> Result<String> {
    let schema = KilnConfig::json_schema()?;
    Ok(serde_json::to_string_pretty(&schema)?)
}
