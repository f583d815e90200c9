//! Profiles command implementation.

use kiln_config::{load_document_from, ConfigDiscovery, KilnConfig};

use crate::cli::ProfilesArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the profiles command.
///
/// Prints one profile name per line to stdout, in declaration order.
pub fn execute(args: ProfilesArgs) -> Result<()> {
    let document = load(&args)?;
    let names = document.profile_names();

    if names.is_empty() {
        ui::info("No profiles declared");
    }
    for name in names {
        println!("{name}");
    }

    Ok(())
}

/// Read the config document named by `--config`, or discover one.
pub fn load(args: &ProfilesArgs) -> Result<KilnConfig> {
    let root = utils::project_root(args.root.as_deref())?;
    let document = match &args.config {
        Some(path) => load_document_from(&utils::resolve_path(path, &root))?,
        None => ConfigDiscovery::new(&root).load_document()?,
    };
    Ok(document)
}
